// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scanline z-buffer rasterization of projected triangles.
//!
//! Consumes the output of the projection stage and scan-converts each
//! triangle into a pixel grid and a depth grid. Every triangle gets one flat
//! color drawn from a fixed linear congruential generator, so the output is
//! bit-for-bit reproducible across runs and implementations.

use log::debug;
use lumis_core::{CancelToken, PixelGrid, Rgb8};
use serde::{Deserialize, Serialize};

use crate::error::RasterError;
use crate::stage::Triangle;

/// Horizontal edges are excluded from scanline intersection below this
/// y-extent.
const EDGE_EPSILON: f64 = 1e-9;

/// The viewport and depth range the rasterizer maps NDC coordinates onto.
///
/// The viewport is symmetric: `x_right = -x_left` and `y_top = -y_bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width of the output image in pixels.
    pub width: usize,
    /// Height of the output image in pixels.
    pub height: usize,
    /// World x of the left viewport edge (negative).
    pub x_left: f64,
    /// World y of the bottom viewport edge (negative).
    pub y_bottom: f64,
    /// Near depth limit; fragments closer than this are discarded.
    pub z_front: f64,
    /// Far depth limit; the depth buffer is initialized to this value.
    pub z_rear: f64,
}

impl Viewport {
    /// World x of the right viewport edge.
    #[inline]
    pub fn x_right(&self) -> f64 {
        -self.x_left
    }

    /// World y of the top viewport edge.
    #[inline]
    pub fn y_top(&self) -> f64 {
        -self.y_bottom
    }

    /// Horizontal distance between adjacent pixel centers.
    #[inline]
    pub fn dx(&self) -> f64 {
        (self.x_right() - self.x_left) / self.width as f64
    }

    /// Vertical distance between adjacent pixel centers.
    #[inline]
    pub fn dy(&self) -> f64 {
        (self.y_top() - self.y_bottom) / self.height as f64
    }

    /// Checks the constraints a usable viewport must satisfy.
    pub fn validate(&self) -> Result<(), RasterError> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidConfig {
                detail: format!(
                    "viewport must have positive dimensions, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if self.x_left >= 0.0 || self.y_bottom >= 0.0 {
            return Err(RasterError::InvalidConfig {
                detail: "x_left and y_bottom must be negative for a symmetric viewport".into(),
            });
        }
        if self.z_front >= self.z_rear {
            return Err(RasterError::InvalidConfig {
                detail: format!(
                    "z_front ({}) must be less than z_rear ({})",
                    self.z_front, self.z_rear
                ),
            });
        }
        Ok(())
    }
}

/// The deterministic flat-color generator for rasterized triangles.
///
/// A fixed linear congruential generator seeded with 1; each channel takes
/// bits 16..30 of the state modulo 256, drawn in R, G, B order, one triangle
/// after another in input order. A platform RNG must never be substituted
/// here: identical stage-3 input has to produce byte-identical images.
#[derive(Debug, Clone)]
pub struct TriangleColors {
    seed: u64,
}

impl TriangleColors {
    /// Creates the generator in its fixed initial state.
    pub fn new() -> Self {
        Self { seed: 1 }
    }

    fn next_channel(&mut self) -> u8 {
        self.seed = self.seed.wrapping_mul(214013).wrapping_add(2531011);
        (((self.seed >> 16) & 0x7fff) % 256) as u8
    }

    /// Draws the next flat triangle color.
    pub fn next_color(&mut self) -> Rgb8 {
        let r = self.next_channel();
        let g = self.next_channel();
        let b = self.next_channel();
        Rgb8::new(r, g, b)
    }
}

impl Default for TriangleColors {
    fn default() -> Self {
        Self::new()
    }
}

/// The rasterizer output: a pixel grid plus the per-pixel depth grid.
///
/// Row 0 is the top of the image; the depth grid uses the same orientation.
/// Depths of untouched pixels stay at the viewport's `z_rear`.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pixels: PixelGrid,
    depth: Vec<f64>,
    z_rear: f64,
}

impl Framebuffer {
    fn new(viewport: &Viewport) -> Self {
        Self {
            pixels: PixelGrid::new(viewport.width, viewport.height),
            depth: vec![viewport.z_rear; viewport.width * viewport.height],
            z_rear: viewport.z_rear,
        }
    }

    /// The rendered pixel grid.
    #[inline]
    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    /// The stored depth at `(row, col)`, row 0 at the top.
    #[inline]
    pub fn depth(&self, row: usize, col: usize) -> f64 {
        self.depth[row * self.pixels.width() + col]
    }

    /// One row of the depth grid.
    #[inline]
    pub fn depth_row(&self, row: usize) -> &[f64] {
        let width = self.pixels.width();
        &self.depth[row * width..(row + 1) * width]
    }

    /// The `z_rear` the depth grid was initialized with.
    #[inline]
    pub fn z_rear(&self) -> f64 {
        self.z_rear
    }
}

/// Scan-converts projected triangles into a fresh framebuffer.
///
/// Triangle colors are assigned up front, in input order, before any scan
/// conversion happens, so the color stream never depends on how the work is
/// scheduled. Degenerate triangles (zero area, collinear vertices) simply
/// contribute no fragments.
pub fn rasterize(
    viewport: &Viewport,
    triangles: &[Triangle],
    cancel: &CancelToken,
) -> Result<Framebuffer, RasterError> {
    viewport.validate()?;
    let mut framebuffer = Framebuffer::new(viewport);

    let mut generator = TriangleColors::new();
    let colors: Vec<Rgb8> = triangles.iter().map(|_| generator.next_color()).collect();

    for (triangle, color) in triangles.iter().zip(&colors) {
        if cancel.is_cancelled() {
            return Err(RasterError::Cancelled);
        }
        rasterize_triangle(viewport, triangle, *color, &mut framebuffer);
    }

    debug!(
        "rasterized {} triangles into a {}x{} framebuffer",
        triangles.len(),
        viewport.width,
        viewport.height
    );
    Ok(framebuffer)
}

fn rasterize_triangle(
    viewport: &Viewport,
    triangle: &Triangle,
    color: Rgb8,
    framebuffer: &mut Framebuffer,
) {
    let (dx, dy) = (viewport.dx(), viewport.dy());
    let (width, height) = (viewport.width, viewport.height);

    // Sort vertices by descending y.
    let [mut a, mut b, mut c] = triangle.vertices;
    if a.y < b.y {
        std::mem::swap(&mut a, &mut b);
    }
    if b.y < c.y {
        std::mem::swap(&mut b, &mut c);
    }
    if a.y < b.y {
        std::mem::swap(&mut a, &mut b);
    }

    // Clip the scanline range against the viewport and map to row indices.
    let top_scanline = a.y.min(viewport.y_top());
    let bottom_scanline = c.y.max(viewport.y_bottom);
    let raw_top = ((top_scanline - viewport.y_bottom) / dy).round() as i64;
    let raw_bottom = ((bottom_scanline - viewport.y_bottom) / dy).round() as i64;
    let top_row = raw_top.min(height as i64 - 1);
    let bottom_row = raw_bottom.max(0);

    let mut i = top_row;
    while i >= bottom_row {
        let y_s = viewport.y_bottom + i as f64 * dy;

        // Gather every valid edge intersection, then keep the two with
        // extreme x. Horizontal edges never intersect a scanline.
        let mut hits: Vec<(f64, f64)> = Vec::with_capacity(3);
        for (p1, p2) in [(a, b), (a, c), (b, c)] {
            if y_s >= p1.y.min(p2.y) && y_s <= p1.y.max(p2.y) && (p1.y - p2.y).abs() > EDGE_EPSILON
            {
                let t = (y_s - p1.y) / (p2.y - p1.y);
                hits.push((p1.x + t * (p2.x - p1.x), p1.z + t * (p2.z - p1.z)));
            }
        }
        if hits.len() < 2 {
            i -= 1;
            continue;
        }
        let (mut x_l, mut z_l) = hits[0];
        let (mut x_r, mut z_r) = hits[0];
        for &(x, z) in &hits[1..] {
            if x < x_l {
                x_l = x;
                z_l = z;
            }
            if x > x_r {
                x_r = x;
                z_r = z;
            }
        }

        let clamp_col = |x: f64| -> usize {
            (((x - viewport.x_left) / dx).round() as i64).clamp(0, width as i64 - 1) as usize
        };
        let left_col = clamp_col(x_l);
        let right_col = clamp_col(x_r);

        let row = height - 1 - i as usize;
        for j in left_col..=right_col {
            let x_p = viewport.x_left + j as f64 * dx;
            let z_p = if x_r > x_l {
                z_l + (x_p - x_l) * (z_r - z_l) / (x_r - x_l)
            } else {
                z_l
            };

            if z_p >= viewport.z_front && z_p < framebuffer.depth(row, j) {
                framebuffer.depth[row * width + j] = z_p;
                framebuffer.pixels.set(j, row, color);
            }
        }
        i -= 1;
    }
}

// --- Tests ---
