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

//! Pre-decoded RGB textures for the checkered floor.
//!
//! Decoding image files is a collaborator concern; the tracer consumes a
//! plain grid of linear texels. Sampling is nearest-neighbor over a
//! `[0, 1]²` UV square with `v = 0` at the *bottom* row of the bitmap.

use lumis_core::LinearRgb;
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// An owned grid of linear RGB texels, row 0 at the top of the bitmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    width: usize,
    height: usize,
    texels: Vec<LinearRgb>,
}

impl Texture {
    /// Creates a texture from row-major texels (top row first).
    pub fn new(width: usize, height: usize, texels: Vec<LinearRgb>) -> Result<Self, TraceError> {
        if width == 0 || height == 0 || texels.len() != width * height {
            return Err(TraceError::MalformedScene {
                detail: format!(
                    "texture dimensions {}x{} do not match {} texels",
                    width,
                    height,
                    texels.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// The texture width in texels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The texture height in texels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples the texel covering `(u, v)`.
    ///
    /// Coordinates are clamped to `[0, 1]`; `v` is flipped so that `v = 0`
    /// addresses the bottom row of the bitmap.
    pub fn sample(&self, u: f64, v: f64) -> LinearRgb {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let x = (u * (self.width - 1) as f64) as usize;
        let y = ((1.0 - v) * (self.height - 1) as f64) as usize;
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);

        self.texels[y * self.width + x]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Texture {
        // Top row: red, green. Bottom row: blue, white.
        Texture::new(
            2,
            2,
            vec![
                LinearRgb::RED,
                LinearRgb::GREEN,
                LinearRgb::BLUE,
                LinearRgb::WHITE,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_mismatched_dimensions() {
        assert!(Texture::new(2, 2, vec![LinearRgb::RED; 3]).is_err());
        assert!(Texture::new(0, 2, Vec::new()).is_err());
    }

    #[test]
    fn test_v_zero_is_bottom_row() {
        let texture = two_by_two();
        assert_eq!(texture.sample(0.0, 0.0), LinearRgb::BLUE);
        assert_eq!(texture.sample(0.0, 1.0), LinearRgb::RED);
        assert_eq!(texture.sample(1.0, 1.0), LinearRgb::GREEN);
        assert_eq!(texture.sample(1.0, 0.0), LinearRgb::WHITE);
    }

    #[test]
    fn test_sample_clamps_out_of_range_uv() {
        let texture = two_by_two();
        assert_eq!(texture.sample(-3.0, 2.0), LinearRgb::RED);
        assert_eq!(texture.sample(7.0, -1.0), LinearRgb::WHITE);
    }

    #[test]
    fn test_quarter_uv_lands_in_upper_left_texel() {
        // (u, v) = (0.25, 0.25) flips to bitmap row 0.75*(h-1) -> row 0.
        let texture = two_by_two();
        assert_eq!(texture.sample(0.25, 0.25), LinearRgb::RED);
    }
}
