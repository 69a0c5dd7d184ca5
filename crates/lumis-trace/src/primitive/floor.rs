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

//! The finite checkered floor, optionally textured per tile.

use lumis_core::{LinearRgb, Vec3};
use serde::{Deserialize, Serialize};

use crate::ray::Ray;
use crate::texture::Texture;
use crate::EPSILON;

/// A square grid of `tile_count x tile_count` tiles in the `z = height`
/// plane, centered on the origin.
///
/// Untextured tiles alternate between the two tile colors, with tile
/// `(0, 0)` (the corner at the reference corner) taking `tile_color1`. With
/// a texture bound, every tile shows the full texture in its local UV
/// square instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Number of tiles along each side of the grid.
    pub tile_count: u32,
    /// Side length of one square tile in world units.
    pub tile_size: f64,
    /// The z coordinate of the floor plane.
    pub height: f64,
    /// Color of tiles with an even index sum.
    pub tile_color1: LinearRgb,
    /// Color of tiles with an odd index sum.
    pub tile_color2: LinearRgb,
    /// Optional per-tile texture replacing the checker colors.
    pub texture: Option<Texture>,
}

impl Floor {
    /// Creates an untextured white/black checkerboard at `z = 0`.
    pub fn new(tile_count: u32, tile_size: f64) -> Self {
        Self {
            tile_count,
            tile_size,
            height: 0.0,
            tile_color1: LinearRgb::WHITE,
            tile_color2: LinearRgb::BLACK,
            texture: None,
        }
    }

    /// Binds a texture to be sampled inside each tile.
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Distance from the grid center to each edge.
    #[inline]
    fn half_size(&self) -> f64 {
        f64::from(self.tile_count) * self.tile_size / 2.0
    }

    /// Intersects the ray with the plane `z = height` and rejects hits
    /// outside the finite grid.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        if ray.direction.z.abs() < EPSILON {
            return None;
        }
        let t = (self.height - ray.origin.z) / ray.direction.z;
        if t <= 0.0 {
            return None;
        }
        let hit = ray.at(t);
        let half = self.half_size();
        if hit.x < -half || hit.x > half || hit.y < -half || hit.y > half {
            return None;
        }
        Some(t)
    }

    /// The floor normal, constant everywhere.
    #[inline]
    pub fn normal_at(&self, _point: Vec3) -> Vec3 {
        Vec3::Z
    }

    /// The surface color at a hit point: a texture sample inside the hit's
    /// tile if a texture is bound, the checker color otherwise.
    pub fn color_at(&self, point: Vec3) -> LinearRgb {
        let half = self.half_size();
        let local_x = point.x + half;
        let local_y = point.y + half;
        let tile_x = (local_x / self.tile_size).floor();
        let tile_y = (local_y / self.tile_size).floor();

        match &self.texture {
            Some(texture) => {
                // UV inside this tile; u runs along +x, v along +y. The
                // sampler flips v so bitmap row 0 shows at v = 1.
                let u = (local_x - tile_x * self.tile_size) / self.tile_size;
                let v = (local_y - tile_y * self.tile_size) / self.tile_size;
                texture.sample(u, v)
            }
            None => {
                let parity = (tile_x as i64 + tile_y as i64).rem_euclid(2);
                if parity == 0 {
                    self.tile_color1
                } else {
                    self.tile_color2
                }
            }
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hit_from_above() {
        let floor = Floor::new(50, 20.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(floor.intersect(&ray).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_ray_misses() {
        let floor = Floor::new(50, 20.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::X);
        assert_eq!(floor.intersect(&ray), None);
    }

    #[test]
    fn test_hit_outside_grid_is_rejected() {
        let floor = Floor::new(2, 1.0); // grid spans [-1, 1] on both axes
        let ray = Ray::new(Vec3::new(5.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(floor.intersect(&ray), None);
    }

    #[test]
    fn test_checker_alternation() {
        let floor = Floor::new(4, 1.0); // grid spans [-2, 2]
        // Corner tile (0, 0) takes tile_color1.
        assert_eq!(floor.color_at(Vec3::new(-1.5, -1.5, 0.0)), LinearRgb::WHITE);
        assert_eq!(floor.color_at(Vec3::new(-0.5, -1.5, 0.0)), LinearRgb::BLACK);
        assert_eq!(floor.color_at(Vec3::new(-0.5, -0.5, 0.0)), LinearRgb::WHITE);
    }

    #[test]
    fn test_texture_replaces_checker() {
        // 2x2 texture: top row red/green, bottom row blue/white.
        let texture = Texture::new(
            2,
            2,
            vec![
                LinearRgb::RED,
                LinearRgb::GREEN,
                LinearRgb::BLUE,
                LinearRgb::WHITE,
            ],
        )
        .unwrap();
        let floor = Floor::new(2, 1.0).with_texture(texture);

        // Hit (0.25, 0.25): tile-local UV (0.25, 0.25), which the v-flip
        // sends to the texture's upper-left texel.
        assert_eq!(
            floor.color_at(Vec3::new(0.25, 0.25, 0.0)),
            LinearRgb::RED
        );
    }

    #[test]
    fn test_raised_floor_height() {
        let floor = Floor {
            height: 5.0,
            ..Floor::new(10, 1.0)
        };
        let ray = Ray::new(Vec3::new(0.0, 0.0, 8.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(floor.intersect(&ray).unwrap(), 3.0, epsilon = 1e-12);
    }
}
