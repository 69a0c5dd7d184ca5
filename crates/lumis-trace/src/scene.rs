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

//! The owning scene description passed through shading and intersection.
//!
//! The scene owns every primitive and light; shading code receives borrowed
//! views of it. There is no global state anywhere in the tracer. By
//! convention the floor, when present, sits at primitive index 0 so shadow
//! and reflection interactions are order-deterministic.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::light::{PointLight, SpotLight};
use crate::primitive::Primitive;
use crate::ray::Ray;

/// A complete ray-tracing scene plus its render parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Number of reflection generations to trace; 0 disables reflection.
    pub recursion_depth: u32,
    /// Output images are `image_dim x image_dim` pixels.
    pub image_dim: usize,
    /// The primitives, floor first by convention.
    pub primitives: Vec<Primitive>,
    /// The point lights.
    pub point_lights: Vec<PointLight>,
    /// The spotlights.
    pub spot_lights: Vec<SpotLight>,
    /// Near clip distance along the camera look direction.
    pub z_near: f64,
    /// Far clip distance along the camera look direction.
    pub z_far: f64,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
}

impl Scene {
    /// Creates an empty scene with the traditional clip range `[1, 700]`
    /// and a 45 degree vertical field of view.
    pub fn new(recursion_depth: u32, image_dim: usize) -> Self {
        Self {
            recursion_depth,
            image_dim,
            primitives: Vec::new(),
            point_lights: Vec::new(),
            spot_lights: Vec::new(),
            z_near: 1.0,
            z_far: 700.0,
            fov_y_degrees: 45.0,
        }
    }

    /// Checks the render parameters and every owned primitive.
    pub fn validate(&self) -> Result<(), TraceError> {
        if self.image_dim == 0 {
            return Err(TraceError::InvalidConfig {
                detail: "image dimension must be positive".into(),
            });
        }
        if self.z_near <= 0.0 {
            return Err(TraceError::InvalidConfig {
                detail: format!("z_near must be positive, got {}", self.z_near),
            });
        }
        if self.z_near >= self.z_far {
            return Err(TraceError::InvalidConfig {
                detail: format!(
                    "z_near ({}) must be less than z_far ({})",
                    self.z_near, self.z_far
                ),
            });
        }
        if self.fov_y_degrees.abs() >= 180.0 {
            return Err(TraceError::InvalidConfig {
                detail: format!(
                    "|fov_y| must be below 180 degrees, got {}",
                    self.fov_y_degrees
                ),
            });
        }
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    /// Finds the nearest primitive hit by `ray` by linear scan.
    ///
    /// Returns the primitive index and ray parameter. Ties on exactly equal
    /// `t` keep the earlier primitive, which together with the fixed floor
    /// position makes results list-order-deterministic.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(usize, f64)> {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(t) = primitive.intersect(ray) {
                if t > 0.0 && nearest.map_or(true, |(_, t_min)| t < t_min) {
                    nearest = Some((index, t));
                }
            }
        }
        nearest
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Coefficients, Material};
    use crate::primitive::{Shape, Sphere};
    use lumis_core::{LinearRgb, Vec3};

    fn sphere_at(z: f64) -> Primitive {
        Primitive::new(
            Shape::Sphere(Sphere::new(Vec3::new(0.0, 0.0, z), 1.0)),
            Material::new(LinearRgb::WHITE, Coefficients::new(0.1, 0.7, 0.1, 0.1), 4),
        )
    }

    #[test]
    fn test_nearest_hit_picks_closest_primitive() {
        let mut scene = Scene::new(1, 8);
        scene.primitives.push(sphere_at(-20.0));
        scene.primitives.push(sphere_at(-10.0));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let (index, t) = scene.nearest_hit(&ray).unwrap();
        assert_eq!(index, 1);
        assert!((t - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_hit_none_when_empty() {
        let scene = Scene::new(1, 8);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(scene.nearest_hit(&ray), None);
    }

    #[test]
    fn test_validate_checks_clip_range() {
        let mut scene = Scene::new(1, 8);
        scene.z_near = 10.0;
        scene.z_far = 1.0;
        assert!(matches!(
            scene.validate(),
            Err(TraceError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_flags_bad_primitive() {
        let mut scene = Scene::new(1, 8);
        scene.primitives.push(Primitive::new(
            Shape::Sphere(Sphere::new(Vec3::ZERO, 0.0)),
            Material::new(LinearRgb::WHITE, Coefficients::new(0.1, 0.7, 0.1, 0.1), 4),
        ));
        assert!(matches!(
            scene.validate(),
            Err(TraceError::MalformedScene { .. })
        ));
    }

    #[test]
    fn test_defaults_match_the_classic_setup() {
        let scene = Scene::new(3, 768);
        assert_eq!(scene.z_near, 1.0);
        assert_eq!(scene.z_far, 700.0);
        assert_eq!(scene.fov_y_degrees, 45.0);
        assert!(scene.validate().is_ok());
    }
}
