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

//! The closed set of traceable primitives.
//!
//! The set of shapes is fixed, so primitives are a sum type rather than a
//! trait object: intersection and shading dispatch by `match`, and the
//! scene owns its primitives as plain values.

use lumis_core::{LinearRgb, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::material::{Coefficients, Material};
use crate::ray::Ray;
use crate::texture::Texture;
use crate::EPSILON;

mod floor;
mod quadric;
mod sphere;
mod triangle;

pub use floor::Floor;
pub use quadric::{BoundsBox, Quadric};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// The geometric variants a primitive can take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A sphere.
    Sphere(Sphere),
    /// A triangle.
    Triangle(Triangle),
    /// A general quadric clipped by a bounding box.
    Quadric(Quadric),
    /// The checkered floor.
    Floor(Floor),
}

/// A shape paired with its material attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// The geometry.
    pub shape: Shape,
    /// The surface attributes.
    pub material: Material,
}

impl Primitive {
    /// Creates a primitive.
    #[inline]
    pub const fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    /// The classic scene floor: 50x50 tiles of 20 units, white/black
    /// checkers at `z = 0`, with the traditional material response.
    pub fn checkered_floor(texture: Option<Texture>) -> Self {
        let mut floor = Floor::new(50, 20.0);
        floor.texture = texture;
        Self::new(
            Shape::Floor(floor),
            Material::new(LinearRgb::BLACK, Coefficients::new(0.4, 0.2, 0.2, 0.2), 1),
        )
    }

    /// The ray parameter of the nearest valid hit, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
            Shape::Quadric(quadric) => quadric.intersect(ray),
            Shape::Floor(floor) => floor.intersect(ray),
        }
    }

    /// The unit surface normal at a hit point.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match &self.shape {
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Triangle(triangle) => triangle.normal(),
            Shape::Quadric(quadric) => quadric.normal_at(point),
            Shape::Floor(floor) => floor.normal_at(point),
        }
    }

    /// The surface color at a hit point. Flat for everything except the
    /// floor, which derives its color from the hit's tile.
    pub fn surface_color_at(&self, point: Vec3) -> LinearRgb {
        match &self.shape {
            Shape::Floor(floor) => floor.color_at(point),
            _ => self.material.color,
        }
    }

    /// Checks the structural constraints of this primitive.
    pub fn validate(&self) -> Result<(), TraceError> {
        if !self.material.coefficients.is_finite() || !self.material.color.is_finite() {
            return Err(TraceError::MalformedScene {
                detail: "material attributes must be finite".into(),
            });
        }
        if self.material.shininess < 1 {
            return Err(TraceError::MalformedScene {
                detail: format!("shininess must be at least 1, got {}", self.material.shininess),
            });
        }
        match &self.shape {
            Shape::Sphere(sphere) => {
                if !(sphere.radius > 0.0) || !sphere.radius.is_finite() {
                    return Err(TraceError::MalformedScene {
                        detail: format!("sphere radius must be positive, got {}", sphere.radius),
                    });
                }
            }
            Shape::Triangle(triangle) => {
                let doubled_area = (triangle.b - triangle.a)
                    .cross(triangle.c - triangle.a)
                    .length();
                if doubled_area <= EPSILON {
                    return Err(TraceError::MalformedScene {
                        detail: "triangle has (near-)zero area".into(),
                    });
                }
            }
            Shape::Quadric(quadric) => {
                if quadric.coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(TraceError::MalformedScene {
                        detail: "quadric coefficients must be finite".into(),
                    });
                }
            }
            Shape::Floor(floor) => {
                if floor.tile_count == 0 || !(floor.tile_size > 0.0) {
                    return Err(TraceError::MalformedScene {
                        detail: "floor needs a positive tile count and tile size".into(),
                    });
                }
            }
        }
        Ok(())
    }
}

// --- Tests ---
