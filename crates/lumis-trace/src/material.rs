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

//! Material attributes carried by every primitive.

use lumis_core::LinearRgb;
use serde::{Deserialize, Serialize};

/// The four response coefficients of the Phong model, each in `[0, 1]`.
///
/// A single reflection bounce is scaled by `reflection` without any
/// renormalization against the other coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    /// Weight of the ambient term.
    pub ambient: f64,
    /// Weight of the Lambertian diffuse term.
    pub diffuse: f64,
    /// Weight of the specular highlight term.
    pub specular: f64,
    /// Weight of the recursively traced mirror reflection.
    pub reflection: f64,
}

impl Coefficients {
    /// Creates a coefficient set.
    #[inline]
    pub const fn new(ambient: f64, diffuse: f64, specular: f64, reflection: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            reflection,
        }
    }

    /// Returns `true` when every coefficient is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.ambient.is_finite()
            && self.diffuse.is_finite()
            && self.specular.is_finite()
            && self.reflection.is_finite()
    }
}

/// Surface attributes of a primitive: base color, Phong coefficients, and
/// the integer specular exponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// The flat base color (the floor derives its color per point instead).
    pub color: LinearRgb,
    /// The Phong response coefficients.
    pub coefficients: Coefficients,
    /// The specular exponent; must be at least 1.
    pub shininess: i32,
}

impl Material {
    /// Creates a material.
    #[inline]
    pub const fn new(color: LinearRgb, coefficients: Coefficients, shininess: i32) -> Self {
        Self {
            color,
            coefficients,
            shininess,
        }
    }

    /// A matte light-absorbing material, useful as a placeholder.
    pub const MATTE_BLACK: Self = Self::new(
        LinearRgb::BLACK,
        Coefficients::new(0.0, 0.0, 0.0, 0.0),
        1,
    );
}
