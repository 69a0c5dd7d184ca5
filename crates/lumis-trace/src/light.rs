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

//! Defines the light sources of the ray tracer.
//!
//! Lights are owned by the scene and never reference primitives; the shader
//! walks the light lists with borrowed views. Neither light type attenuates
//! with distance — occlusion (hard shadows) is the only falloff.

use lumis_core::{LinearRgb, Vec3};
use serde::{Deserialize, Serialize};

/// A point light emitting uniformly in all directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// The light position in world space.
    pub position: Vec3,
    /// The light color.
    pub color: LinearRgb,
}

impl PointLight {
    /// Creates a point light.
    #[inline]
    pub const fn new(position: Vec3, color: LinearRgb) -> Self {
        Self { position, color }
    }
}

/// A point light restricted to a cone of influence.
///
/// A surface point is lit only when the angle between the light-to-point
/// direction and the cone axis stays within the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    /// The light position in world space.
    pub position: Vec3,
    /// The light color.
    pub color: LinearRgb,
    /// The cone axis (normalized).
    pub direction: Vec3,
    /// Half-angle of the cone in degrees.
    pub cutoff_degrees: f64,
}

impl SpotLight {
    /// Creates a spotlight; the cone axis is normalized here.
    #[inline]
    pub fn new(position: Vec3, color: LinearRgb, direction: Vec3, cutoff_degrees: f64) -> Self {
        Self {
            position,
            color,
            direction: direction.normalize(),
            cutoff_degrees,
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_spot_light_normalizes_direction() {
        let spot = SpotLight::new(
            Vec3::ZERO,
            LinearRgb::WHITE,
            Vec3::new(0.0, 0.0, -7.0),
            30.0,
        );
        assert_abs_diff_eq!(spot.direction, Vec3::new(0.0, 0.0, -1.0));
    }
}
