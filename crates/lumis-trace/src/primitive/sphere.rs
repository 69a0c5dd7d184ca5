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

//! Ray-sphere intersection.

use lumis_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::ray::Ray;

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// The sphere center.
    pub center: Vec3,
    /// The sphere radius; must be positive.
    pub radius: f64,
}

impl Sphere {
    /// Creates a sphere.
    #[inline]
    pub const fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the smallest positive ray parameter hitting this sphere.
    ///
    /// With the ray direction normalized, substituting the ray into
    /// `|p - c|² = r²` gives `t² + 2(o-c)·d t + |o-c|² - r² = 0` with a unit
    /// leading coefficient.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_discriminant = discriminant.sqrt();
        let near = (-b - sqrt_discriminant) / 2.0;
        let far = (-b + sqrt_discriminant) / 2.0;

        if near > 0.0 {
            Some(near)
        } else if far > 0.0 {
            // The origin is inside the sphere; only the exit point lies ahead.
            Some(far)
        } else {
            None
        }
    }

    /// The outward unit normal at a surface point.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}

// --- Tests ---
