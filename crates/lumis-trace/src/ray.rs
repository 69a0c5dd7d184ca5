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

//! Defines the `Ray` type used by every intersection routine.

use lumis_core::Vec3;

/// A half-line `origin + t * direction` with `t > 0`.
///
/// The direction is normalized at construction, so intersection parameters
/// are world-space distances. All intersection math relies on this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The starting point of the ray.
    pub origin: Vec3,
    /// The unit direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray from an origin and an (not necessarily unit) direction.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// The point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

// --- Tests ---
