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

//! Ray-triangle intersection via Möller-Trumbore.

use lumis_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::ray::Ray;

/// Rays closer to parallel than this, and hits closer to the origin than
/// this, are rejected.
const INTERSECT_EPSILON: f64 = 1e-8;

/// A triangle given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// The first vertex.
    pub a: Vec3,
    /// The second vertex.
    pub b: Vec3,
    /// The third vertex.
    pub c: Vec3,
}

impl Triangle {
    /// Creates a triangle.
    #[inline]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// The unit face normal `(b-a) × (c-a)`, constant over the face.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(self.c - self.a).normalize()
    }

    /// Möller-Trumbore intersection: solves for the barycentric coordinates
    /// and the ray parameter in one pass, rejecting parallel rays and hits
    /// outside the barycentric unit triangle.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let pvec = ray.direction.cross(edge2);
        let det = edge1.dot(pvec);
        if det.abs() < INTERSECT_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = ray.origin - self.a;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.direction.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        (t > INTERSECT_EPSILON).then_some(t)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn xy_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_hit_through_interior() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(xy_triangle().intersect(&ray).unwrap(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_miss_outside_edges() {
        let ray = Ray::new(Vec3::new(2.0, 2.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(xy_triangle().intersect(&ray), None);
    }

    #[test]
    fn test_parallel_ray_is_culled() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert_eq!(xy_triangle().intersect(&ray), None);
    }

    #[test]
    fn test_hit_behind_origin_is_rejected() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(xy_triangle().intersect(&ray), None);
    }

    #[test]
    fn test_normal_is_constant_and_unit() {
        let normal = xy_triangle().normal();
        assert_abs_diff_eq!(normal, Vec3::Z, epsilon = 1e-12);
    }
}
