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

//! General quadric surfaces clipped by an axis-aligned bounding box.

use lumis_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::ray::Ray;
use crate::EPSILON;

/// An axis-aligned clipping box given by a reference corner and per-axis
/// extents.
///
/// An extent of zero leaves that axis unconstrained, so a quadric can be
/// bounded on some axes and infinite on others. Collaborators reading the
/// classic scene format map its `length`, `width`, `height` tokens onto the
/// y, x, and z extents respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsBox {
    /// The corner of the box with the smallest coordinates on bounded axes.
    pub reference: Vec3,
    /// Per-axis side lengths; `0` means unbounded on that axis.
    pub extent: Vec3,
}

impl BoundsBox {
    /// A box that constrains nothing.
    pub const UNBOUNDED: Self = Self {
        reference: Vec3::ZERO,
        extent: Vec3::ZERO,
    };

    /// Creates a bounding box.
    #[inline]
    pub const fn new(reference: Vec3, extent: Vec3) -> Self {
        Self { reference, extent }
    }

    /// Whether `point` satisfies every bounded axis.
    pub fn contains(&self, point: Vec3) -> bool {
        let within = |value: f64, low: f64, size: f64| -> bool {
            size.abs() <= EPSILON || (value >= low && value <= low + size)
        };
        within(point.x, self.reference.x, self.extent.x)
            && within(point.y, self.reference.y, self.extent.y)
            && within(point.z, self.reference.z, self.extent.z)
    }
}

/// A general quadric surface
/// `ax² + by² + cz² + dxy + exz + fyz + gx + hy + iz + j = 0`,
/// clipped by a [`BoundsBox`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadric {
    /// The ten coefficients `[a, b, c, d, e, f, g, h, i, j]`.
    pub coefficients: [f64; 10],
    /// The clipping box applied to candidate hit points.
    pub bounds: BoundsBox,
}

impl Quadric {
    /// Creates a quadric from its ten coefficients and clipping box.
    #[inline]
    pub const fn new(coefficients: [f64; 10], bounds: BoundsBox) -> Self {
        Self {
            coefficients,
            bounds,
        }
    }

    /// Substitutes the parametric ray into the surface equation, yielding
    /// `At² + Bt + C = 0`, and accepts the nearest root in front of the
    /// origin whose hit point lies inside the bounding box.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let [a, b, c, d, e, f, g, h, i, j] = self.coefficients;
        let o = ray.origin;
        let dir = ray.direction;

        let qa = a * dir.x * dir.x
            + b * dir.y * dir.y
            + c * dir.z * dir.z
            + d * dir.x * dir.y
            + e * dir.x * dir.z
            + f * dir.y * dir.z;
        let qb = 2.0 * (a * o.x * dir.x + b * o.y * dir.y + c * o.z * dir.z)
            + d * (o.x * dir.y + o.y * dir.x)
            + e * (o.x * dir.z + o.z * dir.x)
            + f * (o.y * dir.z + o.z * dir.y)
            + g * dir.x
            + h * dir.y
            + i * dir.z;
        let qc = a * o.x * o.x
            + b * o.y * o.y
            + c * o.z * o.z
            + d * o.x * o.y
            + e * o.x * o.z
            + f * o.y * o.z
            + g * o.x
            + h * o.y
            + i * o.z
            + j;

        let (near, far) = if qa.abs() < EPSILON {
            // The quadratic part vanished along this direction; the surface
            // is crossed at most once.
            if qb.abs() < EPSILON {
                return None;
            }
            let t = -qc / qb;
            (t, t)
        } else {
            let discriminant = qb * qb - 4.0 * qa * qc;
            if discriminant < 0.0 {
                return None;
            }
            let sqrt_discriminant = discriminant.sqrt();
            let t1 = (-qb - sqrt_discriminant) / (2.0 * qa);
            let t2 = (-qb + sqrt_discriminant) / (2.0 * qa);
            (t1.min(t2), t1.max(t2))
        };

        // Both candidates behind the origin.
        if far < EPSILON {
            return None;
        }
        // Near candidate behind the origin: only the far one can be valid.
        if near < EPSILON {
            return self.bounds.contains(ray.at(far)).then_some(far);
        }
        if self.bounds.contains(ray.at(near)) {
            return Some(near);
        }
        self.bounds.contains(ray.at(far)).then_some(far)
    }

    /// The unit surface normal: the gradient of the quadric polynomial at
    /// the hit point.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        let [a, b, c, d, e, f, g, h, i, _] = self.coefficients;
        Vec3::new(
            2.0 * a * point.x + d * point.y + e * point.z + g,
            2.0 * b * point.y + d * point.x + f * point.z + h,
            2.0 * c * point.z + e * point.x + f * point.y + i,
        )
        .normalize()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// `x² + y² + z² - 4 = 0`: a sphere of radius 2 at the origin.
    fn unit_sphere_quadric(bounds: BoundsBox) -> Quadric {
        Quadric::new(
            [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -4.0],
            bounds,
        )
    }

    #[test]
    fn test_quadric_sphere_matches_analytic_sphere() {
        let quadric = unit_sphere_quadric(BoundsBox::UNBOUNDED);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(quadric.intersect(&ray).unwrap(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bounding_box_rejects_near_root() {
        // Clip to the half-space z <= 0: the entry point at z = +2 fails,
        // the exit point at z = -2 passes.
        let bounds = BoundsBox::new(Vec3::new(-5.0, -5.0, -5.0), Vec3::new(10.0, 10.0, 5.0));
        let quadric = unit_sphere_quadric(bounds);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(quadric.intersect(&ray).unwrap(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_extent_axis_is_unbounded() {
        // Bounded tightly in x and y, unbounded in z.
        let bounds = BoundsBox::new(Vec3::new(-3.0, -3.0, 100.0), Vec3::new(6.0, 6.0, 0.0));
        let quadric = unit_sphere_quadric(bounds);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(quadric.intersect(&ray).unwrap(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_behind_origin_misses() {
        let quadric = unit_sphere_quadric(BoundsBox::UNBOUNDED);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(quadric.intersect(&ray), None);
    }

    #[test]
    fn test_degenerate_linear_quadric_is_a_plane() {
        // z - 3 = 0 has no quadratic part at all.
        let plane = Quadric::new(
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, -3.0],
            BoundsBox::UNBOUNDED,
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_abs_diff_eq!(plane.intersect(&ray).unwrap(), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(plane.normal_at(Vec3::new(0.0, 0.0, 3.0)), Vec3::Z);
    }

    #[test]
    fn test_normal_matches_sphere_normal() {
        let quadric = unit_sphere_quadric(BoundsBox::UNBOUNDED);
        let point = Vec3::new(0.0, 2.0, 0.0);
        assert_abs_diff_eq!(quadric.normal_at(point), Vec3::Y, epsilon = 1e-12);
    }
}
