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

//! Defines the homogeneous `Mat4` type and associated operations.

use super::{degrees_to_radians, Vec3, Vec4};
use std::ops::Mul;

/// A 4x4 column-major matrix over `f64`, used for homogeneous 3D transforms.
///
/// Points are treated as column vectors: a transform is applied as `M * v`,
/// and transforms compose right-to-left (`A * B` applies `B` first). This is
/// the standard OpenGL convention; the modeling stack of the rasterizer and
/// the view/projection matrices all follow it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
            w: self.cols[3].get(index),
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::X,
                Vec4::Y,
                Vec4::Z,
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(scale.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale.z, 0.0),
                Vec4::W,
            ],
        }
    }

    /// Creates a rotation matrix about an arbitrary axis by an angle given in
    /// degrees.
    ///
    /// The axis is normalized before use; a zero-length axis yields the
    /// identity. The columns of the result are the standard basis vectors
    /// rotated by Rodrigues' formula, so the matrix agrees exactly with
    /// [`Vec3::rotate_about`] applied per vertex.
    pub fn from_axis_angle_degrees(axis: Vec3, degrees: f64) -> Self {
        let i = Vec3::X.rotate_about(axis, degrees);
        let j = Vec3::Y.rotate_about(axis, degrees);
        let k = Vec3::Z.rotate_about(axis, degrees);
        Self::from_cols(
            Vec4::from_vec3(i, 0.0),
            Vec4::from_vec3(j, 0.0),
            Vec4::from_vec3(k, 0.0),
            Vec4::W,
        )
    }

    /// Creates the view matrix for a camera at `eye` looking toward `look`
    /// with the given up hint: `V = R * T` where `T` translates by `-eye`
    /// and `R` rotates the world axes into the camera frame
    /// `(right, up, -forward)`.
    ///
    /// The up hint must not be collinear with the view direction.
    pub fn look_at(eye: Vec3, look: Vec3, up: Vec3) -> Self {
        let l = (look - eye).normalize();
        let r = l.cross(up).normalize();
        let u = r.cross(l);

        let rotation = Self::from_cols(
            Vec4::new(r.x, u.x, -l.x, 0.0),
            Vec4::new(r.y, u.y, -l.y, 0.0),
            Vec4::new(r.z, u.z, -l.z, 0.0),
            Vec4::W,
        );
        rotation * Self::from_translation(-eye)
    }

    /// Creates a right-handed perspective projection matrix with a [-1, 1]
    /// depth range.
    ///
    /// The horizontal field of view is derived as `fov_y * aspect` (in
    /// angle space, not tangent space), matching the symmetric-frustum
    /// construction `t = near·tan(fov_y/2)`, `r = near·tan(fov_x/2)`.
    pub fn perspective(fov_y_degrees: f64, aspect: f64, near: f64, far: f64) -> Self {
        let fov_y = degrees_to_radians(fov_y_degrees);
        let fov_x = fov_y * aspect;
        let t = near * (fov_y / 2.0).tan();
        let r = near * (fov_x / 2.0).tan();

        Self::from_cols(
            Vec4::new(near / r, 0.0, 0.0, 0.0),
            Vec4::new(0.0, near / t, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -(far + near) / (far - near), -1.0),
            Vec4::new(0.0, 0.0, -(2.0 * far * near) / (far - near), 0.0),
        )
    }

    /// Transforms a point `(x, y, z, 1)` by this matrix.
    ///
    /// When the resulting homogeneous `w` is neither `0` nor `1` the spatial
    /// components are divided by it (perspective division). Affine
    /// transforms keep `w = 1` and are returned untouched.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let v = *self * Vec4::from_vec3(p, 1.0);
        if v.w != 1.0 && v.w != 0.0 {
            Vec3::new(v.x / v.w, v.y / v.w, v.z / v.w)
        } else {
            v.truncate()
        }
    }

    /// Transforms a direction vector `(x, y, z, 0)` by this matrix. No
    /// perspective division is performed.
    #[inline]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(v, 0.0)).truncate()
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Matrix multiplication is
    /// not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut cols = [Vec4::ZERO; 4];
        for (col, rhs_col) in cols.iter_mut().zip(rhs.cols) {
            *col = Vec4 {
                x: self.get_row(0).dot(rhs_col),
                y: self.get_row(1).dot(rhs_col),
                z: self.get_row(2).dot(rhs_col),
                w: self.get_row(3).dot(rhs_col),
            };
        }
        Mat4 { cols }
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let p = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!(Mat4::IDENTITY.transform_point(p), p);
        assert_eq!(Mat4::IDENTITY.transform_vector(p), p);
    }

    #[test]
    fn test_translation_applies_to_points_not_vectors() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            m.transform_point(Vec3::ZERO),
            Vec3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_scale() {
        let m = Mat4::from_scale(Vec3::new(2.0, 3.0, -1.0));
        assert_eq!(
            m.transform_point(Vec3::ONE),
            Vec3::new(2.0, 3.0, -1.0)
        );
    }

    #[test]
    fn test_composition_order() {
        // M = T * S applies the scale first, then the translation.
        let m = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0))
            * Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(
            m.transform_point(Vec3::new(1.0, 1.0, 1.0)),
            Vec3::new(3.0, 2.0, 2.0)
        );
    }

    #[test]
    fn test_axis_angle_matches_vector_rotation() {
        let axis = Vec3::new(1.0, 2.0, -0.5);
        let m = Mat4::from_axis_angle_degrees(axis, 33.0);
        let v = Vec3::new(0.7, -1.1, 4.0);
        assert_abs_diff_eq!(
            m.transform_point(v),
            v.rotate_about(axis, 33.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_axis_angle_zero_axis_is_identity() {
        assert_eq!(
            Mat4::from_axis_angle_degrees(Vec3::ZERO, 90.0),
            Mat4::IDENTITY
        );
    }

    #[test]
    fn test_look_at_maps_eye_to_origin_and_look_to_minus_z() {
        let eye = Vec3::new(4.0, 2.0, -3.0);
        let look = Vec3::new(1.0, 0.5, 2.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        let v = Mat4::look_at(eye, look, up);

        assert_abs_diff_eq!(v.transform_point(eye), Vec3::ZERO, epsilon = 1e-9);
        assert_abs_diff_eq!(
            v.transform_vector((look - eye).normalize()),
            Vec3::new(0.0, 0.0, -1.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_perspective_divide_lands_in_ndc() {
        let p = Mat4::perspective(90.0, 1.0, 1.0, 10.0);

        // A point on the view axis between the clip planes.
        let mid = p.transform_point(Vec3::new(0.0, 0.0, -5.0));
        assert!(mid.z > -1.0 && mid.z < 1.0);
        assert_abs_diff_eq!(mid.x, 0.0, epsilon = 1e-12);

        // The near and far planes map to the NDC cube faces.
        let near = p.transform_point(Vec3::new(0.0, 0.0, -1.0));
        let far = p.transform_point(Vec3::new(0.0, 0.0, -10.0));
        assert_abs_diff_eq!(near.z, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_perspective_frustum_corner() {
        // fov_y = 90° at near = 1 puts the top clip boundary at y = 1.
        let p = Mat4::perspective(90.0, 1.0, 1.0, 10.0);
        let top = p.transform_point(Vec3::new(0.0, 1.0, -1.0));
        assert_abs_diff_eq!(top.y, 1.0, epsilon = 1e-9);
    }
}
