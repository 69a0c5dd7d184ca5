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

//! The free-flying camera that shoots primary rays.

use lumis_core::Vec3;
use serde::{Deserialize, Serialize};

/// A camera described by its position and an orthonormal basis
/// `(look, up, right)`.
///
/// Every mutation re-orthonormalizes the basis: `right = look × up`, then
/// `up = right × look`, all normalized. The clip test of the tracer measures
/// hit distances along this camera's look direction, so the basis must stay
/// consistent at all times; that is why the fields are private.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    position: Vec3,
    look: Vec3,
    up: Vec3,
    right: Vec3,
    home: (Vec3, Vec3, Vec3),
}

impl Camera {
    /// Creates a camera at `position` looking along `look` with up hint `up`.
    pub fn new(position: Vec3, look: Vec3, up: Vec3) -> Self {
        let mut camera = Self {
            position,
            look,
            up,
            right: Vec3::X,
            home: (position, look, up),
        };
        camera.update_basis();
        camera
    }

    fn update_basis(&mut self) {
        self.look = self.look.normalize();
        self.right = self.look.cross(self.up).normalize();
        self.up = self.right.cross(self.look).normalize();
    }

    /// The camera position in world space.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The unit view direction.
    #[inline]
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// The unit up direction.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The unit right direction.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    // --- Movement ---

    /// Moves along the view direction.
    pub fn move_forward(&mut self, distance: f64) {
        self.position += self.look * distance;
    }

    /// Moves against the view direction.
    pub fn move_backward(&mut self, distance: f64) {
        self.position -= self.look * distance;
    }

    /// Strafes to the left.
    pub fn move_left(&mut self, distance: f64) {
        self.position -= self.right * distance;
    }

    /// Strafes to the right.
    pub fn move_right(&mut self, distance: f64) {
        self.position += self.right * distance;
    }

    /// Moves along the up direction.
    pub fn move_up(&mut self, distance: f64) {
        self.position += self.up * distance;
    }

    /// Moves against the up direction.
    pub fn move_down(&mut self, distance: f64) {
        self.position -= self.up * distance;
    }

    // --- Rotation ---

    fn rotate_about(&mut self, axis: Vec3, degrees: f64) {
        self.look = self.look.rotate_about(axis, degrees);
        self.up = self.up.rotate_about(axis, degrees);
        self.update_basis();
    }

    /// Yaws the view to the left.
    pub fn look_left(&mut self, degrees: f64) {
        self.rotate_about(self.up, degrees);
    }

    /// Yaws the view to the right.
    pub fn look_right(&mut self, degrees: f64) {
        self.rotate_about(self.up, -degrees);
    }

    /// Pitches the view upward.
    pub fn look_up(&mut self, degrees: f64) {
        self.rotate_about(self.right, degrees);
    }

    /// Pitches the view downward.
    pub fn look_down(&mut self, degrees: f64) {
        self.rotate_about(self.right, -degrees);
    }

    /// Rolls counter-clockwise about the view direction.
    pub fn tilt_counterclockwise(&mut self, degrees: f64) {
        self.rotate_about(self.look, degrees);
    }

    /// Rolls clockwise about the view direction.
    pub fn tilt_clockwise(&mut self, degrees: f64) {
        self.rotate_about(self.look, -degrees);
    }

    /// Returns the camera to its construction pose.
    pub fn reset(&mut self) {
        let (position, look, up) = self.home;
        self.position = position;
        self.look = look;
        self.up = up;
        self.update_basis();
    }
}

impl Default for Camera {
    /// The classic scene pose: perched above and behind the floor, looking
    /// down toward the origin.
    fn default() -> Self {
        Self::new(
            Vec3::new(0.0, 300.0, 300.0),
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(0.0, -1.0, 1.0),
        )
    }
}

// --- Tests ---
