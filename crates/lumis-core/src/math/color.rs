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

//! Defines the `LinearRgb` color type and associated operations.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// Represents a color as three linear-light `f64` channels.
///
/// Both renderers accumulate shading terms in this type and only quantize to
/// bytes at the very end of the pipeline. Channel values may exceed `[0, 1]`
/// during accumulation; [`LinearRgb::saturate`] clamps them back before
/// output.
#[derive(
    Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct LinearRgb {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl LinearRgb {
    /// Black (`[0, 0, 0]`).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White (`[1, 1, 1]`).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Red (`[1, 0, 0]`).
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green (`[0, 1, 0]`).
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue (`[0, 0, 1]`).
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Mid gray (`[0.5, 0.5, 0.5]`).
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5);

    /// Creates a new `LinearRgb` with explicit channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    pub fn saturate(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Quantizes this color to an 8-bit RGB triple as
    /// `round(255 * clamp(channel))`.
    #[inline]
    pub fn to_srgb8(&self) -> [u8; 3] {
        let c = self.saturate();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }

    /// Returns `true` when every channel is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

// --- Operator Overloads ---

impl Default for LinearRgb {
    /// Returns black, the neutral element of shading accumulation.
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl Add for LinearRgb {
    type Output = Self;
    /// Adds two colors channel-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for LinearRgb {
    /// Accumulates another color channel-wise.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for LinearRgb {
    type Output = Self;
    /// Scales every channel by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Mul<LinearRgb> for f64 {
    type Output = LinearRgb;
    /// Scales every channel by a scalar.
    #[inline]
    fn mul(self, rhs: LinearRgb) -> Self::Output {
        rhs * self
    }
}

impl Mul for LinearRgb {
    type Output = Self;
    /// Multiplies two colors channel-wise (modulation).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl AbsDiffEq for LinearRgb {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        super::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.r, &other.r, epsilon)
            && f64::abs_diff_eq(&self.g, &other.g, epsilon)
            && f64::abs_diff_eq(&self.b, &other.b, epsilon)
    }
}

// --- Tests ---
