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

//! # Lumis Core
//!
//! Shared substrate of the Lumis software renderers: f64 vector/matrix/color
//! math, pixel buffer types, and cooperative cancellation. The rasterization
//! pipeline lives in `lumis-raster`, the ray tracer in `lumis-trace`; both
//! build exclusively on the types defined here.

#![warn(missing_docs)]

pub mod cancel;
pub mod image;
pub mod math;

pub use cancel::CancelToken;
pub use image::{PixelGrid, Rgb8};
pub use math::{degrees_to_radians, radians_to_degrees, LinearRgb, Mat4, Vec3, Vec4};
