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

//! # Lumis Trace
//!
//! A recursive Whitted-style ray tracer. A [`Scene`] owns primitives
//! (spheres, triangles, bounded general quadrics, and a checkered floor),
//! point lights, and spotlights; [`render`] shoots one ray per pixel center
//! from a free-flying [`Camera`] and shades hits with Phong lighting, hard
//! shadows, and mirror reflections bounded by the scene's recursion depth.
//!
//! Everything is synchronous pure computation over `f64`; scene parsing and
//! image encoding live with collaborators.

#![warn(missing_docs)]

/// Geometric tolerance used throughout the tracer: shadow-ray distance
/// margins, reflection origin offsets, and near-zero denominators.
pub const EPSILON: f64 = 1e-6;

pub mod camera;
pub mod error;
pub mod light;
pub mod material;
pub mod primitive;
pub mod ray;
pub mod render;
pub mod scene;
mod shade;
pub mod texture;

pub use camera::Camera;
pub use error::TraceError;
pub use light::{PointLight, SpotLight};
pub use material::{Coefficients, Material};
pub use primitive::{BoundsBox, Floor, Primitive, Quadric, Shape, Sphere, Triangle};
pub use ray::Ray;
pub use render::render;
pub use scene::Scene;
pub use texture::Texture;
