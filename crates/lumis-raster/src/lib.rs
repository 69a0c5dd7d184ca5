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

//! # Lumis Raster
//!
//! A classical four-stage software rasterizer. A scene is described as a
//! stream of modeling commands ([`ModelCommand`]); the pipeline runs
//!
//! 1. [`stage::model`] — transform stack interpretation, world space out,
//! 2. [`stage::view`] — look-at camera transform,
//! 3. [`stage::project`] — perspective projection with homogeneous divide,
//! 4. [`zbuffer::rasterize`] — scanline conversion with a per-pixel depth
//!    test and deterministic flat triangle colors.
//!
//! Stage outputs and the final depth grid can be serialized with the
//! [`dump`] writers; image encoding is left to collaborators.
//!
//! The whole pipeline is synchronous pure computation. Reruns over the same
//! input produce byte-identical output.

#![warn(missing_docs)]

pub mod command;
pub mod dump;
pub mod error;
pub mod stack;
pub mod stage;
pub mod zbuffer;

pub use command::ModelCommand;
pub use error::RasterError;
pub use stack::TransformStack;
pub use stage::{model, project, view, ProjectionConfig, Triangle, ViewConfig};
pub use zbuffer::{rasterize, Framebuffer, TriangleColors, Viewport};
