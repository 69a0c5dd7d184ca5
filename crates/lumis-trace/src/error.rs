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

//! Defines the error types of the ray tracer.

use std::fmt;

/// An error surfaced by the ray tracer.
///
/// Per-pixel shading degeneracies (zero-length normals, lights sitting on
/// the surface) are *not* errors: those pixels simply lose the affected
/// contribution and keep their ambient term.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceError {
    /// The scene description is structurally unusable.
    MalformedScene {
        /// What was wrong with the scene.
        detail: String,
    },
    /// The render configuration (image size, clip range, field of view)
    /// failed validation.
    InvalidConfig {
        /// What was wrong with the configuration.
        detail: String,
    },
    /// The render was aborted through its cancellation token.
    Cancelled,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::MalformedScene { detail } => write!(f, "Malformed scene: {detail}"),
            TraceError::InvalidConfig { detail } => {
                write!(f, "Invalid render configuration: {detail}")
            }
            TraceError::Cancelled => write!(f, "Render cancelled"),
        }
    }
}

impl std::error::Error for TraceError {}
