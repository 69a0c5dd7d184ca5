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

//! Defines the error types of the rasterization pipeline.

use std::fmt;

/// An error surfaced by the rasterization pipeline.
///
/// All errors are fatal for the render in progress; the pipeline performs no
/// local recovery. Note that popping the transform stack down to its identity
/// floor is *not* an error — it is a silent no-op by contract.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// A viewport or projection configuration failed validation.
    InvalidConfig {
        /// What was wrong with the configuration.
        detail: String,
    },
    /// A transform produced non-finite coordinates (NaN or infinity).
    ///
    /// Detected at stage boundaries so that bad values never silently
    /// propagate into later stages.
    DegenerateTransform {
        /// The stage that detected the bad vertex.
        stage: &'static str,
        /// The index of the offending triangle in the stage's output order.
        triangle: usize,
    },
    /// The render was aborted through its cancellation token.
    Cancelled,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidConfig { detail } => {
                write!(f, "Invalid rasterizer configuration: {detail}")
            }
            RasterError::DegenerateTransform { stage, triangle } => {
                write!(
                    f,
                    "Non-finite coordinates in {stage} output at triangle {triangle}"
                )
            }
            RasterError::Cancelled => write!(f, "Rasterization cancelled"),
        }
    }
}

impl std::error::Error for RasterError {}

// --- Tests ---
