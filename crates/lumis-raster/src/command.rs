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

//! The modeling command language consumed by the first pipeline stage.

use lumis_core::Vec3;
use serde::{Deserialize, Serialize};

/// One command of the modeling mini-language.
///
/// A scene description is a sequence of these commands; parsing them out of
/// a text document is a collaborator concern. Transform commands compose
/// onto the top of the transform stack in reading order (post-multiplied,
/// i.e. nested local frames in the OpenGL sense), `Push`/`Pop` manage the
/// stack, and `Triangle` emits geometry under the current transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ModelCommand {
    /// Translate the local frame by the given offsets.
    Translate(Vec3),
    /// Scale the local frame by the given per-axis factors.
    Scale(Vec3),
    /// Rotate the local frame about `axis` by `degrees`.
    Rotate {
        /// The rotation angle in degrees.
        degrees: f64,
        /// The rotation axis; it is normalized before use.
        axis: Vec3,
    },
    /// Duplicate the current top of the transform stack.
    Push,
    /// Discard the top of the transform stack. Popping the identity floor
    /// is a silent no-op.
    Pop,
    /// Emit a triangle whose vertices are given in the current local frame.
    Triangle([Vec3; 3]),
    /// Terminate the stream; any commands after it are ignored.
    End,
}
