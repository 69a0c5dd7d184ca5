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

//! The transform stack driven by the modeling command stream.

use lumis_core::Mat4;

/// A stack of composed model transforms with an identity floor.
///
/// Invariant: the stack is never empty. `pop` on a stack holding only the
/// identity floor is a silent no-op rather than an error, preserving the
/// behavior of scene files that over-pop.
#[derive(Debug, Clone)]
pub struct TransformStack {
    matrices: Vec<Mat4>,
}

impl TransformStack {
    /// Creates a stack containing only the identity matrix.
    pub fn new() -> Self {
        Self {
            matrices: vec![Mat4::IDENTITY],
        }
    }

    /// Duplicates the current top of the stack.
    pub fn push(&mut self) {
        self.matrices.push(self.top());
    }

    /// Removes the top of the stack, unless that would empty it.
    pub fn pop(&mut self) {
        if self.matrices.len() > 1 {
            self.matrices.pop();
        }
    }

    /// The current composed transform.
    #[inline]
    pub fn top(&self) -> Mat4 {
        // The constructor and `pop` guarantee at least one entry.
        self.matrices.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Replaces the top with `top * local`, composing a new local transform
    /// in reading order.
    pub fn apply(&mut self, local: Mat4) {
        if let Some(top) = self.matrices.last_mut() {
            *top = *top * local;
        }
    }

    /// The number of matrices currently on the stack (always at least 1).
    #[inline]
    pub fn depth(&self) -> usize {
        self.matrices.len()
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use lumis_core::Vec3;

    #[test]
    fn test_starts_with_identity() {
        let stack = TransformStack::new();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_push_duplicates_top() {
        let mut stack = TransformStack::new();
        stack.apply(Mat4::from_translation(Vec3::X));
        stack.push();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), Mat4::from_translation(Vec3::X));
    }

    #[test]
    fn test_pop_restores_previous_transform() {
        let mut stack = TransformStack::new();
        stack.push();
        stack.apply(Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0)));
        stack.pop();
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_pop_underflow_is_silent_noop() {
        let mut stack = TransformStack::new();
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Mat4::IDENTITY);
    }

    #[test]
    fn test_apply_composes_in_reading_order() {
        let mut stack = TransformStack::new();
        stack.apply(Mat4::from_translation(Vec3::X));
        stack.apply(Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0)));
        // translate, then scale in the translated frame: (1,0,0) -> (3,0,0)
        assert_eq!(
            stack.top().transform_point(Vec3::X),
            Vec3::new(3.0, 0.0, 0.0)
        );
    }
}
