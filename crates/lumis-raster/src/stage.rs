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

//! The three transform stages of the rasterization pipeline.
//!
//! Stage 1 interprets the modeling command stream over a transform stack and
//! emits world-space triangles; stage 2 applies the camera's view matrix;
//! stage 3 applies the perspective projection with its homogeneous divide.
//! Each stage validates that every coordinate it emits is finite, so NaNs
//! introduced by pathological user transforms are caught at the stage
//! boundary instead of corrupting the z-buffer later on.

use log::debug;
use lumis_core::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::command::ModelCommand;
use crate::error::RasterError;
use crate::stack::TransformStack;

/// A triangle flowing between pipeline stages.
///
/// Color is not part of stage data; the z-buffer stage assigns flat colors
/// from its deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// The three vertices, in emission order.
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[inline]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    fn transformed(&self, m: &Mat4) -> Self {
        Self {
            vertices: self.vertices.map(|v| m.transform_point(v)),
        }
    }

    fn is_finite(&self) -> bool {
        self.vertices.iter().all(Vec3::is_finite)
    }
}

/// Camera description for the viewing stage: eye position, look target, and
/// up hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// The camera position in world space.
    pub eye: Vec3,
    /// The point the camera looks at.
    pub look: Vec3,
    /// The approximate up direction; it need not be orthogonal to the view
    /// direction but must not be collinear with it.
    pub up: Vec3,
}

impl ViewConfig {
    /// Builds the view matrix `V = R * T` for this camera.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.look, self.up)
    }
}

/// Projection description for the third stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    /// Viewport width divided by height.
    pub aspect: f64,
    /// Distance to the near clip plane.
    pub z_near: f64,
    /// Distance to the far clip plane.
    pub z_far: f64,
}

impl ProjectionConfig {
    /// Checks the constraints a usable projection must satisfy.
    pub fn validate(&self) -> Result<(), RasterError> {
        if self.z_near <= 0.0 {
            return Err(RasterError::InvalidConfig {
                detail: format!("z_near must be positive, got {}", self.z_near),
            });
        }
        if self.z_near >= self.z_far {
            return Err(RasterError::InvalidConfig {
                detail: format!(
                    "z_near ({}) must be less than z_far ({})",
                    self.z_near, self.z_far
                ),
            });
        }
        if self.fov_y_degrees.abs() >= 180.0 {
            return Err(RasterError::InvalidConfig {
                detail: format!("|fov_y| must be below 180 degrees, got {}", self.fov_y_degrees),
            });
        }
        if self.aspect <= 0.0 {
            return Err(RasterError::InvalidConfig {
                detail: format!("aspect ratio must be positive, got {}", self.aspect),
            });
        }
        Ok(())
    }

    /// Builds the perspective projection matrix for this configuration.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y_degrees, self.aspect, self.z_near, self.z_far)
    }
}

fn check_finite(stage: &'static str, triangles: &[Triangle]) -> Result<(), RasterError> {
    for (index, tri) in triangles.iter().enumerate() {
        if !tri.is_finite() {
            return Err(RasterError::DegenerateTransform {
                stage,
                triangle: index,
            });
        }
    }
    Ok(())
}

/// Stage 1: interprets the modeling command stream and emits world-space
/// triangles.
///
/// Each `Triangle` command is transformed by the current top of the stack
/// (`M * v` with vertices as column vectors). Transform commands post-multiply
/// onto the top, so they compose as nested local frames in reading order.
/// The stream ends at the first [`ModelCommand::End`], or when the commands
/// run out.
pub fn model(commands: &[ModelCommand]) -> Result<Vec<Triangle>, RasterError> {
    let mut stack = TransformStack::new();
    let mut triangles = Vec::new();

    for command in commands {
        match *command {
            ModelCommand::Translate(t) => stack.apply(Mat4::from_translation(t)),
            ModelCommand::Scale(s) => stack.apply(Mat4::from_scale(s)),
            ModelCommand::Rotate { degrees, axis } => {
                stack.apply(Mat4::from_axis_angle_degrees(axis, degrees))
            }
            ModelCommand::Push => stack.push(),
            ModelCommand::Pop => stack.pop(),
            ModelCommand::Triangle(vertices) => {
                let top = stack.top();
                triangles.push(Triangle {
                    vertices: vertices.map(|v| top.transform_point(v)),
                });
            }
            ModelCommand::End => break,
        }
    }

    debug!(
        "modeling stage emitted {} triangles (stack depth {})",
        triangles.len(),
        stack.depth()
    );
    check_finite("modeling", &triangles)?;
    Ok(triangles)
}

/// Stage 2: transforms world-space triangles into camera space.
pub fn view(config: &ViewConfig, triangles: &[Triangle]) -> Result<Vec<Triangle>, RasterError> {
    let matrix = config.view_matrix();
    let out: Vec<Triangle> = triangles.iter().map(|t| t.transformed(&matrix)).collect();
    debug!("viewing stage transformed {} triangles", out.len());
    check_finite("viewing", &out)?;
    Ok(out)
}

/// Stage 3: applies the perspective projection, dividing each vertex by its
/// homogeneous `w`. Points inside the view frustum land in the `[-1, 1]`
/// NDC cube.
pub fn project(
    config: &ProjectionConfig,
    triangles: &[Triangle],
) -> Result<Vec<Triangle>, RasterError> {
    config.validate()?;
    let matrix = config.projection_matrix();
    let out: Vec<Triangle> = triangles.iter().map(|t| t.transformed(&matrix)).collect();
    debug!("projection stage transformed {} triangles", out.len());
    check_finite("projection", &out)?;
    Ok(out)
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_triangle() -> [Vec3; 3] {
        [Vec3::ZERO, Vec3::X, Vec3::Y]
    }

    #[test]
    fn test_model_identity_round_trip() {
        let commands = [ModelCommand::Triangle(unit_triangle()), ModelCommand::End];
        let out = model(&commands).unwrap();
        assert_eq!(out.len(), 1);
        for (vertex, expected) in out[0].vertices.iter().zip(unit_triangle()) {
            assert_abs_diff_eq!(*vertex, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_model_nested_push_pop_offsets() {
        // push; translate; push; translate; tri; pop; tri; pop; tri; end
        // emits triangles at x-offsets 2, 1, 0.
        let commands = [
            ModelCommand::Push,
            ModelCommand::Translate(Vec3::X),
            ModelCommand::Push,
            ModelCommand::Translate(Vec3::X),
            ModelCommand::Triangle(unit_triangle()),
            ModelCommand::Pop,
            ModelCommand::Triangle(unit_triangle()),
            ModelCommand::Pop,
            ModelCommand::Triangle(unit_triangle()),
            ModelCommand::End,
        ];
        let out = model(&commands).unwrap();
        assert_eq!(out.len(), 3);
        assert_abs_diff_eq!(out[0].vertices[0], Vec3::new(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(out[1].vertices[0], Vec3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(out[2].vertices[0], Vec3::ZERO);
    }

    #[test]
    fn test_model_ignores_commands_after_end() {
        let commands = [
            ModelCommand::Triangle(unit_triangle()),
            ModelCommand::End,
            ModelCommand::Triangle(unit_triangle()),
        ];
        assert_eq!(model(&commands).unwrap().len(), 1);
    }

    #[test]
    fn test_model_rotate_composes_with_rodrigues() {
        let commands = [
            ModelCommand::Rotate {
                degrees: 90.0,
                axis: Vec3::Z,
            },
            ModelCommand::Triangle(unit_triangle()),
        ];
        let out = model(&commands).unwrap();
        assert_abs_diff_eq!(out[0].vertices[1], Vec3::Y, epsilon = 1e-12);
    }

    #[test]
    fn test_model_detects_non_finite_output() {
        let commands = [
            ModelCommand::Scale(Vec3::new(f64::INFINITY, 1.0, 1.0)),
            ModelCommand::Triangle(unit_triangle()),
        ];
        // Scaling 0 by infinity produces NaN in the first vertex.
        let err = model(&commands).unwrap_err();
        assert!(matches!(
            err,
            RasterError::DegenerateTransform {
                stage: "modeling",
                ..
            }
        ));
    }

    #[test]
    fn test_view_centers_eye() {
        let config = ViewConfig {
            eye: Vec3::new(0.0, 0.0, 5.0),
            look: Vec3::ZERO,
            up: Vec3::Y,
        };
        let tris = [Triangle::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::X,
            Vec3::Y,
        )];
        let out = view(&config, &tris).unwrap();
        // The eye itself maps to the origin of camera space.
        assert_abs_diff_eq!(out[0].vertices[0], Vec3::ZERO, epsilon = 1e-9);
    }

    #[test]
    fn test_project_validates_config() {
        let bad = ProjectionConfig {
            fov_y_degrees: 60.0,
            aspect: 1.0,
            z_near: 5.0,
            z_far: 1.0,
        };
        assert!(matches!(
            project(&bad, &[]),
            Err(RasterError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_project_divides_out_w() {
        let config = ProjectionConfig {
            fov_y_degrees: 90.0,
            aspect: 1.0,
            z_near: 1.0,
            z_far: 10.0,
        };
        let tris = [Triangle::new(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(0.5, 0.5, -5.0),
            Vec3::new(-0.5, 0.25, -2.0),
        )];
        let out = project(&config, &tris).unwrap();
        for vertex in out[0].vertices {
            assert!(vertex.x.abs() <= 1.0);
            assert!(vertex.y.abs() <= 1.0);
            assert!(vertex.z.abs() <= 1.0);
        }
    }
}
