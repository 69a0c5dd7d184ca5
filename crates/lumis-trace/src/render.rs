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

//! Image formation: one primary ray through each pixel center.

use log::debug;
use lumis_core::{degrees_to_radians, CancelToken, LinearRgb, PixelGrid};

use crate::camera::Camera;
use crate::error::TraceError;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shade::{shade, ShadeContext};

/// Renders the scene from the camera into an `N x N` pixel grid.
///
/// The image plane is placed at the focal distance derived from the
/// vertical field of view, shifted by half a pixel so rays sample pixel
/// centers. Each pixel is shaded independently; a miss, or a nearest hit
/// outside the `[z_near, z_far]` window measured along the camera's look
/// direction, leaves the pixel black.
///
/// The cancel token is polled once per pixel column; a cancelled render
/// returns [`TraceError::Cancelled`] instead of a partial image.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    cancel: &CancelToken,
) -> Result<PixelGrid, TraceError> {
    scene.validate()?;

    let window = scene.image_dim as f64;
    let pixel_count = scene.image_dim;
    debug!(
        "tracing {pixel_count}x{pixel_count} image, {} primitives, recursion depth {}",
        scene.primitives.len(),
        scene.recursion_depth
    );

    let plane_distance = (window / 2.0) / degrees_to_radians(scene.fov_y_degrees / 2.0).tan();
    let position = camera.position();
    let (look, up, right) = (camera.look(), camera.up(), camera.right());

    let du = window / pixel_count as f64;
    let dv = window / pixel_count as f64;

    // Top-left corner of the image plane, then half a pixel inward so every
    // ray passes through a pixel center.
    let top_left = position + look * plane_distance + up * (window / 2.0) - right * (window / 2.0)
        + right * (du / 2.0)
        - up * (dv / 2.0);

    let ctx = ShadeContext {
        scene,
        camera_position: position,
        camera_look: look,
    };

    let mut image = PixelGrid::new(pixel_count, pixel_count);
    for i in 0..pixel_count {
        if cancel.is_cancelled() {
            return Err(TraceError::Cancelled);
        }
        for j in 0..pixel_count {
            let pixel_world = top_left + right * (i as f64 * du) - up * (j as f64 * dv);
            let ray = Ray::new(position, pixel_world - position);

            let color = trace_primary(&ctx, &ray);
            image.set(i, j, color.into());
        }
    }

    debug!("trace finished");
    Ok(image)
}

/// Traces one primary ray: nearest hit, clip window test, then shading at
/// recursion level 0. Misses stay black.
fn trace_primary(ctx: &ShadeContext<'_>, ray: &Ray) -> LinearRgb {
    let Some((index, t)) = ctx.scene.nearest_hit(ray) else {
        return LinearRgb::BLACK;
    };

    let along_look = (ray.at(t) - ctx.camera_position).dot(ctx.camera_look);
    if along_look < ctx.scene.z_near || along_look > ctx.scene.z_far {
        return LinearRgb::BLACK;
    }

    shade(ctx, ray, index, t, 0)
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Coefficients, Material};
    use crate::primitive::{Primitive, Shape, Sphere};
    use lumis_core::{Rgb8, Vec3};

    fn forward_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
    }

    /// Spec scenario: unit sphere at the origin, one white light, pure
    /// diffuse material. The center pixel sees lambert shading, the corner
    /// pixels miss entirely.
    #[test]
    fn test_single_lit_sphere() {
        let mut scene = Scene::new(0, 9);
        scene.primitives.push(Primitive::new(
            Shape::Sphere(Sphere::new(Vec3::ZERO, 1.0)),
            Material::new(LinearRgb::WHITE, Coefficients::new(0.0, 1.0, 0.0, 0.0), 1),
        ));
        scene.point_lights.push(crate::light::PointLight::new(
            Vec3::new(10.0, 10.0, 10.0),
            LinearRgb::WHITE,
        ));

        let image = render(&scene, &forward_camera(), &CancelToken::new()).unwrap();

        // Center ray hits (0, 0, 1); lambert = 9 / sqrt(281).
        let expected = (255.0 * 9.0 / 281f64.sqrt()).round() as u8;
        assert_eq!(image.get(4, 4), Rgb8::new(expected, expected, expected));

        // Corner rays miss the sphere.
        assert_eq!(image.get(0, 0), Rgb8::BLACK);
        assert_eq!(image.get(8, 8), Rgb8::BLACK);
    }

    /// Spec scenario: a floor-only scene with no lights renders pure
    /// ambient-scaled tile colors.
    #[test]
    fn test_floor_only_ambient_render() {
        let mut scene = Scene::new(1, 3);
        scene.primitives.push(Primitive::checkered_floor(None));

        let camera = Camera::default();
        let image = render(&scene, &camera, &CancelToken::new()).unwrap();

        // Floor ambient is 0.4: white tiles show 102, black tiles 0.
        let lit = Rgb8::new(102, 102, 102);
        for i in 0..3 {
            for j in 0..3 {
                let pixel = image.get(i, j);
                assert!(
                    pixel == lit || pixel == Rgb8::BLACK,
                    "pixel ({i},{j}) = {pixel:?} is not an ambient tile shade"
                );
            }
        }
    }

    /// Hits beyond the far clip distance are discarded.
    #[test]
    fn test_far_clip_rejects_hit() {
        let mut scene = Scene::new(0, 3);
        scene.z_far = 50.0;
        scene.primitives.push(Primitive::new(
            Shape::Sphere(Sphere::new(Vec3::new(0.0, 0.0, -100.0), 1.0)),
            Material::new(LinearRgb::WHITE, Coefficients::new(1.0, 0.0, 0.0, 0.0), 1),
        ));
        let image = render(&scene, &forward_camera(), &CancelToken::new()).unwrap();
        assert!(image.pixels().iter().all(|p| *p == Rgb8::BLACK));
    }

    /// Each recursion level adds a distinguishable reflection generation
    /// inside a corridor of two facing mirror walls; level zero is direct
    /// light only.
    #[test]
    fn test_reflection_generations_accumulate() {
        fn mirror_corridor(recursion_depth: u32) -> Scene {
            let mut scene = Scene::new(recursion_depth, 15);
            let mirror = Material::new(
                LinearRgb::new(0.4, 0.1, 0.1),
                Coefficients::new(0.1, 0.0, 0.0, 1.0),
                1,
            );
            // Two huge facing wall triangles at x = -2 and x = +2; slightly
            // angled primary rays ping-pong between them, walking deeper
            // into the scene with every bounce.
            scene.primitives.push(Primitive::new(
                Shape::Triangle(crate::primitive::Triangle::new(
                    Vec3::new(-2.0, -100.0, 0.0),
                    Vec3::new(-2.0, 100.0, 0.0),
                    Vec3::new(-2.0, 0.0, -200.0),
                )),
                mirror,
            ));
            scene.primitives.push(Primitive::new(
                Shape::Triangle(crate::primitive::Triangle::new(
                    Vec3::new(2.0, -100.0, 0.0),
                    Vec3::new(2.0, 100.0, 0.0),
                    Vec3::new(2.0, 0.0, -200.0),
                )),
                mirror,
            ));
            scene
        }

        let camera = forward_camera();
        let frames: Vec<_> = (0..4)
            .map(|depth| render(&mirror_corridor(depth), &camera, &CancelToken::new()).unwrap())
            .collect();

        // With reflection = 1 and ambient > 0, every extra generation
        // brightens some inter-reflected pixel.
        assert_ne!(frames[0], frames[1]);
        assert_ne!(frames[1], frames[2]);
        assert_ne!(frames[2], frames[3]);
    }

    #[test]
    fn test_cancelled_render_aborts() {
        let token = CancelToken::new();
        token.cancel();
        let scene = Scene::new(0, 4);
        assert!(matches!(
            render(&scene, &forward_camera(), &token),
            Err(TraceError::Cancelled)
        ));
    }

    #[test]
    fn test_invalid_scene_is_rejected_up_front() {
        let mut scene = Scene::new(0, 0);
        scene.image_dim = 0;
        assert!(matches!(
            render(&scene, &forward_camera(), &CancelToken::new()),
            Err(TraceError::InvalidConfig { .. })
        ));
    }
}
