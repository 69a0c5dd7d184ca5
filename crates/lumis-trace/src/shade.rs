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

//! Phong shading with hard shadows and bounded mirror reflection.
//!
//! For each hit: an ambient base, then per-light Lambert diffuse and Phong
//! specular terms gated by shadow rays, then one recursive reflection
//! bounce while the recursion budget lasts. Shading degeneracies (a light
//! sitting on the surface, a zero-length normal) silently drop the affected
//! contribution; the ambient term always survives.

use lumis_core::{radians_to_degrees, LinearRgb, Vec3};

use crate::primitive::Primitive;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::EPSILON;

/// Per-render shading context.
///
/// The clip window test always measures along the *primary* camera ray
/// basis, even for reflection bounces; reflected hits outside the primary
/// `[z_near, z_far]` slab contribute nothing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShadeContext<'a> {
    pub scene: &'a Scene,
    /// Position of the primary camera.
    pub camera_position: Vec3,
    /// Unit look direction of the primary camera.
    pub camera_look: Vec3,
}

impl ShadeContext<'_> {
    /// Whether a point lies inside the primary camera's clip slab.
    pub fn is_visible(&self, point: Vec3) -> bool {
        let along_look = (point - self.camera_position).dot(self.camera_look);
        along_look >= self.scene.z_near && along_look <= self.scene.z_far
    }
}

/// Mirror of `incident` about the unit `normal`.
#[inline]
fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * (2.0 * incident.dot(normal))
}

/// Whether any primitive blocks the segment from the light to the point.
///
/// The shadow ray is cast *from the light*; the receiving surface itself
/// intersects it at the full light distance, which the epsilon margin
/// excludes.
fn in_shadow(scene: &Scene, point: Vec3, light_position: Vec3, light_distance: f64) -> bool {
    let shadow_ray = Ray::new(light_position, point - light_position);
    scene.primitives.iter().any(|primitive| {
        primitive
            .intersect(&shadow_ray)
            .is_some_and(|t| t > 0.0 && t + EPSILON < light_distance)
    })
}

/// Shades the hit of `ray` against primitive `index` at parameter `t`,
/// recursing into reflections while `level < scene.recursion_depth`.
pub(crate) fn shade(ctx: &ShadeContext<'_>, ray: &Ray, index: usize, t: f64, level: u32) -> LinearRgb {
    let primitive = &ctx.scene.primitives[index];
    let point = ray.at(t);
    let surface = primitive.surface_color_at(point);
    let coefficients = primitive.material.coefficients;

    let mut color = surface * coefficients.ambient;

    let normal = primitive.normal_at(point);
    if normal.length_squared() <= EPSILON {
        // Degenerate normal: nothing beyond the ambient base can be
        // evaluated for this hit.
        return color.saturate();
    }

    // Point lights.
    for light in &ctx.scene.point_lights {
        color += light_term(ctx, ray, point, normal, surface, primitive, light.position, light.color, None);
    }
    // Spotlights: same math, plus the cone cutoff.
    for light in &ctx.scene.spot_lights {
        color += light_term(
            ctx,
            ray,
            point,
            normal,
            surface,
            primitive,
            light.position,
            light.color,
            Some((light.direction, light.cutoff_degrees)),
        );
    }

    // Mirror reflection, one bounce per recursion level.
    if level < ctx.scene.recursion_depth {
        let direction = reflect(ray.direction, normal).normalize();
        // Offset past the surface so the bounce cannot re-hit its origin.
        let reflected = Ray::new(point + direction * EPSILON, direction);
        if let Some((hit_index, hit_t)) = ctx.scene.nearest_hit(&reflected) {
            if ctx.is_visible(reflected.at(hit_t)) {
                let bounced = shade(ctx, &reflected, hit_index, hit_t, level + 1);
                color += bounced * coefficients.reflection;
            }
        }
    }

    color.saturate()
}

/// One light's diffuse and specular contribution, or black when the light
/// is cut off, coincident with the surface, or shadowed.
#[allow(clippy::too_many_arguments)]
fn light_term(
    ctx: &ShadeContext<'_>,
    ray: &Ray,
    point: Vec3,
    normal: Vec3,
    surface: LinearRgb,
    primitive: &Primitive,
    light_position: Vec3,
    light_color: LinearRgb,
    cone: Option<(Vec3, f64)>,
) -> LinearRgb {
    let to_point = point - light_position;
    let distance = to_point.length();
    if distance < EPSILON {
        return LinearRgb::BLACK;
    }
    let incident = to_point.normalize();

    if let Some((axis, cutoff_degrees)) = cone {
        let angle = radians_to_degrees(incident.dot(axis).clamp(-1.0, 1.0).acos());
        if angle.abs() > cutoff_degrees {
            return LinearRgb::BLACK;
        }
    }

    if in_shadow(ctx.scene, point, light_position, distance) {
        return LinearRgb::BLACK;
    }

    let coefficients = primitive.material.coefficients;
    let lambert = (-incident.dot(normal)).max(0.0);
    let reflected_light = reflect(incident, normal);
    let phong_base = (-reflected_light.dot(ray.direction)).max(0.0);
    let phong = phong_base.powi(primitive.material.shininess);

    light_color * surface * (coefficients.diffuse * lambert + coefficients.specular * phong)
}

// --- Tests ---
