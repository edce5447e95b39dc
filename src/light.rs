//! Single-light Blinn-Phong shading.

use crate::color::Color;
use crate::math::vector::Vector;

const SPECULAR_EXP: f32 = 2.0;
const GLOSS: f32 = 1.0;

/// A single combined ambient+directional point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Vector,
    /// Channels in `0..255`, used as a float multiplier in shading.
    pub color: Color,
}

impl Light {
    pub fn new(position: Vector, color: Color) -> Self {
        Self { position, color }
    }

    /// Evaluates Blinn-Phong at a world-space surface point.
    ///
    /// `albedo` is the surface base color (vertex-interpolated or texture
    /// sampled, already in `[0, 1]`). Returns the final shaded color,
    /// clamped to `[0, 1]` per channel.
    pub fn shade(&self, world_pos: Vector, normal: Vector, camera_pos: Vector, albedo: Color) -> Color {
        let to_light = self.position.sub(world_pos);
        let dist = to_light.length();
        let l = to_light.normalize();
        let v = camera_pos.sub(world_pos).normalize();
        let h = (l + v).normalize();
        let n = normal.normalize();

        let diff = l.dot(n).max(0.0);
        let spec = h.dot(n).max(0.0).powf(SPECULAR_EXP) * GLOSS;

        // `color` is stored per the 0..255 convention; shading arithmetic runs
        // in normalized [0, 1] space (re-quantized to 0..255 at `to_argb`).
        let atten = 2.0 / (dist * dist);
        let atten_color = self.color.scale(1.0 / 255.0).scale(atten);

        let diffuse = albedo.modulate(atten_color).scale(diff);
        let specular = atten_color.scale(spec);

        (diffuse + specular).clamp01()
    }
}
