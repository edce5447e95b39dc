//! Per-vertex attributes and the scanline interpolation arithmetic over them.

use crate::color::Color;
use crate::math::vector::Vector;
use crate::texcoord::TexCoord;

/// A vertex carried through clip space, screen space, and the scanline
/// interpolators.
///
/// `rhw` (reciprocal homogeneous w) is undefined until [`Vertex::init_rhw`]
/// runs during triangle setup.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vertex {
    pub pos: Vector,
    pub tc: TexCoord,
    pub color: Color,
    pub normal: Vector,
    pub rhw: f32,
}

impl Vertex {
    pub fn new(pos: Vector, tc: TexCoord, color: Color, normal: Vector) -> Self {
        Self {
            pos,
            tc,
            color,
            normal,
            rhw: 0.0,
        }
    }

    /// Prepares a screen-space vertex for perspective-correct interpolation.
    ///
    /// Sets `rhw = 1/pos.w`, then pre-multiplies `tc` and `color` by `rhw`.
    /// `normal` is deliberately left untouched — it is interpolated linearly
    /// in screen space, an accepted approximation (see the normal-swim note
    /// in the design notes). `pos` keeps its screen coordinates; `pos.w`
    /// retains the original clip-space w for later recovery.
    pub fn init_rhw(&mut self) {
        let rhw = 1.0 / self.pos.w;
        self.rhw = rhw;
        self.tc = self.tc.scale(rhw);
        self.color = self.color.scale(rhw);
    }

    /// Linear interpolation of every field (including `rhw`) at `y`'s
    /// position between `a` and `b`, parameter `t`.
    pub fn interp(a: &Vertex, b: &Vertex, t: f32) -> Vertex {
        Vertex {
            pos: a.pos.lerp(b.pos, t),
            tc: a.tc.lerp(b.tc, t),
            color: a.color.lerp(b.color, t),
            normal: a.normal.lerp(b.normal, t),
            rhw: a.rhw + (b.rhw - a.rhw) * t,
        }
    }

    /// The per-pixel step `(b - a) / width` used to advance a scanline.
    pub fn division(a: &Vertex, b: &Vertex, width: f32) -> Vertex {
        Vertex {
            pos: b.pos.sub(a.pos) / width,
            tc: (b.tc - a.tc) * (1.0 / width),
            color: (b.color - a.color) * (1.0 / width),
            normal: b.normal.sub(a.normal) / width,
            rhw: (b.rhw - a.rhw) / width,
        }
    }

    /// Advances `self` by one step: `self += step`.
    pub fn add_step(&mut self, step: &Vertex) {
        self.pos = self.pos.add(step.pos);
        self.tc = self.tc + step.tc;
        self.color = self.color + step.color;
        self.normal = self.normal.add(step.normal);
        self.rhw += step.rhw;
    }

    /// Recovers perspective-correct `tc`/`color` from their rhw-premultiplied
    /// form by multiplying by `w = 1 / rhw`.
    pub fn recover(&self) -> (TexCoord, Color) {
        let w = 1.0 / self.rhw;
        (self.tc.scale(w), self.color.scale(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex_at(w: f32, tc: TexCoord, color: Color) -> Vertex {
        Vertex::new(Vector::new(0.0, 0.0, 0.0, w), tc, color, Vector::ZERO)
    }

    #[test]
    fn rhw_recovery_restores_original_attributes_within_tolerance() {
        let tc = TexCoord::new(0.4, 0.8);
        let color = Color::new(0.2, 0.5, 0.9);
        let mut v = vertex_at(2.5, tc, color);
        v.init_rhw();
        assert!((v.rhw - 1.0 / 2.5).abs() < 1e-6);

        let (recovered_tc, recovered_color) = v.recover();
        assert!((recovered_tc.u - tc.u).abs() < 1e-5);
        assert!((recovered_tc.v - tc.v).abs() < 1e-5);
        assert!((recovered_color.r - color.r).abs() < 1e-5);
        assert!((recovered_color.g - color.g).abs() < 1e-5);
        assert!((recovered_color.b - color.b).abs() < 1e-5);
    }

    #[test]
    fn add_step_matches_manual_division_accumulation() {
        let a = vertex_at(1.0, TexCoord::new(0.0, 0.0), Color::BLACK);
        let b = vertex_at(1.0, TexCoord::new(10.0, 20.0), Color::WHITE);
        let step = Vertex::division(&a, &b, 10.0);

        let mut cur = a;
        for _ in 0..10 {
            cur.add_step(&step);
        }
        assert!((cur.tc.u - b.tc.u).abs() < 1e-4);
        assert!((cur.tc.v - b.tc.v).abs() < 1e-4);
    }
}
