//! Demo scene: the hard-coded cube mesh used by the demo binary.
//!
//! A fixed 8-vertex, 12-triangle cube with per-vertex UV and color, built
//! in code rather than loaded from a file.

use crate::color::Color;
use crate::math::vector::Vector;
use crate::texcoord::TexCoord;
use crate::vertex::Vertex;

pub(crate) const N_CUBE_VERTICES: usize = 8;
pub(crate) const N_CUBE_FACES: usize = 12;

/// A triangle face, indexing into [`cube_vertices`] (0-based).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }
}

/// The cube's 8 corners, with a vertex color derived from octant position
/// so Gouraud-style per-vertex color interpolation is visible, and UVs that
/// wrap one full checker tile per face.
pub fn cube_vertices() -> [Vertex; N_CUBE_VERTICES] {
    let coords: [(f32, f32, f32); N_CUBE_VERTICES] = [
        (-1.0, -1.0, -1.0),
        (1.0, -1.0, -1.0),
        (1.0, 1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
    ];

    let mut out = [Vertex::default(); N_CUBE_VERTICES];
    for (i, (x, y, z)) in coords.iter().enumerate() {
        let color = Color::new(
            if *x > 0.0 { 1.0 } else { 0.3 },
            if *y > 0.0 { 1.0 } else { 0.3 },
            if *z > 0.0 { 1.0 } else { 0.3 },
        );
        let tc = TexCoord::new(if *x > 0.0 { 1.0 } else { 0.0 }, if *y > 0.0 { 1.0 } else { 0.0 });
        out[i] = Vertex::new(Vector::point(*x, *y, *z), tc, color, Vector::ZERO);
    }
    out
}

/// The cube's 12 triangular faces (two per cube side), wound
/// counter-clockwise when viewed from outside.
pub fn cube_faces() -> [Face; N_CUBE_FACES] {
    [
        // back (-z)
        Face::new(0, 2, 1),
        Face::new(0, 3, 2),
        // front (+z)
        Face::new(4, 5, 6),
        Face::new(4, 6, 7),
        // left (-x)
        Face::new(0, 7, 3),
        Face::new(0, 4, 7),
        // right (+x)
        Face::new(1, 2, 6),
        Face::new(1, 6, 5),
        // bottom (-y)
        Face::new(0, 1, 5),
        Face::new(0, 5, 4),
        // top (+y)
        Face::new(3, 6, 2),
        Face::new(3, 7, 6),
    ]
}

/// Flat per-face normal, computed from the (unscaled, unrotated) cube
/// geometry — used for the demo's simple per-face normal assignment.
pub fn face_normal(face: Face, vertices: &[Vertex; N_CUBE_VERTICES]) -> Vector {
    let a = vertices[face.a as usize].pos;
    let b = vertices[face.b as usize].pos;
    let c = vertices[face.c as usize].pos;
    b.sub(a).cross(c.sub(a)).normalize()
}
