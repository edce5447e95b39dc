//! Normalized texture coordinate.

use std::ops::{Add, Mul, Sub};

/// A texture coordinate in `[0, 1]`; the sampler clamps rather than tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TexCoord {
    pub u: f32,
    pub v: f32,
}

impl TexCoord {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    pub fn scale(&self, s: f32) -> TexCoord {
        TexCoord::new(self.u * s, self.v * s)
    }

    pub fn lerp(&self, other: TexCoord, t: f32) -> TexCoord {
        TexCoord::new(self.u + (other.u - self.u) * t, self.v + (other.v - self.v) * t)
    }
}

impl Add for TexCoord {
    type Output = TexCoord;
    fn add(self, rhs: TexCoord) -> TexCoord {
        TexCoord::new(self.u + rhs.u, self.v + rhs.v)
    }
}

impl Sub for TexCoord {
    type Output = TexCoord;
    fn sub(self, rhs: TexCoord) -> TexCoord {
        TexCoord::new(self.u - rhs.u, self.v - rhs.v)
    }
}

impl Mul<f32> for TexCoord {
    type Output = TexCoord;
    fn mul(self, rhs: f32) -> TexCoord {
        self.scale(rhs)
    }
}
