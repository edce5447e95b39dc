//! Composes world/view/projection into clip- and screen-space transforms.

use std::f32::consts::FRAC_PI_2;

use crate::math::matrix::Matrix;
use crate::math::vector::Vector;

/// Clip-space rejection bitmask bits (see [`TransformStack::check_cvv`]).
pub mod cvv {
    pub const Z_NEGATIVE: u32 = 1 << 0;
    pub const Z_BEYOND_W: u32 = 1 << 1;
    pub const X_BELOW_NEG_W: u32 = 1 << 2;
    pub const X_ABOVE_W: u32 = 1 << 3;
    pub const Y_BELOW_NEG_W: u32 = 1 << 4;
    pub const Y_ABOVE_W: u32 = 1 << 5;
}

/// The world/view/projection stack plus the screen dimensions needed to
/// homogenize clip space into pixels.
pub struct TransformStack {
    pub world: Matrix,
    pub view: Matrix,
    pub projection: Matrix,
    pub transform: Matrix,
    pub vp: Matrix,
    pub vp_inverse: Matrix,
    pub width: u32,
    pub height: u32,
}

impl TransformStack {
    /// `world = view = identity`, `projection = perspective(pi/2, w/h, 1,
    /// 500)`, then an initial [`Self::update`].
    pub fn new(width: u32, height: u32) -> Self {
        let aspect = width as f32 / height as f32;
        let projection = Matrix::set_perspective(FRAC_PI_2, aspect, 1.0, 500.0);
        let mut ts = Self {
            world: Matrix::identity(),
            view: Matrix::identity(),
            projection,
            transform: Matrix::identity(),
            vp: Matrix::identity(),
            vp_inverse: Matrix::identity(),
            width,
            height,
        };
        ts.update();
        ts
    }

    /// Recomputes the projection for a new viewport size, keeping the
    /// same fov/near/far as [`Self::new`]. Caller must still call
    /// [`Self::update`] to refresh `transform`/`vp`/`vp_inverse`.
    pub fn resize(&mut self, width: u32, height: u32) {
        let aspect = width as f32 / height as f32;
        self.projection = Matrix::set_perspective(FRAC_PI_2, aspect, 1.0, 500.0);
        self.width = width;
        self.height = height;
    }

    /// Recomposes `transform = world * view * projection` and `vp = view *
    /// projection`, and recomputes `vp_inverse`. `vp_inverse` falls back to
    /// identity if `vp` is (unexpectedly) singular, rather than panicking.
    pub fn update(&mut self) {
        self.vp = self.view * self.projection;
        self.transform = self.world * self.vp;
        self.vp_inverse = self.vp.inverse().unwrap_or(Matrix::identity());
    }

    /// Transforms a world-space point into clip space.
    pub fn apply(&self, v: Vector) -> Vector {
        v * self.transform
    }

    /// Tests a clip-space vector against the six clip planes, returning a
    /// bitmask (see [`cvv`]) that is zero iff the point is inside the CVV.
    pub fn check_cvv(v: Vector) -> u32 {
        let w = v.w;
        let mut check = 0;
        if v.z < 0.0 {
            check |= cvv::Z_NEGATIVE;
        }
        if v.z > w {
            check |= cvv::Z_BEYOND_W;
        }
        if v.x < -w {
            check |= cvv::X_BELOW_NEG_W;
        }
        if v.x > w {
            check |= cvv::X_ABOVE_W;
        }
        if v.y < -w {
            check |= cvv::Y_BELOW_NEG_W;
        }
        if v.y > w {
            check |= cvv::Y_ABOVE_W;
        }
        check
    }

    /// Divides clip space by `w` and maps NDC to screen pixels; y is flipped
    /// so screen y grows downward.
    pub fn homogenize(&self, v: Vector) -> Vector {
        let rhw = 1.0 / v.w;
        Vector::new(
            (v.x * rhw + 1.0) * self.width as f32 * 0.5,
            (1.0 - v.y * rhw) * self.height as f32 * 0.5,
            v.z * rhw,
            1.0,
        )
    }

    /// Inverts the viewport mapping (but not the perspective divide),
    /// producing a clip-space vector given screen coordinates and the
    /// original clip-space `w`.
    pub fn homogenize_reverse(screen: Vector, w: f32, width: u32, height: u32) -> Vector {
        let ndc_x = screen.x / (width as f32 * 0.5) - 1.0;
        let ndc_y = 1.0 - screen.y / (height as f32 * 0.5);
        Vector::new(ndc_x * w, ndc_y * w, screen.z * w, w)
    }
}
