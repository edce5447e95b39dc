//! The device: owns the framebuffer and z-buffer, and runs triangle setup,
//! trapezoid rasterization, and the per-pixel pixel stage.

use crate::color::Color;
use crate::light::Light;
use crate::math::vector::Vector;
use crate::texcoord::TexCoord;
use crate::texture::Texture;
use crate::trapezoid::{self, ScanLine};
use crate::transform::TransformStack;
use crate::vertex::Vertex;

/// Render-state flags, OR-able. Texture takes precedence over color when
/// both are set (see [`Device::draw_scanline`]).
pub mod render_state {
    pub const WIREFRAME: u32 = 1;
    pub const TEXTURE: u32 = 2;
    pub const COLOR: u32 = 4;
}

/// Owns the transform stack, the color/depth buffers, and bound state for
/// one frame's worth of triangle submissions.
pub struct Device {
    pub ts: TransformStack,
    width: u32,
    height: u32,
    framebuffer: Vec<u32>,
    zbuffer: Vec<f32>,
    texture: Option<Texture>,
    pub render_state: u32,
    pub background: u32,
    pub foreground: u32,
    pub light: Light,
    pub camera_pos: Vector,
}

impl Device {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            ts: TransformStack::new(width, height),
            width,
            height,
            framebuffer: vec![0; size],
            zbuffer: vec![0.0; size],
            texture: None,
            render_state: render_state::COLOR,
            background: 0xC0C0C0,
            foreground: 0x000000,
            light: Light::new(Vector::point(0.0, 0.0, 0.0), Color::new(255.0, 255.0, 255.0)),
            camera_pos: Vector::point(0.0, 0.0, 0.0),
        }
    }

    /// Reallocates the framebuffer/z-buffer for a new viewport size and
    /// recomputes the projection's aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.width = width;
        self.height = height;
        self.framebuffer = vec![0; size];
        self.zbuffer = vec![0.0; size];
        self.ts.resize(width, height);
        self.ts.update();
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn framebuffer(&self) -> &[u32] {
        &self.framebuffer
    }

    pub fn zbuffer(&self) -> &[f32] {
        &self.zbuffer
    }

    pub fn bind_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn unbind_texture(&mut self) {
        self.texture = None;
    }

    /// Clears the framebuffer to `background` and the z-buffer to 0
    /// (infinitely far).
    pub fn clear(&mut self) {
        self.framebuffer.fill(self.background);
        self.zbuffer.fill(0.0);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.framebuffer[idx] = color;
        }
    }

    /// Submits a triangle in world space. Transforms to clip space, culls
    /// or rejects it, and rasterizes the survivor (filled or wireframe
    /// depending on `render_state`).
    pub fn draw_primitive(&mut self, mut v0: Vertex, mut v1: Vertex, mut v2: Vertex) {
        let c0 = self.ts.apply(v0.pos);
        let c1 = self.ts.apply(v1.pos);
        let c2 = self.ts.apply(v2.pos);

        // Backface cull in clip space: screen-projected z of (v12 x v13).
        let v12 = Vector::new(c1.x - c0.x, c1.y - c0.y, 0.0, 0.0);
        let v13 = Vector::new(c2.x - c0.x, c2.y - c0.y, 0.0, 0.0);
        if v12.y * v13.x - v13.y * v12.x >= 0.0 {
            return;
        }

        if TransformStack::check_cvv(c0) != 0
            || TransformStack::check_cvv(c1) != 0
            || TransformStack::check_cvv(c2) != 0
        {
            return;
        }

        v0.pos = self.ts.homogenize(c0);
        v1.pos = self.ts.homogenize(c1);
        v2.pos = self.ts.homogenize(c2);
        // pos.w must retain the clip-space w for later world-space
        // reconstruction in the pixel stage.
        v0.pos.w = c0.w;
        v1.pos.w = c1.w;
        v2.pos.w = c2.w;

        if self.render_state & render_state::WIREFRAME != 0 {
            self.draw_wireframe(v0, v1, v2);
            return;
        }

        v0.init_rhw();
        v1.init_rhw();
        v2.init_rhw();

        for trap in trapezoid::decompose(v0, v1, v2) {
            self.render_trap(trap);
        }
    }

    fn draw_wireframe(&mut self, v0: Vertex, v1: Vertex, v2: Vertex) {
        let pairs = [(v0, v1), (v1, v2), (v2, v0)];
        for (a, b) in pairs {
            self.draw_line_bresenham(a.pos.x as i32, a.pos.y as i32, b.pos.x as i32, b.pos.y as i32);
        }
    }

    /// Bresenham line, no depth test (wireframe mode never depth-tests).
    fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);
        let color = self.foreground;

        loop {
            self.set_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn render_trap(&mut self, mut trap: trapezoid::Trapezoid) {
        let top = (trap.top + 0.5).round() as i32;
        let bottom = (trap.bottom + 0.5).round() as i32 - 1;
        let top = top.max(0);
        let bottom = bottom.min(self.height as i32 - 1);

        for y in top..=bottom {
            trap.edge_interp(y as f32 + 0.5);
            let scan = trap.init_scan_line(y);
            self.draw_scanline(scan);
        }
    }

    fn draw_scanline(&mut self, mut scan: ScanLine) {
        let render_state = self.render_state;
        let y = scan.y;

        for i in 0..scan.w {
            let x = scan.x + i;
            if x >= 0 && (x as u32) < self.width {
                let rhw = scan.v.rhw;
                let idx = self.index(x, y).unwrap();

                if rhw >= self.zbuffer[idx] {
                    self.zbuffer[idx] = rhw;

                    let (tc, color) = scan.v.recover();
                    let mut albedo = Color::WHITE;
                    if render_state & render_state::COLOR != 0 {
                        albedo = color.clamp01();
                    }
                    if render_state & render_state::TEXTURE != 0 {
                        albedo = self.sample_bound_texture(tc);
                    }

                    let w = 1.0 / rhw;
                    let screen = Vector::new(scan.v.pos.x, scan.v.pos.y, scan.v.pos.z, scan.v.pos.w);
                    let clip = TransformStack::homogenize_reverse(screen, w, self.width, self.height);
                    let world_pos = clip * self.ts.vp_inverse;
                    let shaded = self.light.shade(world_pos, scan.v.normal, self.camera_pos, albedo);

                    self.framebuffer[idx] = shaded.to_argb();
                }
            }
            scan.v.add_step(&scan.step);
        }
    }

    fn sample_bound_texture(&self, tc: TexCoord) -> Color {
        match &self.texture {
            Some(tex) => tex.sample(tc.u, tc.v),
            None => Color::WHITE,
        }
    }
}
