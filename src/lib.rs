//! A software 3D rasterizer: CPU-side transform, clip-volume reject,
//! perspective divide, trapezoid/scanline rasterization, z-buffered depth
//! test, bilinear texture sampling, and per-pixel Blinn-Phong shading.
//!
//! No shader language, no GPU, single-threaded. See the module docs below
//! for the five pipeline layers; [`Device`] is the entry point a caller
//! drives per frame: [`Device::clear`], then [`Device::draw_primitive`] per
//! triangle, then [`Device::framebuffer`] to read back the frame.

pub mod camera;
pub mod color;
pub mod device;
pub mod light;
pub mod math;
pub mod mesh;
pub mod platform;
pub mod texcoord;
pub mod texture;
pub mod trapezoid;
pub mod transform;
pub mod vertex;

pub use color::Color;
pub use device::Device;
pub use light::Light;
pub use math::{Matrix, Vector};
pub use texcoord::TexCoord;
pub use texture::Texture;
pub use transform::TransformStack;
pub use vertex::Vertex;
