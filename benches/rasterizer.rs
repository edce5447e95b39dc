use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mini3d::color::Color;
use mini3d::device::Device;
use mini3d::math::vector::Vector;
use mini3d::texcoord::TexCoord;
use mini3d::texture::Texture;
use mini3d::trapezoid;
use mini3d::vertex::Vertex;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn screen_vertex(x: f32, y: f32, z: f32, w: f32, u: f32, v: f32) -> Vertex {
    Vertex::new(Vector::new(x, y, z, w), TexCoord::new(u, v), Color::WHITE, Vector::direction(0.0, 0.0, -1.0))
}

fn small_triangle() -> (Vertex, Vertex, Vertex) {
    (
        screen_vertex(100.0, 100.0, 0.5, 1.0, 0.0, 0.0),
        screen_vertex(120.0, 100.0, 0.5, 1.0, 1.0, 0.0),
        screen_vertex(110.0, 120.0, 0.5, 1.0, 0.5, 1.0),
    )
}

fn medium_triangle() -> (Vertex, Vertex, Vertex) {
    (
        screen_vertex(100.0, 100.0, 0.5, 1.0, 0.0, 0.0),
        screen_vertex(300.0, 100.0, 0.5, 1.0, 1.0, 0.0),
        screen_vertex(200.0, 300.0, 0.5, 1.0, 0.5, 1.0),
    )
}

fn large_triangle() -> (Vertex, Vertex, Vertex) {
    (
        screen_vertex(50.0, 50.0, 0.5, 1.0, 0.0, 0.0),
        screen_vertex(750.0, 100.0, 0.5, 1.0, 1.0, 0.0),
        screen_vertex(400.0, 550.0, 0.5, 1.0, 0.5, 1.0),
    )
}

/// Maps a pixel coordinate into clip space under an identity world/view
/// transform and the device's default perspective, so a triangle built
/// from pixel-space corners lands on the same screen pixels after
/// [`Device::draw_primitive`] homogenizes it back down.
fn clip_from_pixel(x: f32, y: f32) -> (f32, f32) {
    (x / (BUFFER_WIDTH as f32 * 0.5) - 1.0, 1.0 - y / (BUFFER_HEIGHT as f32 * 0.5))
}

/// Builds a world-space triangle (for [`Device::draw_primitive`], identity
/// world/view) from three pixel-space corners. Vertices 1 and 2 are swapped
/// relative to the input order: the clip-to-screen y flip reverses winding,
/// and the device backface-culls in clip space before that flip happens.
fn world_triangle_from_pixels(p0: (f32, f32, f32, f32), p1: (f32, f32, f32, f32), p2: (f32, f32, f32, f32)) -> (Vertex, Vertex, Vertex) {
    let corner = |p: (f32, f32, f32, f32)| {
        let (cx, cy) = clip_from_pixel(p.0, p.1);
        screen_vertex(cx, cy, 0.5, 1.0, p.2, p.3)
    };
    (corner(p0), corner(p2), corner(p1))
}

fn small_world_triangle() -> (Vertex, Vertex, Vertex) {
    world_triangle_from_pixels((100.0, 100.0, 0.0, 0.0), (120.0, 100.0, 1.0, 0.0), (110.0, 120.0, 0.5, 1.0))
}

fn medium_world_triangle() -> (Vertex, Vertex, Vertex) {
    world_triangle_from_pixels((100.0, 100.0, 0.0, 0.0), (300.0, 100.0, 1.0, 0.0), (200.0, 300.0, 0.5, 1.0))
}

fn large_world_triangle() -> (Vertex, Vertex, Vertex) {
    world_triangle_from_pixels((50.0, 50.0, 0.0, 0.0), (750.0, 100.0, 1.0, 0.0), (400.0, 550.0, 0.5, 1.0))
}

/// Decomposition-only cost, excluding the scanline fill.
fn benchmark_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("trapezoid_decompose");

    for (name, (a, b, cc)) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("decompose", name), &(a, b, cc), |bencher, (a, b, c)| {
            bencher.iter(|| black_box(trapezoid::decompose(*a, *b, *c)));
        });
    }

    group.finish();
}

/// Full per-triangle cost through the device: setup, decomposition, and
/// scanline fill with a bound texture.
fn benchmark_draw_primitive(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_primitive");

    for (name, (a, b, cc)) in [
        ("small", small_world_triangle()),
        ("medium", medium_world_triangle()),
        ("large", large_world_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("textured", name), &(a, b, cc), |bencher, (a, b, c)| {
            let mut device = Device::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            device.bind_texture(Texture::checkerboard(32));
            device.ts.world = mini3d::math::matrix::Matrix::identity();
            device.ts.view = mini3d::math::matrix::Matrix::identity();
            device.ts.update();
            bencher.iter(|| {
                device.clear();
                device.draw_primitive(black_box(*a), black_box(*b), black_box(*c));
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let triangles: Vec<(Vertex, Vertex, Vertex)> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                world_triangle_from_pixels(
                    (x, y, 0.0, 0.0),
                    (x + 35.0, y, 1.0, 0.0),
                    (x + 17.5, y + 25.0, 0.5, 1.0),
                )
            })
        })
        .collect();

    group.bench_function("400_triangles", |bencher| {
        let mut device = Device::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        device.bind_texture(Texture::checkerboard(32));
        bencher.iter(|| {
            device.clear();
            for (a, b, c) in &triangles {
                device.draw_primitive(black_box(*a), black_box(*b), black_box(*c));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_decompose, benchmark_draw_primitive, benchmark_many_triangles);
criterion_main!(benches);
