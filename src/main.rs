//! Demo binary: spins a lit, textured cube in an SDL2 window, driven by the
//! key bindings documented on [`mini3d::platform::Key`].

use std::time::Instant;

use mini3d::camera::DollyCamera;
use mini3d::device::{render_state, Device};
use mini3d::math::matrix::Matrix;
use mini3d::math::vector::Vector;
use mini3d::mesh;
use mini3d::platform::{Key, Platform, PlatformEvent};
use mini3d::texture::Texture;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const ROTATE_STEP: f32 = 0.01;
const DOLLY_STEP: f32 = 0.01;
const N_KEYS: usize = 6;

fn cycle_render_state(state: u32) -> u32 {
    match state {
        s if s == render_state::TEXTURE => render_state::COLOR,
        s if s == render_state::COLOR => render_state::WIREFRAME,
        _ => render_state::TEXTURE,
    }
}

/// Index into the held-key array, mirroring the original's `screen_keys`
/// boolean array (here sized to exactly the six bindings §6 names instead
/// of 512 process-wide globals).
fn key_index(key: Key) -> usize {
    match key {
        Key::Left => 0,
        Key::Right => 1,
        Key::Up => 2,
        Key::Down => 3,
        Key::Space => 4,
        Key::Escape => 5,
    }
}

fn main() -> Result<(), String> {
    let mut platform = Platform::new("mini3d", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut device = Device::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    device.bind_texture(Texture::checkerboard(32));
    device.render_state = render_state::TEXTURE;

    let vertices = mesh::cube_vertices();
    let faces = mesh::cube_faces();
    let normals: Vec<Vector> = faces.iter().map(|f| mesh::face_normal(*f, &vertices)).collect();

    let mut camera = DollyCamera::new(4.0);
    let mut angle: f32 = 0.0;
    let mut running = true;
    let start = Instant::now();
    // Held state per key, set on KeyDown and cleared on KeyUp, so
    // Left/Right/Up/Down apply their per-frame delta continuously while
    // held instead of once per received event (SDL auto-repeat is not
    // relied on for this).
    let mut held = [false; N_KEYS];

    while running {
        loop {
            match platform.poll() {
                PlatformEvent::None => break,
                PlatformEvent::Quit => {
                    running = false;
                    break;
                }
                PlatformEvent::KeyDown(Key::Escape) => {
                    running = false;
                    break;
                }
                PlatformEvent::KeyDown(Key::Space) => {
                    device.render_state = cycle_render_state(device.render_state);
                }
                PlatformEvent::KeyDown(key) => held[key_index(key)] = true,
                PlatformEvent::KeyUp(key) => held[key_index(key)] = false,
            }
        }
        if !running {
            break;
        }

        if held[key_index(Key::Left)] {
            angle -= ROTATE_STEP;
        }
        if held[key_index(Key::Right)] {
            angle += ROTATE_STEP;
        }
        if held[key_index(Key::Up)] {
            camera.dolly(-DOLLY_STEP);
        }
        if held[key_index(Key::Down)] {
            camera.dolly(DOLLY_STEP);
        }

        device.ts.world = Matrix::set_rotate(Vector::direction(0.0, 1.0, 0.0), angle);
        device.ts.view = camera.view_matrix();
        device.ts.update();
        device.camera_pos = camera.position();
        device.light.position = Vector::point(
            3.0 * (start.elapsed().as_secs_f32()).cos(),
            3.0,
            3.0 * (start.elapsed().as_secs_f32()).sin(),
        );

        device.clear();
        for (face, normal) in faces.iter().zip(normals.iter()) {
            let mut v0 = vertices[face.a as usize];
            let mut v1 = vertices[face.b as usize];
            let mut v2 = vertices[face.c as usize];
            v0.normal = *normal;
            v1.normal = *normal;
            v2.normal = *normal;
            device.draw_primitive(v0, v1, v2);
        }

        platform.present(device.framebuffer())?;
    }

    Ok(())
}
