//! SDL2 window management and input, standing in for the demo driver's
//! `screen_init`/`screen_update`/`screen_dispatch` collaborator.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

/// An event returned from [`Platform::poll`], replacing the original's
/// process-wide `screen_keys`/`screen_exit` globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformEvent {
    None,
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
}

fn map_keycode(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Left => Some(Key::Left),
        Keycode::Right => Some(Key::Right),
        Keycode::Up => Some(Key::Up),
        Keycode::Down => Some(Key::Down),
        Keycode::Space => Some(Key::Space),
        Keycode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Owns the SDL2 window, canvas, streaming texture, and event pump for one
/// fixed-size window.
pub struct Platform {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Struct fields drop in declaration order, so `texture` (borrowing from
    // `texture_creator` via the 'static cast below) must be declared first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Platform {
    /// `screen_init`: opens a fixed-size window and its ARGB8888 streaming
    /// texture.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // texture_creator is heap-allocated and outlives texture; struct
        // field order ensures texture is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            width,
            height,
        })
    }

    /// `screen_dispatch`: drains the SDL event queue and returns the first
    /// event of interest, if any.
    pub fn poll(&mut self) -> PlatformEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return PlatformEvent::Quit,
                // OS auto-repeat events are ignored here, not relied on for
                // held-key state: the caller tracks "currently held" itself
                // from this one-shot KeyDown/KeyUp pair and applies its
                // per-frame delta every frame while held, rather than once
                // per repeat event (see `main.rs`'s `held` array).
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_keycode(keycode) {
                        return PlatformEvent::KeyDown(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = map_keycode(keycode) {
                        return PlatformEvent::KeyUp(key);
                    }
                }
                _ => {}
            }
        }
        PlatformEvent::None
    }

    /// `screen_update`: blits the device's ARGB framebuffer to the window.
    pub fn present(&mut self, framebuffer: &[u32]) -> Result<(), String> {
        let bytes: Vec<u8> = framebuffer.iter().flat_map(|p| p.to_ne_bytes()).collect();
        self.texture
            .update(None, &bytes, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
