//! SDL2 presentation layer.
//!
//! Opens the window, uploads finished frames to a streaming ARGB8888
//! texture and translates SDL events into an [`InputState`].

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{Error, Result};
use crate::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    /// F12 was pressed.
    Screenshot,
}

fn window_error(e: impl ToString) -> Error {
    Error::Window(e.to_string())
}

/// Sleeps off the rest of each frame's time budget.
pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_time_ms: u64,
}

impl FrameLimiter {
    /// `frame_time_ms` of zero disables waiting.
    pub fn new(window: &Window, frame_time_ms: u64) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_time_ms,
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < self.frame_time_ms {
            let time_to_wait = self.frame_time_ms - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

/// Counts frames and reports the rate once per second.
#[derive(Debug, Default)]
pub struct FpsCounter {
    window_start: Option<u64>,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame at `now_ms`. Returns the average frame rate when a
    /// full second has passed since the last report.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now_ms);
        self.frames += 1;

        let elapsed = now_ms.saturating_sub(start);
        if elapsed < 1000 {
            return None;
        }
        let fps = self.frames as f32 * 1000.0 / elapsed as f32;
        self.window_start = Some(now_ms);
        self.frames = 0;
        Some(fps)
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    texture: sdl2::render::Texture<'static>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    mouse: sdl2::mouse::MouseUtil,
    width: u32,
    height: u32,
}

impl Window {
    /// Opens a resizable window with the mouse captured in relative mode.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(window_error)?;
        let video_subsystem = sdl_context.video().map_err(window_error)?;
        let timer_subsystem = sdl_context.timer().map_err(window_error)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(window_error)?;

        let canvas = window.into_canvas().build().map_err(window_error)?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(window_error)?;

        let mouse = sdl_context.mouse();
        mouse.set_relative_mouse_mode(true);

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(window_error)?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            mouse,
            width,
            height,
        })
    }

    /// Drains pending events into `input` and returns the ones the frame
    /// loop has to act on.
    ///
    /// Mouse motion accumulates into `input.mouse_delta`; call
    /// [`InputState::begin_frame`] before this once per frame. Movement keys
    /// are read from the keyboard state, so they reflect what is held now.
    pub fn poll_events(&mut self, input: &mut InputState) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::F12),
                    repeat: false,
                    ..
                } => events.push(WindowEvent::Screenshot),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => events.push(WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32)),
                Event::MouseMotion { xrel, yrel, .. } => {
                    input.accumulate_mouse(xrel as f32, yrel as f32);
                }
                _ => {}
            }
        }

        let keys = self.event_pump.keyboard_state();
        input.forward = keys.is_scancode_pressed(Scancode::W);
        input.back = keys.is_scancode_pressed(Scancode::S);
        input.left = keys.is_scancode_pressed(Scancode::A);
        input.right = keys.is_scancode_pressed(Scancode::D);
        input.up = keys.is_scancode_pressed(Scancode::Space);
        input.down = keys.is_scancode_pressed(Scancode::LCtrl);

        events
    }

    /// Uploads an ARGB8888 frame of the window's current size and shows it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(window_error)?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(window_error)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(window_error)?;
        Ok(())
    }

    /// Captures or releases the mouse pointer.
    pub fn set_mouse_captured(&self, captured: bool) {
        self.mouse.set_relative_mouse_mode(captured);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
