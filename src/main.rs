use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use softrast::window::{FpsCounter, FrameLimiter, Window, WindowEvent};
use softrast::{Engine, InputState, Scene, SceneKind, Settings};

#[derive(Parser)]
#[command(about = "CPU software rasterizer")]
struct Args {
    /// Scene to load
    #[arg(long, value_enum, default_value_t = SceneKind::Cube)]
    scene: SceneKind,

    /// JSON settings file; missing or invalid files fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings to this file and exit
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Frame width, overrides the settings file
    #[arg(long)]
    width: Option<u32>,

    /// Frame height, overrides the settings file
    #[arg(long)]
    height: Option<u32>,

    /// Render without a window and write the last frame to --output
    #[arg(long, default_value_t = false)]
    headless: bool,

    /// Number of frames to render in headless mode
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Image written by headless mode
    #[arg(long, default_value = "frame.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.window_width = width.max(1);
    }
    if let Some(height) = args.height {
        settings.window_height = height.max(1);
    }

    if let Some(path) = &args.save_config {
        settings
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote settings to {}", path.display());
        return Ok(());
    }

    if args.headless {
        run_headless(&args, &settings)
    } else {
        run_windowed(&args, &settings)
    }
}

/// Fixed time step for frames that are not driven by a clock.
fn fixed_dt(settings: &Settings) -> f32 {
    1.0 / settings.target_fps.max(1) as f32
}

fn run_headless(args: &Args, settings: &Settings) -> Result<()> {
    let mut engine = Engine::new(
        settings.window_width,
        settings.window_height,
        settings,
        Scene::preset(args.scene),
    );
    let input = InputState::default();
    let dt = fixed_dt(settings);

    for frame in 0..args.frames.max(1) {
        engine.update(&input, dt);
        engine.render();
        debug!("frame {}: {:?}", frame, engine.stats());
    }

    engine
        .save_screenshot(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}

fn run_windowed(args: &Args, settings: &Settings) -> Result<()> {
    let mut window = Window::new(
        &settings.window_title,
        settings.window_width,
        settings.window_height,
    )?;
    let mut engine = Engine::new(
        window.width(),
        window.height(),
        settings,
        Scene::preset(args.scene),
    );
    let mut limiter = FrameLimiter::new(&window, settings.frame_time_ms());
    let mut fps = FpsCounter::new();
    let mut input = InputState::default();

    'running: loop {
        input.begin_frame();
        for event in window.poll_events(&mut input) {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(width, height) => {
                    window.resize(width, height)?;
                    engine.resize(width, height);
                }
                WindowEvent::Screenshot => {
                    let path = format!("screenshot-{}.png", window.timer().ticks64());
                    engine.save_screenshot(&path)?;
                }
            }
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        engine.update(&input, delta_ms as f32 / 1000.0);
        engine.render();
        window.present(engine.frame_buffer())?;

        if let Some(rate) = fps.tick(window.timer().ticks64()) {
            debug!("{:.1} fps, {:?}", rate, engine.stats());
        }
    }

    Ok(())
}
