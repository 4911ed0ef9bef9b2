// Copyright 2025 the Eulerscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Eulerscope host.
//!
//! Drives the animation controller against a recording surface, one frame
//! per simulated display refresh, and optionally writes the final trail as
//! an SVG polyline.
//!
//! Run:
//! - `cargo run -p eulerscope_demos --bin eulerscope_headless -- --mode walk --frames 2000 --svg walk.svg`
//! - `RUST_LOG=eulerscope_animation=trace cargo run -p eulerscope_demos --bin eulerscope_headless`

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use eulerscope_animation::{
    AnimationController, Command, EngineConfig, FrameTicket, InputEvent, ModeId, hue_color,
};
use eulerscope_surface::{RecordingSurface, Size};
use eulerscope_timing::FrameQueue;
use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// Two rotating links with angular velocity ratio e.
    Arm,
    /// Walk steered by the decimal digits of e.
    Walk,
}

impl From<Mode> for ModeId {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Arm => Self::RotatingArm,
            Mode::Walk => Self::DigitWalk,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Run an Eulerscope animation without a window")]
struct Args {
    /// Visualization to run.
    #[arg(long, value_enum, default_value_t = Mode::Arm)]
    mode: Mode,
    /// Number of display refreshes to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Speed multiplier (positive).
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
    /// Surface width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Surface height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Wheel notches to zoom in around the surface center before starting.
    #[arg(long, default_value_t = 0)]
    zoom_in: u32,
    /// Trail length; 0 keeps the mode's default.
    #[arg(long, default_value_t = 0)]
    trail_len: usize,
    /// Write the final trail as SVG to this path.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    if !(args.width > 0.0 && args.height > 0.0) {
        bail!("surface size must be positive, got {}x{}", args.width, args.height);
    }

    let mode = ModeId::from(args.mode);
    let mut config = EngineConfig::default();
    if args.trail_len > 0 {
        config.set_trail_len(mode, args.trail_len)?;
    }

    let mut engine: AnimationController<FrameQueue<FrameTicket>> =
        AnimationController::with_queue(config).context("invalid engine configuration")?;
    let mut surface = RecordingSurface::new(Size::new(args.width, args.height));
    let center = Point::new(args.width / 2.0, args.height / 2.0);

    engine
        .handle_input(InputEvent::Command(Command::SetSpeed(args.speed)))
        .context("invalid speed")?;
    for _ in 0..args.zoom_in {
        engine.handle_input(InputEvent::Wheel {
            position: center,
            delta_y: -1.0,
        })?;
    }
    engine.handle_input(InputEvent::Command(Command::Start(mode)))?;

    let mut rendered = 0_usize;
    for _ in 0..args.frames {
        surface.clear_draws();
        rendered += engine.run_refresh(&mut surface);
    }

    let info = engine.debug_info();
    info!(
        ?mode,
        frames = rendered,
        step = info.step,
        trail_len = info.trail.len,
        evicted = info.trail.evicted,
        scale = info.view.scale,
        "simulation finished"
    );
    if let Some(last) = engine.trail().last() {
        info!(x = last.position.x, y = last.position.y, "newest trail point");
    }
    for text in surface.texts() {
        println!("{text}");
    }

    if let Some(path) = &args.svg {
        let svg = trail_svg(&engine, Size::new(args.width, args.height));
        std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "trail written");
    }

    Ok(())
}

/// Renders the current trail as a standalone SVG document in screen space.
fn trail_svg(engine: &AnimationController<FrameQueue<FrameTicket>>, size: Size) -> String {
    let view = engine.viewport();
    let palette = engine.config().palette;
    let trail = engine.trail();
    let stroke = trail
        .last()
        .and_then(|p| p.meta.hue)
        .map_or(palette.trail, hue_color)
        .to_rgba8();

    let mut points = String::new();
    for p in trail.positions() {
        let s = view.to_screen(p);
        let _ = write!(points, "{:.3},{:.3} ", s.x, s.y);
    }

    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\">\n",
            "  <rect width=\"100%\" height=\"100%\" fill=\"black\"/>\n",
            "  <polyline fill=\"none\" stroke=\"rgb({r},{g},{b})\" stroke-width=\"2\" points=\"{points}\"/>\n",
            "</svg>\n"
        ),
        w = size.width,
        h = size.height,
        r = stroke.r,
        g = stroke.g,
        b = stroke.b,
        points = points.trim_end(),
    )
}
