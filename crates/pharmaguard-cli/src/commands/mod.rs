//! CLI command implementations

pub mod config;
pub mod render;
pub mod simulate;

use anyhow::{Context, Result};
use clap::Args;
use pharmaguard_core::ViewportSize;
use pharmaguard_particles::{HeroConfig, ParticleRng};
use pharmaguard_runtime::{AnimationDriver, FrameLoop, FrameScheduler, HostEvent};

/// Options shared by every command that runs the animation
#[derive(Args, Debug, Clone)]
pub struct HeroArgs {
    /// Hero config file (TOML); built-in defaults when omitted
    #[arg(long)]
    pub config: Option<String>,

    /// Initial viewport width
    #[arg(long, default_value = "1280", value_parser = parse_dimension)]
    pub width: f64,

    /// Initial viewport height
    #[arg(long, default_value = "720", value_parser = parse_dimension)]
    pub height: f64,

    /// RNG seed for reproducible runs; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between frames
    #[arg(long, default_value = "16.67", value_parser = parse_interval)]
    pub frame_interval: f64,

    /// Delay one frame: AT_MS:EXTRA_MS (e.g. 1000:500)
    #[arg(long, value_parser = parse_stall)]
    pub stall: Vec<(f64, f64)>,

    /// Click the call-to-action at this time (ms)
    #[arg(long, value_parser = parse_time)]
    pub cta_at: Option<f64>,

    /// Resize the viewport: AT_MS:WIDTHxHEIGHT (e.g. 2500:1024x768)
    #[arg(long, value_parser = parse_resize)]
    pub resize_at: Vec<(f64, ViewportSize)>,
}

impl HeroArgs {
    pub fn viewport(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }

    pub fn load_config(&self) -> Result<HeroConfig> {
        match &self.config {
            Some(path) => HeroConfig::load(path)
                .with_context(|| format!("Failed to load hero config from {}", path)),
            None => Ok(HeroConfig::default()),
        }
    }

    fn rng(&self) -> ParticleRng {
        match self.seed {
            Some(seed) => ParticleRng::new(seed),
            None => ParticleRng::from_entropy(),
        }
    }

    /// Wire a driver, the given scheduler, and all scripted events into a loop
    pub fn build_loop<S: FrameScheduler>(&self, config: HeroConfig, scheduler: S) -> FrameLoop<S> {
        let driver = AnimationDriver::new(config, self.rng());
        let mut frame_loop = FrameLoop::new(driver, scheduler);
        if let Some(at) = self.cta_at {
            frame_loop.schedule_event(at, HostEvent::PrimaryAction);
        }
        for (at, size) in &self.resize_at {
            frame_loop.schedule_event(*at, HostEvent::resize(*size));
        }
        frame_loop
    }
}

fn parse_ms(s: &str, what: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid {}: {}", what, e))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("{} must be a non-negative number, got {}", what, v));
    }
    Ok(v)
}

pub(crate) fn parse_time(s: &str) -> Result<f64, String> {
    parse_ms(s, "time")
}

fn parse_dimension(s: &str) -> Result<f64, String> {
    parse_ms(s, "viewport dimension")
}

fn parse_interval(s: &str) -> Result<f64, String> {
    let v = parse_ms(s, "frame interval")?;
    if v <= 0.0 {
        return Err(format!("frame interval must be greater than zero, got {}", v));
    }
    Ok(v)
}

fn parse_stall(s: &str) -> Result<(f64, f64), String> {
    let (at, extra) = s
        .split_once(':')
        .ok_or_else(|| format!("expected AT_MS:EXTRA_MS, got '{}'", s))?;
    Ok((parse_ms(at, "time")?, parse_ms(extra, "stall length")?))
}

fn parse_resize(s: &str) -> Result<(f64, ViewportSize), String> {
    let (at, dims) = s
        .split_once(':')
        .ok_or_else(|| format!("expected AT_MS:WIDTHxHEIGHT, got '{}'", s))?;
    let (w, h) = dims
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", dims))?;
    Ok((
        parse_ms(at, "time")?,
        ViewportSize::new(parse_ms(w, "width")?, parse_ms(h, "height")?),
    ))
}
