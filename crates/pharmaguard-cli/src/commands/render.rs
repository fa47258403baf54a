//! Headless hero-to-PNG render command

use super::HeroArgs;
use anyhow::{Context, Result};
use pharmaguard_core::Rgb;
use pharmaguard_render::RasterSurface;
use pharmaguard_runtime::FixedIntervalScheduler;

/// Past this the default-config animation has long settled
const SETTLE_HORIZON_MS: f64 = 600_000.0;

pub struct RenderArgs {
    pub hero: HeroArgs,
    pub at: Option<f64>,
    pub output: String,
    pub background: Option<String>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let config = args.hero.load_config()?;
    let palette = config.palette_colors().context("Invalid palette")?;

    let mut surface = RasterSurface::new(args.hero.viewport(), palette);
    if let Some(hex) = &args.background {
        let color = Rgb::from_hex(hex).context("Invalid background color")?;
        surface = surface.with_background(color);
    }

    let mut scheduler = FixedIntervalScheduler::new(0.0, args.hero.frame_interval);
    for (at, extra) in &args.hero.stall {
        scheduler = scheduler.with_stall(*at, *extra);
    }

    let mut frame_loop = args.hero.build_loop(config, scheduler);
    let report = frame_loop.run_until(args.at.unwrap_or(SETTLE_HORIZON_MS), &mut surface);

    surface
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;

    let size = surface.image().dimensions();
    println!(
        "Rendered {}x{} frame at {:.1}ms ({} frame(s), {}/{} settled) to {}",
        size.0,
        size.1,
        report.last_timestamp_ms,
        report.frames,
        report.settled_particles,
        report.particle_count,
        args.output
    );
    Ok(())
}
