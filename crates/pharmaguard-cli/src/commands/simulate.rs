//! Headless simulation command

use super::HeroArgs;
use anyhow::Result;
use pharmaguard_particles::RecordingSurface;
use pharmaguard_runtime::{FixedIntervalScheduler, FrameScheduler, LoopReport, RealtimeScheduler};

pub struct SimulateArgs {
    pub hero: HeroArgs,
    pub max_ms: f64,
    pub realtime: bool,
    pub format: String,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let (report, last_frame_draws) = simulate(&args)?;
    println!("{}", format_report(&report, last_frame_draws, &args.format)?);
    Ok(())
}

/// Run the loop to `max_ms`; also returns how many circles the last frame drew
fn simulate(args: &SimulateArgs) -> Result<(LoopReport, usize)> {
    let config = args.hero.load_config()?;

    let scheduler: Box<dyn FrameScheduler> = if args.realtime {
        Box::new(RealtimeScheduler::new(args.hero.frame_interval))
    } else {
        let mut fixed = FixedIntervalScheduler::new(0.0, args.hero.frame_interval);
        for (at, extra) in &args.hero.stall {
            fixed = fixed.with_stall(*at, *extra);
        }
        Box::new(fixed)
    };

    let mut frame_loop = args.hero.build_loop(config, scheduler);
    let mut surface = RecordingSurface::new(args.hero.viewport());
    let report = frame_loop.run_until(args.max_ms, &mut surface);
    Ok((report, surface.draws().len()))
}

fn format_report(report: &LoopReport, last_frame_draws: usize, format: &str) -> Result<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut lines = vec![
        format!(
            "Simulated {} frame(s) over {:.1}ms",
            report.frames, report.last_timestamp_ms
        ),
        format!(
            "State: {:?}{}",
            report.state,
            if report.settled { " (settled)" } else { "" }
        ),
        format!(
            "Particles: {}/{} settled, {} drawn in the last frame",
            report.settled_particles, report.particle_count, last_frame_draws
        ),
    ];
    if report.pauses > 0 || report.restarts > 0 {
        lines.push(format!(
            "Pauses: {}, restarts: {}",
            report.pauses, report.restarts
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{hero_args, small_config_file};

    fn simulate_args(name: &str, extra: &[&str], max_ms: f64, format: &str) -> SimulateArgs {
        let config = small_config_file(name);
        let config = config.to_string_lossy().into_owned();
        let mut argv = vec![
            "--config",
            config.as_str(),
            "--seed",
            "7",
            "--frame-interval",
            "10",
        ];
        argv.extend_from_slice(extra);
        SimulateArgs {
            hero: hero_args(&argv).unwrap(),
            max_ms,
            realtime: false,
            format: format.to_string(),
        }
    }

    #[test]
    fn settles_and_reports_text() {
        let args = simulate_args("settle", &[], 60_000.0, "text");
        let (report, draws) = simulate(&args).unwrap();
        assert!(report.settled);
        assert_eq!(report.particle_count, 5);
        assert_eq!(report.settled_particles, 5);
        assert_eq!(draws, 5);

        let text = format_report(&report, draws, &args.format).unwrap();
        assert!(text.contains("State: Paused (settled)"));
        assert!(text.contains("5/5 settled"));
        assert!(!text.contains("restarts"));
    }

    #[test]
    fn scripted_events_reach_the_loop() {
        let args = simulate_args(
            "scripted",
            &["--cta-at", "100", "--resize-at", "200:640x480"],
            60_000.0,
            "json",
        );
        let (report, _) = simulate(&args).unwrap();
        assert_eq!(report.pauses, 1);
        assert_eq!(report.restarts, 1);
        assert!(report.settled);

        let json = format_report(&report, 5, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"], "paused");
        assert_eq!(value["settled"], true);
        assert_eq!(value["particle_count"], 5);
        assert_eq!(value["pauses"], 1);
        assert_eq!(value["restarts"], 1);
    }

    #[test]
    fn deadline_leaves_animation_running() {
        let args = simulate_args("deadline", &[], 100.0, "json");
        let (report, _) = simulate(&args).unwrap();
        assert!(!report.settled);
        assert_eq!(report.last_timestamp_ms, 100.0);
        run(args).unwrap();
    }

    #[test]
    fn missing_config_is_an_error() {
        let args = SimulateArgs {
            hero: hero_args(&["--config", "/nonexistent/hero.toml"]).unwrap(),
            max_ms: 100.0,
            realtime: false,
            format: "text".to_string(),
        };
        assert!(run(args).is_err());
    }
}
