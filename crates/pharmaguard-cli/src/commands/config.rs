//! Print or validate hero configuration

use anyhow::{Context, Result};
use pharmaguard_particles::HeroConfig;

pub fn run(check: Option<&str>) -> Result<()> {
    match check {
        Some(path) => {
            let config = HeroConfig::load(path)
                .with_context(|| format!("{} is not a valid hero config", path))?;
            println!(
                "{}: ok ({} particles, {:.0}-{:.0}ms spread)",
                path,
                config.particle_count,
                config.spread_duration_ms.min,
                config.spread_duration_ms.max
            );
        }
        None => {
            print!("{}", HeroConfig::default().to_toml_string()?);
        }
    }
    Ok(())
}
