//! Hero animation configuration (parsed from TOML)

use pharmaguard_core::{HeroError, Result, Rgb, ValueRange};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on the population so a typo can't allocate millions of particles
pub const MAX_PARTICLE_COUNT: u32 = 100_000;

/// Tunables for particle spawning, spreading, and the frame clock.
///
/// Every key is optional in TOML; missing keys fall back to the values the
/// landing page ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub particle_count: u32,
    /// Radius of the invisible ring particles spawn on around the center
    pub spawn_radius: ValueRange,
    pub size: ValueRange,
    pub opacity: ValueRange,
    pub spread_duration_ms: ValueRange,
    /// Max spread distance as a fraction of the viewport diagonal
    pub spread_diagonal_factor: f64,
    /// Base spread distance as a fraction of the max spread distance
    pub spread_base_fraction: f64,
    /// Per-particle jitter added to the base spread, as a fraction of the max spread
    pub spread_jitter: ValueRange,
    /// How far outside the viewport a target may land
    pub target_margin: f64,
    pub glow_radius: f64,
    pub max_frame_delta_ms: f64,
    /// `#rrggbb` colors for the primary and secondary particle tint
    pub palette: [String; 2],
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            particle_count: 700,
            spawn_radius: ValueRange::new(5.0, 12.0),
            size: ValueRange::new(2.0, 3.0),
            opacity: ValueRange::new(0.5, 0.75),
            spread_duration_ms: ValueRange::new(3000.0, 5000.0),
            spread_diagonal_factor: 0.6,
            spread_base_fraction: 0.5,
            spread_jitter: ValueRange::new(-0.08, 0.07),
            target_margin: 50.0,
            glow_radius: 4.0,
            max_frame_delta_ms: 16.67,
            palette: ["#00d4ff".to_string(), "#00b8d4".to_string()],
        }
    }
}

impl HeroConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the palette into concrete colors
    pub fn palette_colors(&self) -> Result<[Rgb; 2]> {
        Ok([Rgb::from_hex(&self.palette[0])?, Rgb::from_hex(&self.palette[1])?])
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(out_of_range(
                "particle_count",
                0.0,
                MAX_PARTICLE_COUNT as f64,
                self.particle_count as f64,
            ));
        }

        check_window("spawn_radius", &self.spawn_radius, 0.0, f64::MAX)?;
        check_window("size", &self.size, 0.0, f64::MAX)?;
        check_window("opacity", &self.opacity, 0.0, 1.0)?;
        check_window("spread_duration_ms", &self.spread_duration_ms, 0.0, f64::MAX)?;
        if self.spread_duration_ms.min <= 0.0 {
            return Err(HeroError::InvalidConfig(
                "spread_duration_ms.min must be greater than zero".into(),
            ));
        }
        check_window("spread_jitter", &self.spread_jitter, -1.0, 1.0)?;

        check_scalar("spread_diagonal_factor", self.spread_diagonal_factor, 0.0, 10.0)?;
        check_scalar("spread_base_fraction", self.spread_base_fraction, 0.0, 1.0)?;
        check_scalar("target_margin", self.target_margin, 0.0, f64::MAX)?;
        check_scalar("glow_radius", self.glow_radius, 0.0, f64::MAX)?;
        if !(self.max_frame_delta_ms > 0.0) {
            return Err(HeroError::InvalidConfig(
                "max_frame_delta_ms must be greater than zero".into(),
            ));
        }

        self.palette_colors()?;
        Ok(())
    }
}

fn out_of_range(field: &str, min: f64, max: f64, value: f64) -> HeroError {
    HeroError::ValueOutOfRange {
        field: field.to_string(),
        min,
        max,
        value,
    }
}

fn check_scalar(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(out_of_range(field, min, max, value));
    }
    Ok(())
}

fn check_window(field: &str, range: &ValueRange, min: f64, max: f64) -> Result<()> {
    check_scalar(&format!("{field}.min"), range.min, min, max)?;
    check_scalar(&format!("{field}.max"), range.max, min, max)?;
    if range.min > range.max {
        return Err(HeroError::InvalidConfig(format!(
            "{field}: min ({}) is greater than max ({})",
            range.min, range.max
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HeroConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 700);
        assert_eq!(config.max_frame_delta_ms, 16.67);
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r##"
particle_count = 120
glow_radius = 6
spread_duration_ms = { min = 1000.0, max = 1500.0 }
palette = ["#ff0000", "#00ff00"]
"##;
        let config = HeroConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.particle_count, 120);
        assert_eq!(config.glow_radius, 6.0);
        assert_eq!(config.spread_duration_ms, ValueRange::new(1000.0, 1500.0));
        // Untouched keys keep their defaults
        assert_eq!(config.spawn_radius, ValueRange::new(5.0, 12.0));
        let [a, b] = config.palette_colors().unwrap();
        assert_eq!(a, Rgb::new(255, 0, 0));
        assert_eq!(b, Rgb::new(0, 255, 0));
    }

    #[test]
    fn toml_round_trip_preserves_defaults() {
        let text = HeroConfig::default().to_toml_string().unwrap();
        let parsed = HeroConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, HeroConfig::default());
    }

    #[test]
    fn rejects_inverted_window() {
        let mut config = HeroConfig::default();
        config.size = ValueRange::new(3.0, 2.0);
        assert!(matches!(
            config.validate(),
            Err(HeroError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_opacity_above_one() {
        let err = HeroConfig::from_toml_str("opacity = { min = 0.5, max = 1.5 }").unwrap_err();
        match err {
            HeroError::ValueOutOfRange { field, value, .. } => {
                assert_eq!(field, "opacity.max");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_zero_duration_and_clock() {
        let mut config = HeroConfig::default();
        config.spread_duration_ms = ValueRange::new(0.0, 100.0);
        assert!(config.validate().is_err());

        let mut config = HeroConfig::default();
        config.max_frame_delta_ms = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_palette_and_huge_population() {
        let err = HeroConfig::from_toml_str(r##"palette = ["#00d4ff", "teal"]"##).unwrap_err();
        assert!(matches!(err, HeroError::InvalidColor(_)));

        let err = HeroConfig::from_toml_str("particle_count = 1000000").unwrap_err();
        assert!(matches!(err, HeroError::ValueOutOfRange { .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("pharmaguard-hero-{}.toml", std::process::id()));
        std::fs::write(&path, "particle_count = 3\n").unwrap();
        let config = HeroConfig::load(&path).unwrap();
        assert_eq!(config.particle_count, 3);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            HeroConfig::load(&path),
            Err(HeroError::IoError(_))
        ));
    }
}
