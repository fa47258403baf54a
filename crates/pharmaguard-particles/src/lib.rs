//! PharmaGuard Particles - the hero spread-and-settle particle field
//!
//! Provides the CPU-side simulation behind the landing-page hero:
//! - `Particle` - spawn jitter, ease-out spread toward a clamped target, exact settle
//! - `ParticleField` - fixed-size population with an "any still moving" signal
//! - `HeroConfig` - TOML-tunable spawn/spread/clock parameters
//! - `RandomSource` / `ParticleRng` - injectable, seedable sampling
//! - `RenderSurface` - the drawing boundary, with a recording implementation

pub mod config;
pub mod easing;
pub mod field;
pub mod particle;
pub mod rand;
pub mod surface;

pub use config::HeroConfig;
pub use easing::{ease_out, EASE_OUT_EXPONENT};
pub use field::ParticleField;
pub use particle::Particle;
pub use rand::{ParticleRng, RandomSource, ScriptedRandom};
pub use surface::{CircleDraw, ParticleColor, RecordingSurface, RenderSurface};
