//! A single spreading particle: spawn geometry, eased progress, and settle

use crate::config::HeroConfig;
use crate::easing::{ease_out, lerp_vec2};
use crate::rand::RandomSource;
use crate::surface::{ParticleColor, RenderSurface};
use pharmaguard_core::{Vec2, ViewportSize};

/// Halo radius used when a particle is built without a config
pub const DEFAULT_GLOW_RADIUS: f64 = 4.0;

/// One particle of the hero burst.
///
/// Spawned on a small invisible ring around the center, it eases out toward a
/// target fixed at creation. Once `spread_progress` reaches 1 the particle is
/// settled: its position is pinned to the target bit-for-bit and further
/// updates do nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    start: Vec2,
    target: Vec2,
    position: Vec2,
    size: f64,
    base_opacity: f64,
    opacity: f64,
    color: ParticleColor,
    glow_radius: f64,
    spread_duration_ms: f64,
    /// Accumulated simulated time; progress is derived from it so that a delta
    /// sequence summing to the duration always completes
    spread_elapsed_ms: f64,
    spread_progress: f64,
    spread_complete: bool,
}

impl Particle {
    /// Sample a fresh particle around `center` for a surface of `viewport` size.
    pub fn spawn(
        center: Vec2,
        viewport: ViewportSize,
        config: &HeroConfig,
        rng: &mut impl RandomSource,
    ) -> Self {
        // Spawn jitter keeps frame 0 from showing a single bright dot
        let spawn_radius = config.spawn_radius.at(rng.next_f64());
        let spawn_angle = rng.angle();
        let start = center + Vec2::from_angle(spawn_angle) * spawn_radius;

        let size = config.size.at(rng.next_f64());
        let base_opacity = config.opacity.at(rng.next_f64());
        let color = if rng.next_f64() > 0.5 {
            ParticleColor::Primary
        } else {
            ParticleColor::Secondary
        };

        let direction = Vec2::from_angle(rng.angle());
        let max_spread = viewport.diagonal() * config.spread_diagonal_factor;
        let jitter = config.spread_jitter.at(rng.next_f64()) * max_spread;
        let spread = max_spread * config.spread_base_fraction + jitter;

        let raw_target = start + direction * spread;
        let margin = config.target_margin;
        // max/min rather than clamp: a degenerate viewport must not panic
        let target = Vec2::new(
            raw_target.x.max(-margin).min(viewport.width + margin),
            raw_target.y.max(-margin).min(viewport.height + margin),
        );

        let spread_duration_ms = config.spread_duration_ms.at(rng.next_f64());

        Self {
            start,
            target,
            position: start,
            size,
            base_opacity,
            opacity: base_opacity,
            color,
            glow_radius: config.glow_radius,
            spread_duration_ms,
            spread_elapsed_ms: 0.0,
            spread_progress: 0.0,
            spread_complete: false,
        }
    }

    /// Build a particle with an explicit path and default appearance
    pub fn with_path(start: Vec2, target: Vec2, spread_duration_ms: f64) -> Self {
        Self {
            start,
            target,
            position: start,
            size: 2.5,
            base_opacity: 0.6,
            opacity: 0.6,
            color: ParticleColor::Primary,
            glow_radius: DEFAULT_GLOW_RADIUS,
            spread_duration_ms,
            spread_elapsed_ms: 0.0,
            spread_progress: 0.0,
            spread_complete: false,
        }
    }

    pub fn with_appearance(mut self, size: f64, opacity: f64, color: ParticleColor) -> Self {
        self.size = size;
        self.base_opacity = opacity;
        self.opacity = opacity;
        self.color = color;
        self
    }

    /// Advance the spread by `delta_ms` of simulated time.
    pub fn update(&mut self, delta_ms: f64) {
        if self.spread_complete {
            self.position = self.target;
            return;
        }

        self.spread_elapsed_ms += delta_ms.max(0.0);
        self.spread_progress = if self.spread_duration_ms > 0.0 {
            self.spread_elapsed_ms / self.spread_duration_ms
        } else {
            1.0
        };

        if self.spread_progress >= 1.0 {
            self.spread_progress = 1.0;
            self.spread_complete = true;
            // Snap instead of interpolating so no float residue survives
            self.position = self.target;
        } else {
            let eased = ease_out(self.spread_progress);
            self.position = lerp_vec2(self.start, self.target, eased);
        }
    }

    pub fn draw(&self, surface: &mut impl RenderSurface) {
        if self.opacity <= 0.0 {
            return;
        }
        surface.fill_circle_with_glow(
            self.position,
            self.size,
            self.color,
            self.glow_radius,
            self.opacity,
        );
    }

    pub fn is_complete(&self) -> bool {
        self.spread_complete
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn base_opacity(&self) -> f64 {
        self.base_opacity
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn color(&self) -> ParticleColor {
        self.color
    }

    pub fn spread_duration_ms(&self) -> f64 {
        self.spread_duration_ms
    }

    pub fn spread_progress(&self) -> f64 {
        self.spread_progress
    }
}
