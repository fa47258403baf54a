//! Animation driver: the frame clock and run/pause/restart lifecycle of the hero

use pharmaguard_core::ViewportSize;
use pharmaguard_particles::{HeroConfig, ParticleField, ParticleRng, RandomSource, RenderSurface};
use serde::Serialize;

/// Lifecycle of the hero animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverState {
    /// Constructed, field not yet spawned
    Idle,
    /// Ticking every frame
    Running,
    /// Loop halted: either every particle settled or the primary action fired
    Paused,
}

/// Holds all mutable animation state and advances it one tick at a time.
///
/// The driver never schedules frames itself. The host calls [`tick`](Self::tick)
/// once per frame and stops requesting frames as soon as it returns false.
pub struct AnimationDriver<R: RandomSource = ParticleRng> {
    config: HeroConfig,
    field: ParticleField,
    rng: R,
    state: DriverState,
    active: bool,
    last_frame_ms: f64,
    last_delta_ms: f64,
    frames: u64,
}

impl<R: RandomSource> AnimationDriver<R> {
    pub fn new(config: HeroConfig, rng: R) -> Self {
        Self {
            config,
            field: ParticleField::new(),
            rng,
            state: DriverState::Idle,
            active: false,
            last_frame_ms: 0.0,
            last_delta_ms: 0.0,
            frames: 0,
        }
    }

    /// Spawn the field for the initial viewport and begin running.
    pub fn start(&mut self, viewport: ViewportSize, now_ms: f64) {
        self.reinitialize(viewport, now_ms);
        log::info!(
            "hero animation started with {} particles",
            self.field.len()
        );
    }

    /// Viewport changed: rebuild the field around the new center and run again.
    ///
    /// Valid from any state; state is replaced between ticks so nothing in flight
    /// needs cancelling.
    pub fn restart(&mut self, viewport: ViewportSize, now_ms: f64) {
        let previous = self.state;
        self.reinitialize(viewport, now_ms);
        log::debug!(
            "restarted from {:?} for {}x{}",
            previous,
            viewport.width,
            viewport.height
        );
    }

    /// Primary action fired. Takes effect at the next tick boundary: that tick
    /// still runs, then the driver reports it should not continue.
    pub fn pause(&mut self) {
        if self.active {
            log::debug!("pause requested at frame {}", self.frames);
        }
        self.active = false;
    }

    /// Run one frame: clamp dt, clear, update and draw every particle.
    ///
    /// Returns true if the host should request another frame.
    pub fn tick(&mut self, now_ms: f64, surface: &mut impl RenderSurface) -> bool {
        if self.state != DriverState::Running {
            return false;
        }

        let delta_ms = (now_ms - self.last_frame_ms)
            .min(self.config.max_frame_delta_ms)
            .max(0.0);
        self.last_frame_ms = now_ms;
        self.last_delta_ms = delta_ms;

        surface.clear();
        let animating = self.field.update_and_draw(delta_ms, surface);
        self.frames += 1;
        log::trace!("tick: frame={} dt={:.2}ms", self.frames, delta_ms);

        if animating && self.active {
            return true;
        }

        self.active = false;
        self.state = DriverState::Paused;
        if animating {
            log::info!("hero animation paused at frame {}", self.frames);
        } else {
            log::info!("hero animation settled after {} frames", self.frames);
        }
        false
    }

    fn reinitialize(&mut self, viewport: ViewportSize, now_ms: f64) {
        let count = self.config.particle_count;
        self.field
            .recreate(count, viewport.center(), viewport, &self.config, &mut self.rng);
        self.last_frame_ms = now_ms;
        self.last_delta_ms = 0.0;
        self.active = true;
        self.state = DriverState::Running;
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// False as soon as a pause is requested, even before the state flips
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once the field exists and every particle has settled
    pub fn is_settled(&self) -> bool {
        self.state != DriverState::Idle && self.field.is_settled()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }

    /// The clamped dt applied by the most recent tick
    pub fn last_delta_ms(&self) -> f64 {
        self.last_delta_ms
    }

    /// Ticks run since construction
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
