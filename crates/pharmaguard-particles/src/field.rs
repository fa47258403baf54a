//! The particle population and its aggregate completion signal

use crate::config::HeroConfig;
use crate::particle::Particle;
use crate::rand::RandomSource;
use crate::surface::RenderSurface;
use pharmaguard_core::{Vec2, ViewportSize};

/// Owns every particle of the hero burst. Insertion order is draw order.
///
/// The population is only ever rebuilt wholesale; there is no incremental
/// add or remove.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an explicit population, e.g. hand-built particles in tests
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discard the current population and spawn `count` fresh particles.
    pub fn recreate(
        &mut self,
        count: u32,
        center: Vec2,
        viewport: ViewportSize,
        config: &HeroConfig,
        rng: &mut impl RandomSource,
    ) {
        self.particles.clear();
        self.particles.reserve(count as usize);
        for _ in 0..count {
            self.particles.push(Particle::spawn(center, viewport, config, rng));
        }
        log::debug!(
            "recreated {} particles around ({:.1}, {:.1}) for {}x{}",
            count,
            center.x,
            center.y,
            viewport.width,
            viewport.height
        );
    }

    /// Update then draw every particle in order.
    ///
    /// Returns true while at least one particle is still spreading.
    pub fn update_and_draw(&mut self, delta_ms: f64, surface: &mut impl RenderSurface) -> bool {
        let mut any_animating = false;
        for particle in &mut self.particles {
            particle.update(delta_ms);
            particle.draw(surface);
            if !particle.is_complete() {
                any_animating = true;
            }
        }
        any_animating
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn completed_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_complete()).count()
    }

    /// True once every particle has settled (vacuously true when empty)
    pub fn is_settled(&self) -> bool {
        self.particles.iter().all(Particle::is_complete)
    }
}
