//! Drawing boundary between the simulation and whatever paints it

use pharmaguard_core::{Vec2, ViewportSize};
use serde::{Deserialize, Serialize};

/// Which palette slot a particle is tinted with (chosen 50/50 at spawn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleColor {
    Primary,
    Secondary,
}

impl ParticleColor {
    pub fn palette_index(&self) -> usize {
        match self {
            ParticleColor::Primary => 0,
            ParticleColor::Secondary => 1,
        }
    }
}

/// A 2D canvas the hero animation paints onto.
///
/// The host owns the surface and may resize it between ticks; the field
/// re-reads `size` every time it is recreated.
pub trait RenderSurface {
    fn clear(&mut self);

    /// Filled circle plus a soft halo of `glow_radius`, composited at `opacity`
    fn fill_circle_with_glow(
        &mut self,
        center: Vec2,
        radius: f64,
        color: ParticleColor,
        glow_radius: f64,
        opacity: f64,
    );

    fn size(&self) -> ViewportSize;

    /// Called by the host when the viewport changes, before the field is recreated
    fn resize(&mut self, size: ViewportSize);
}

/// One recorded `fill_circle_with_glow` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDraw {
    pub center: Vec2,
    pub radius: f64,
    pub color: ParticleColor,
    pub glow_radius: f64,
    pub opacity: f64,
}

/// Surface that records the current frame's draw calls instead of painting.
/// `clear` drops the recorded calls, so `draws` always holds the last frame.
pub struct RecordingSurface {
    size: ViewportSize,
    draws: Vec<CircleDraw>,
    clear_count: u64,
}

impl RecordingSurface {
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size,
            draws: Vec::new(),
            clear_count: 0,
        }
    }

    pub fn draws(&self) -> &[CircleDraw] {
        &self.draws
    }

    /// Number of frames cleared so far
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.draws.clear();
        self.clear_count += 1;
    }

    fn fill_circle_with_glow(
        &mut self,
        center: Vec2,
        radius: f64,
        color: ParticleColor,
        glow_radius: f64,
        opacity: f64,
    ) {
        self.draws.push(CircleDraw {
            center,
            radius,
            color,
            glow_radius,
            opacity,
        });
    }

    fn size(&self) -> ViewportSize {
        self.size
    }

    fn resize(&mut self, size: ViewportSize) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_last_frame() {
        let mut surface = RecordingSurface::new(ViewportSize::new(10.0, 10.0));
        surface.fill_circle_with_glow(Vec2::ZERO, 1.0, ParticleColor::Primary, 4.0, 0.5);
        assert_eq!(surface.draws().len(), 1);

        surface.clear();
        assert!(surface.draws().is_empty());
        assert_eq!(surface.clear_count(), 1);

        surface.fill_circle_with_glow(Vec2::new(1.0, 2.0), 2.0, ParticleColor::Secondary, 4.0, 0.6);
        assert_eq!(surface.draws()[0].color, ParticleColor::Secondary);
    }

    #[test]
    fn palette_slots() {
        assert_eq!(ParticleColor::Primary.palette_index(), 0);
        assert_eq!(ParticleColor::Secondary.palette_index(), 1);
    }
}
