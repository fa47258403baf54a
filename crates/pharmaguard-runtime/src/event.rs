//! Host events delivered to the animation between ticks

use pharmaguard_core::ViewportSize;

/// Edge-triggered signals from the host page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The hero call-to-action was clicked
    PrimaryAction,
    /// The viewport (and with it the canvas) changed size
    Resize { width: f64, height: f64 },
}

impl HostEvent {
    pub fn resize(size: ViewportSize) -> Self {
        HostEvent::Resize {
            width: size.width,
            height: size.height,
        }
    }
}
