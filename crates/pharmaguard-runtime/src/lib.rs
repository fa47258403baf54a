//! PharmaGuard Runtime - animation loop infrastructure
//!
//! Provides the pieces between the particle field and a host page:
//! - `AnimationDriver` - frame clock with dt clamp and run/pause/restart lifecycle
//! - `HostEvent` / `EventBus` - primary-action and resize signals, applied between ticks
//! - `FrameScheduler` - where frame timestamps come from (simulated or wall clock)
//! - `FrameLoop` - requests frames, delivers events, and ticks the driver

mod driver;
mod event;
mod event_bus;
mod frame_loop;
mod scheduler;

pub use driver::{AnimationDriver, DriverState};
pub use event::HostEvent;
pub use event_bus::EventBus;
pub use frame_loop::{FrameLoop, LoopReport};
pub use scheduler::{
    FixedIntervalScheduler, FrameScheduler, RealtimeScheduler, MAX_REALTIME_INTERVAL_MS,
    MIN_FRAME_INTERVAL_MS,
};
