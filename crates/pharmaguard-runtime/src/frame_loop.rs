//! Host integration: frame requests, event delivery at tick boundaries, and ticking

use crate::driver::{AnimationDriver, DriverState};
use crate::event::HostEvent;
use crate::event_bus::EventBus;
use crate::scheduler::FrameScheduler;
use pharmaguard_core::ViewportSize;
use pharmaguard_particles::{ParticleRng, RandomSource, RenderSurface};
use serde::Serialize;

/// Summary of a frame loop run
#[derive(Debug, Clone, Serialize)]
pub struct LoopReport {
    /// Ticks the driver actually ran
    pub frames: u64,
    pub state: DriverState,
    pub settled: bool,
    pub particle_count: usize,
    pub settled_particles: usize,
    /// Timestamp of the last frame handed out by the scheduler
    pub last_timestamp_ms: f64,
    pub restarts: u32,
    pub pauses: u32,
}

/// Drives an [`AnimationDriver`] the way a browser drives a canvas.
///
/// Every iteration requests one frame. Pending host events are applied first,
/// so a pause or resize lands between ticks and never inside one. The loop
/// stops requesting frames once the driver halts and nothing else is queued.
pub struct FrameLoop<S: FrameScheduler, R: RandomSource = ParticleRng> {
    driver: AnimationDriver<R>,
    scheduler: S,
    bus: EventBus,
    /// Events released onto the bus at the first frame at or after their time, sorted
    scripted: Vec<(f64, HostEvent)>,
    last_timestamp_ms: f64,
    restarts: u32,
    pauses: u32,
}

impl<S: FrameScheduler, R: RandomSource> FrameLoop<S, R> {
    pub fn new(driver: AnimationDriver<R>, scheduler: S) -> Self {
        Self {
            driver,
            scheduler,
            bus: EventBus::new(),
            scripted: Vec::new(),
            last_timestamp_ms: 0.0,
            restarts: 0,
            pauses: 0,
        }
    }

    /// Queue an event for delivery at the next tick boundary
    pub fn push_event(&mut self, event: HostEvent) {
        self.bus.push(event);
    }

    /// Queue an event for the first tick boundary at or after `at_ms`
    pub fn schedule_event(&mut self, at_ms: f64, event: HostEvent) {
        self.scripted.push((at_ms, event));
        self.scripted.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    pub fn driver(&self) -> &AnimationDriver<R> {
        &self.driver
    }

    /// Run frames until the animation halts with nothing pending, or a frame
    /// lands past `deadline_ms`.
    pub fn run_until(&mut self, deadline_ms: f64, surface: &mut impl RenderSurface) -> LoopReport {
        while self.wants_frame() {
            let now = self.scheduler.request_frame();
            if now > deadline_ms {
                log::debug!("frame at {:.1}ms past deadline {:.1}ms", now, deadline_ms);
                break;
            }
            self.last_timestamp_ms = now;
            self.frame(now, surface);
        }
        self.report()
    }

    fn wants_frame(&self) -> bool {
        self.driver.state() != DriverState::Paused
            || !self.bus.is_empty()
            || !self.scripted.is_empty()
    }

    fn release_due_events(&mut self, now: f64) {
        let due = self.scripted.partition_point(|(at, _)| *at <= now);
        for (_, event) in self.scripted.drain(..due) {
            self.bus.push(event);
        }
    }

    fn frame(&mut self, now: f64, surface: &mut impl RenderSurface) {
        self.release_due_events(now);

        let mut reinitialized = false;
        while let Some(event) = self.bus.pop() {
            match event {
                HostEvent::PrimaryAction => {
                    self.pauses += 1;
                    self.driver.pause();
                }
                HostEvent::Resize { width, height } => {
                    self.restarts += 1;
                    surface.resize(ViewportSize::new(width, height));
                    self.driver.restart(surface.size(), now);
                    reinitialized = true;
                }
            }
        }

        if self.driver.state() == DriverState::Idle {
            self.driver.start(surface.size(), now);
            reinitialized = true;
        }

        // A fresh field waits for the next frame, as after a page-level restart
        if reinitialized {
            return;
        }

        self.driver.tick(now, surface);
    }

    pub fn report(&self) -> LoopReport {
        let field = self.driver.field();
        LoopReport {
            frames: self.driver.frames(),
            state: self.driver.state(),
            settled: self.driver.is_settled(),
            particle_count: field.len(),
            settled_particles: field.completed_count(),
            last_timestamp_ms: self.last_timestamp_ms,
            restarts: self.restarts,
            pauses: self.pauses,
        }
    }
}
