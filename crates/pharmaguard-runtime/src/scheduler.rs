//! Frame schedulers: where frame timestamps come from

use std::time::{Duration, Instant};

/// Shortest frame interval a scheduler will hand out; zero or NaN would stall time
pub const MIN_FRAME_INTERVAL_MS: f64 = 0.1;

/// Longest wall-clock interval `RealtimeScheduler` will sleep for
pub const MAX_REALTIME_INTERVAL_MS: f64 = 60_000.0;

/// Hands out frame timestamps, one per request.
///
/// Requests are single-shot: the loop asks again after every tick it wants to
/// continue, and stops asking once the animation halts.
pub trait FrameScheduler {
    /// Wait for the next frame and return its timestamp in milliseconds
    fn request_frame(&mut self) -> f64;
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> f64 {
        (**self).request_frame()
    }
}

/// Simulated display at a fixed refresh interval. No real waiting happens.
pub struct FixedIntervalScheduler {
    now_ms: f64,
    interval_ms: f64,
    /// (at_ms, extra_ms): the first frame due at or after `at_ms` arrives `extra_ms` late
    stalls: Vec<(f64, f64)>,
}

impl FixedIntervalScheduler {
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            interval_ms: interval_ms.max(MIN_FRAME_INTERVAL_MS),
            stalls: Vec::new(),
        }
    }

    /// 60Hz starting at t=0
    pub fn sixty_hz() -> Self {
        Self::new(0.0, 1000.0 / 60.0)
    }

    /// Delay one frame, e.g. to mimic a backgrounded tab
    pub fn with_stall(mut self, at_ms: f64, extra_ms: f64) -> Self {
        self.stalls.push((at_ms, extra_ms.max(0.0)));
        self.stalls.sort_by(|a, b| a.0.total_cmp(&b.0));
        self
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

impl FrameScheduler for FixedIntervalScheduler {
    fn request_frame(&mut self) -> f64 {
        let mut next = self.now_ms + self.interval_ms;
        if let Some(&(at_ms, extra_ms)) = self.stalls.first() {
            if next >= at_ms {
                next += extra_ms;
                self.stalls.remove(0);
            }
        }
        self.now_ms = next;
        next
    }
}

/// Wall-clock frames paced by sleeping to the interval
pub struct RealtimeScheduler {
    origin: Instant,
    interval: Duration,
    next_deadline: Instant,
}

impl RealtimeScheduler {
    pub fn new(interval_ms: f64) -> Self {
        let origin = Instant::now();
        let interval_ms = interval_ms
            .max(MIN_FRAME_INTERVAL_MS)
            .min(MAX_REALTIME_INTERVAL_MS);
        let interval = Duration::from_secs_f64(interval_ms / 1000.0);
        Self {
            origin,
            interval,
            next_deadline: origin + interval,
        }
    }
}

impl FrameScheduler for RealtimeScheduler {
    fn request_frame(&mut self) -> f64 {
        let now = Instant::now();
        if self.next_deadline > now {
            std::thread::sleep(self.next_deadline - now);
        }
        let frame_time = Instant::now();
        // Missed deadlines are not caught up; the next frame is one interval out
        self.next_deadline = frame_time.max(self.next_deadline) + self.interval;
        frame_time.duration_since(self.origin).as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_interval_advances() {
        let mut s = FixedIntervalScheduler::new(100.0, 10.0);
        assert_eq!(s.request_frame(), 110.0);
        assert_eq!(s.request_frame(), 120.0);
        assert_eq!(s.now_ms(), 120.0);
    }

    #[test]
    fn degenerate_interval_still_advances() {
        for interval in [0.0, -5.0, f64::NAN] {
            let mut s = FixedIntervalScheduler::new(0.0, interval);
            let first = s.request_frame();
            let second = s.request_frame();
            assert_eq!(first, MIN_FRAME_INTERVAL_MS);
            assert!(second > first);
        }
    }

    #[test]
    fn stall_delays_one_frame() {
        let mut s = FixedIntervalScheduler::new(0.0, 10.0).with_stall(25.0, 500.0);
        assert_eq!(s.request_frame(), 10.0);
        assert_eq!(s.request_frame(), 20.0);
        assert_eq!(s.request_frame(), 530.0);
        assert_eq!(s.request_frame(), 540.0);
    }

    #[test]
    fn boxed_scheduler_delegates() {
        let mut s: Box<dyn FrameScheduler> = Box::new(FixedIntervalScheduler::new(0.0, 5.0));
        assert_eq!(s.request_frame(), 5.0);
    }

    #[test]
    fn realtime_accepts_degenerate_interval() {
        let mut s = RealtimeScheduler::new(f64::NAN);
        let a = s.request_frame();
        assert!(s.request_frame() > a);
    }

    #[test]
    fn realtime_is_monotonic() {
        let mut s = RealtimeScheduler::new(1.0);
        let a = s.request_frame();
        let b = s.request_frame();
        assert!(b > a);
        assert!(a >= 0.0);
    }
}
