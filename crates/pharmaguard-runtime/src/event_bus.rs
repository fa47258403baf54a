//! FIFO of host events waiting for the next tick boundary

use crate::event::HostEvent;
use std::collections::VecDeque;

/// Host adapters push as events arrive; the frame loop pops them between ticks.
///
/// Consecutive resizes collapse into the latest one, since only the final
/// viewport matters once the field is rebuilt.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: VecDeque<HostEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        let supersedes = matches!(event, HostEvent::Resize { .. })
            && matches!(self.queue.back(), Some(HostEvent::Resize { .. }));
        if supersedes {
            self.queue.pop_back();
        }
        self.queue.push_back(event);
    }

    /// Oldest pending event
    pub fn pop(&mut self) -> Option<HostEvent> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
