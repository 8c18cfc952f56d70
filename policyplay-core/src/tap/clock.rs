use super::{TapEffect, Timer};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Deterministic timer queue for replaying a session without a browser.
#[derive(Debug, Default, Clone)]
pub struct VirtualClock {
    now_ms: u64,
    seq: u64,
    queue: BinaryHeap<Reverse<(u64, u64, Timer)>>,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn schedule(&mut self, timer: Timer, delay_ms: u64) {
        let due = self.now_ms.saturating_add(delay_ms);
        self.seq += 1;
        self.queue.push(Reverse((due, self.seq, timer)));
    }

    /// Queue every `Schedule` effect and hand back the rest in order.
    pub fn absorb(&mut self, effects: Vec<TapEffect>) -> Vec<TapEffect> {
        let mut rest = Vec::new();
        for effect in effects {
            match effect {
                TapEffect::Schedule { timer, delay_ms } => self.schedule(timer, delay_ms),
                other => rest.push(other),
            }
        }
        rest
    }

    /// Due time of the earliest queued timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse((due, _, _))| *due)
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to
    /// its due time. With nothing due, the clock moves to `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Timer> {
        match self.next_due() {
            Some(due) if due <= until_ms => {
                let Reverse((due, _, timer)) = self.queue.pop()?;
                self.now_ms = self.now_ms.max(due);
                Some(timer)
            }
            _ => {
                self.now_ms = self.now_ms.max(until_ms);
                None
            }
        }
    }

    /// Pop the earliest timer regardless of when it is due.
    pub fn pop_next(&mut self) -> Option<Timer> {
        let due = self.next_due()?;
        self.pop_due(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tap::TimerKind;

    const fn timer(kind: TimerKind) -> Timer {
        Timer { epoch: 1, kind }
    }

    #[test]
    fn pops_in_due_order_then_insertion_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(timer(TimerKind::Advance), 300);
        clock.schedule(timer(TimerKind::SpawnBall(0)), 0);
        clock.schedule(timer(TimerKind::ClearBalls), 300);

        assert_eq!(clock.pop_next().map(|t| t.kind), Some(TimerKind::SpawnBall(0)));
        assert_eq!(clock.now_ms(), 0);
        assert!(clock.pop_due(100).is_none());
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.pop_next().map(|t| t.kind), Some(TimerKind::Advance));
        assert_eq!(clock.pop_next().map(|t| t.kind), Some(TimerKind::ClearBalls));
        assert_eq!(clock.now_ms(), 300);
        assert!(clock.pop_next().is_none());
    }
}
