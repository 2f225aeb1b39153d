//! Scheduling primitives shared by the cores.
//!
//! The cores never own a real timer. The presentation layer measures frame
//! time and feeds it into `tick(elapsed_ms)`; the types here turn that elapsed
//! time into discrete steps and delayed continuations.
//!
//! - [`StepClock`]: fixed-period cadence (snake moves, Tetris gravity).
//! - [`TimerQueue`]: one-shot continuations (the Tic-Tac-Toe bot reply).
//! - [`Epoch`]: game generation. Every reset bumps it; a continuation tagged
//!   with an older epoch is dropped instead of touching the new game.

/// Game generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Epoch(u32);

impl Epoch {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The generation that supersedes this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Accumulates elapsed time and reports how many whole periods passed.
#[derive(Debug, Clone)]
pub struct StepClock {
    period_ms: u32,
    accumulated_ms: u32,
}

impl StepClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Time accumulated towards the next step.
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Add `elapsed_ms` and return the number of steps now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms as u64 + elapsed_ms as u64;
        let steps = total / self.period_ms as u64;
        self.accumulated_ms = (total % self.period_ms as u64) as u32;
        steps.min(u32::MAX as u64) as u32
    }

    /// Drop any partial period (used on reset).
    pub fn rewind(&mut self) {
        self.accumulated_ms = 0;
    }
}

/// A continuation waiting in a [`TimerQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<E> {
    pub epoch: Epoch,
    pub remaining_ms: u32,
    pub event: E,
}

/// Delayed one-shot events tagged with the epoch that scheduled them.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    pending: Vec<Scheduled<E>>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Queue `event` to fire after `delay_ms`.
    pub fn schedule(&mut self, epoch: Epoch, delay_ms: u32, event: E) {
        self.pending.push(Scheduled {
            epoch,
            remaining_ms: delay_ms,
            event,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if anything scheduled by `epoch` is still waiting.
    pub fn has_pending_for(&self, epoch: Epoch) -> bool {
        self.pending.iter().any(|s| s.epoch == epoch)
    }

    /// Advance time and return the due events that belong to `current`,
    /// in scheduling order.
    ///
    /// Due events from other epochs are discarded.
    pub fn advance(&mut self, elapsed_ms: u32, current: Epoch) -> Vec<E> {
        let mut due = Vec::new();
        let mut waiting = Vec::with_capacity(self.pending.len());

        for mut entry in self.pending.drain(..) {
            entry.remaining_ms = entry.remaining_ms.saturating_sub(elapsed_ms);
            if entry.remaining_ms > 0 {
                waiting.push(entry);
            } else if entry.epoch == current {
                due.push(entry.event);
            } else {
                log::debug!(
                    "dropping stale continuation from epoch {} (current {})",
                    entry.epoch.value(),
                    current.value()
                );
            }
        }

        self.pending = waiting;
        due
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_next() {
        let e = Epoch::default();
        assert_eq!(e.value(), 0);
        assert_eq!(e.next().value(), 1);
        assert_eq!(Epoch::new(u32::MAX).next().value(), 0);
    }

    #[test]
    fn test_step_clock_accumulates() {
        let mut clock = StepClock::new(300);
        assert_eq!(clock.advance(100), 0);
        assert_eq!(clock.advance(199), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.accumulated_ms(), 0);
    }

    #[test]
    fn test_step_clock_multiple_steps_keep_remainder() {
        let mut clock = StepClock::new(500);
        assert_eq!(clock.advance(1250), 2);
        assert_eq!(clock.accumulated_ms(), 250);
        clock.rewind();
        assert_eq!(clock.accumulated_ms(), 0);
        assert_eq!(clock.advance(499), 0);
    }

    #[test]
    fn test_step_clock_zero_period_is_clamped() {
        let mut clock = StepClock::new(0);
        assert_eq!(clock.period_ms(), 1);
        assert_eq!(clock.advance(3), 3);
    }

    #[test]
    fn test_timer_queue_fires_after_delay() {
        let mut q = TimerQueue::new();
        let epoch = Epoch::new(3);
        q.schedule(epoch, 500, "bot");

        assert!(q.advance(499, epoch).is_empty());
        assert!(q.has_pending_for(epoch));
        assert_eq!(q.advance(1, epoch), vec!["bot"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_timer_queue_drops_stale_epoch() {
        let mut q = TimerQueue::new();
        let old = Epoch::new(0);
        q.schedule(old, 100, 1);
        q.schedule(old.next(), 100, 2);

        assert!(q.has_pending_for(old));
        assert_eq!(q.advance(100, old.next()), vec![2]);
        assert!(q.is_empty());
        assert!(!q.has_pending_for(old));
    }

    #[test]
    fn test_timer_queue_preserves_order() {
        let mut q = TimerQueue::new();
        let epoch = Epoch::default();
        q.schedule(epoch, 10, 'a');
        q.schedule(epoch, 30, 'c');
        q.schedule(epoch, 5, 'b');
        assert_eq!(q.len(), 3);

        assert_eq!(q.advance(10, epoch), vec!['a', 'b']);
        assert_eq!(q.advance(100, epoch), vec!['c']);
    }
}
