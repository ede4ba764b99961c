//! Simulated-time Scheduler
//!
//! Nothing fires on its own: the owner moves the clock and feeds the due
//! events back to the view. Clones share the same timer queue.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::ports::{Scheduler, TimerEvent, TimerHandle};

#[derive(Debug)]
struct PendingTimer {
    handle: TimerHandle,
    due: Duration,
    event: TimerEvent,
}

#[derive(Debug, Default)]
struct Inner {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<Inner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.lock().pending.iter().any(|t| t.handle == handle)
    }

    /// Remove and return the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's due time, so timers scheduled while
    /// handling the event are measured from the moment it fired.
    pub fn pop_due(&self, until: Duration) -> Option<TimerEvent> {
        let mut inner = self.lock();

        let index = inner
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;

        let timer = inner.pending.remove(index);
        if timer.due > inner.now {
            inner.now = timer.due;
        }
        Some(timer.event)
    }

    /// Move the clock forward to `until` without firing anything
    pub fn advance_to(&self, until: Duration) {
        let mut inner = self.lock();
        if until > inner.now {
            inner.now = until;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let mut inner = self.lock();
        inner.next_id += 1;
        let handle = TimerHandle(inner.next_id);
        let due = inner.now + delay;
        inner.pending.push(PendingTimer { handle, due, event });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.lock().pending.retain(|t| t.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_secs(3), TimerEvent::AutoReload);
        scheduler.schedule(Duration::from_secs(1), TimerEvent::CountdownTick);

        let until = Duration::from_secs(5);
        assert_eq!(scheduler.pop_due(until), Some(TimerEvent::CountdownTick));
        assert_eq!(scheduler.now(), Duration::from_secs(1));
        assert_eq!(scheduler.pop_due(until), Some(TimerEvent::AutoReload));
        assert_eq!(scheduler.now(), Duration::from_secs(3));
        assert_eq!(scheduler.pop_due(until), None);

        scheduler.advance_to(until);
        assert_eq!(scheduler.now(), until);
    }

    #[test]
    fn test_not_due_yet() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_secs(2), TimerEvent::ClearCopied(9));

        assert_eq!(scheduler.pop_due(Duration::from_millis(1999)), None);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(
            scheduler.pop_due(Duration::from_secs(2)),
            Some(TimerEvent::ClearCopied(9))
        );
    }

    #[test]
    fn test_cancel() {
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Duration::from_secs(1), TimerEvent::CountdownTick);
        assert!(scheduler.is_pending(handle));

        scheduler.cancel(handle);
        assert!(!scheduler.is_pending(handle));
        assert_eq!(scheduler.pop_due(Duration::from_secs(10)), None);

        // cancelling twice is harmless
        scheduler.cancel(handle);
    }
}
