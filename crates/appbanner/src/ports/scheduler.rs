//! Timer Port
//!
//! Single-shot, cancellable delayed events on the page's one event loop.

use std::time::Duration;

/// Opaque handle for a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// What a timer delivers back to the view when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second of the warning overlay countdown elapsed
    CountdownTick,
    /// Time for the next auto-reload
    AutoReload,
    /// The "copied" indicator for this id expires
    ClearCopied(u64),
}

/// Cooperative timer service
pub trait Scheduler {
    /// Deliver `event` once after `delay`
    fn schedule(&self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Drop a pending timer. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}
