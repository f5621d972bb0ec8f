// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::time::Duration;

/// Identifies one armed timer.
///
/// Handles are unique per scheduler and increase in arming order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// What the notifier should do when a timer fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Start the next rotation cycle.
    Rotate,
    /// End of the exit transition: swap the content in.
    Swap,
    /// End of the entrance transition: commit the new index.
    Settle,
    /// End of the hover grace period.
    HoverResume,
}

/// One-shot timers with cancellation.
///
/// Implementations never invoke the notifier themselves; whoever owns the
/// scheduler reports expiries back through
/// [`RotatingNotifier::fire`](crate::RotatingNotifier::fire).
pub trait Scheduler {
    /// Arm a timer that fires `event` after `delay`.
    fn arm(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Disarm a timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn arm(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        (**self).arm(delay, event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }
}
