// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::scheduler::{Scheduler, TimerEvent, TimerHandle};
use core::time::Duration;
use std::collections::BTreeMap;

/// Virtual-clock timer queue.
///
/// Time is a [`Duration`] since the queue was created and only moves when the
/// owner calls [`pop_due`](Self::pop_due) or [`advance_to`](Self::advance_to).
/// Popping a timer moves the clock to its deadline, so timers armed from the
/// firing callback are measured from the moment it fired. Timers sharing a
/// deadline fire in arming order.
///
/// ```
/// use pawpoint_notifier::{Scheduler, TimerEvent, TimerQueue};
/// use std::time::Duration;
///
/// let mut queue = TimerQueue::new();
/// let swap = queue.arm(Duration::from_millis(400), TimerEvent::Swap);
/// assert_eq!(queue.pop_due(Duration::from_millis(399)), None);
/// assert_eq!(queue.pop_due(Duration::from_millis(400)), Some((swap, TimerEvent::Swap)));
/// assert_eq!(queue.now(), Duration::from_millis(400));
/// ```
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerHandle), TimerEvent>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the earliest armed timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Remove and return the earliest timer if it is due at `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, TimerEvent)> {
        let (&(deadline, handle), _) = self.pending.first_key_value()?;
        if deadline > until {
            return None;
        }
        let event = self.pending.remove(&(deadline, handle))?;
        self.now = self.now.max(deadline);
        Some((handle, event))
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, instant: Duration) {
        self.now = self.now.max(instant);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of armed timers carrying `event`.
    pub fn count(&self, event: TimerEvent) -> usize {
        self.pending.values().filter(|&&armed| armed == event).count()
    }

    pub fn contains(&self, handle: TimerHandle) -> bool {
        self.deadline_of(handle).is_some()
    }

    pub fn deadline_of(&self, handle: TimerHandle) -> Option<Duration> {
        self.pending
            .keys()
            .find(|&&(_, armed)| armed == handle)
            .map(|&(deadline, _)| deadline)
    }
}

impl Scheduler for TimerQueue {
    fn arm(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;
        self.pending.insert((self.now + delay, handle), event);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(_, armed), _| armed != handle);
    }
}
