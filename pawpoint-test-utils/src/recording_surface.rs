// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use pawpoint_core::BookingRecord;
use pawpoint_notifier::{DisplaySurface, PointerEvent, PointerListener};
use parking_lot::Mutex;
use std::sync::Arc;

/// One call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    Exiting,
    Entering,
    Cleared,
    Content(BookingRecord),
}

#[derive(Default)]
struct Inner {
    events: Vec<SurfaceEvent>,
    content: Option<BookingRecord>,
    exiting: bool,
    entering: bool,
    listener: Option<PointerListener>,
}

/// Display surface that records every call for later assertions.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.inner.lock().events.clone()
    }

    /// Drain the recorded events.
    pub fn take_events(&self) -> Vec<SurfaceEvent> {
        core::mem::take(&mut self.inner.lock().events)
    }

    /// Records passed to `set_content`, in order.
    pub fn content_changes(&self) -> Vec<BookingRecord> {
        self.inner
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Content(record) => Some(record.clone()),
                _ => None,
            })
            .collect()
    }

    /// What the card currently shows.
    pub fn content(&self) -> Option<BookingRecord> {
        self.inner.lock().content.clone()
    }

    pub fn is_exiting(&self) -> bool {
        self.inner.lock().exiting
    }

    pub fn is_entering(&self) -> bool {
        self.inner.lock().entering
    }

    pub fn has_pointer_listener(&self) -> bool {
        self.inner.lock().listener.is_some()
    }

    pub fn pointer_enter(&self) {
        self.dispatch(PointerEvent::Enter);
    }

    pub fn pointer_leave(&self) {
        self.dispatch(PointerEvent::Leave);
    }

    /// Drop the registered pointer listener, as when the card is removed.
    pub fn detach_pointer(&self) {
        self.inner.lock().listener = None;
    }

    fn dispatch(&self, event: PointerEvent) {
        // Call outside the lock; the listener may reach back into the surface.
        let listener = self.inner.lock().listener.take();
        if let Some(mut listener) = listener {
            listener(event);
            let mut inner = self.inner.lock();
            if inner.listener.is_none() {
                inner.listener = Some(listener);
            }
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn apply_exiting(&mut self) {
        let mut inner = self.inner.lock();
        inner.exiting = true;
        inner.events.push(SurfaceEvent::Exiting);
    }

    fn apply_entering(&mut self) {
        let mut inner = self.inner.lock();
        inner.entering = true;
        inner.events.push(SurfaceEvent::Entering);
    }

    fn clear_transition(&mut self) {
        let mut inner = self.inner.lock();
        inner.exiting = false;
        inner.entering = false;
        inner.events.push(SurfaceEvent::Cleared);
    }

    fn set_content(&mut self, primary: &str, time: &str) {
        let record = BookingRecord::new(primary, time);
        let mut inner = self.inner.lock();
        inner.content = Some(record.clone());
        inner.events.push(SurfaceEvent::Content(record));
    }

    fn subscribe_pointer(&mut self, listener: PointerListener) {
        self.inner.lock().listener = Some(listener);
    }
}

impl fmt::Debug for RecordingSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("RecordingSurface")
            .field("events", &inner.events)
            .field("content", &inner.content)
            .field("listener", &inner.listener.is_some())
            .finish()
    }
}
