// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Capability interface between the notifier and whatever renders the card.

/// Pointer transitions reported by the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Callback a surface invokes for every pointer transition.
pub type PointerListener = Box<dyn FnMut(PointerEvent) + Send + 'static>;

/// Rendering abstraction for the booking card.
///
/// The notifier only toggles transition states and replaces the two text
/// fields; layout and styling stay with the implementor. In the browser the
/// transition methods map onto CSS classes.
pub trait DisplaySurface {
    /// Start the exit transition.
    fn apply_exiting(&mut self);

    /// Start the entrance transition.
    fn apply_entering(&mut self);

    /// Remove both transition states.
    fn clear_transition(&mut self);

    /// Replace the displayed label and schedule string.
    fn set_content(&mut self, primary: &str, time: &str);

    /// Register the listener for pointer enter/leave. A later call replaces
    /// the previous listener.
    fn subscribe_pointer(&mut self, listener: PointerListener);
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn apply_exiting(&mut self) {
        (**self).apply_exiting();
    }

    fn apply_entering(&mut self) {
        (**self).apply_entering();
    }

    fn clear_transition(&mut self) {
        (**self).clear_transition();
    }

    fn set_content(&mut self, primary: &str, time: &str) {
        (**self).set_content(primary, time);
    }

    fn subscribe_pointer(&mut self, listener: PointerListener) {
        (**self).subscribe_pointer(listener);
    }
}
