// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Rotating "recent booking" notification widget.
//!
//! The widget is an explicit three-state machine ([`Phase`]) that cycles a
//! fixed list of [`BookingRecord`](pawpoint_core::BookingRecord)s through a
//! [`DisplaySurface`]. All time is expressed through a [`Scheduler`]: the
//! notifier arms and cancels one-shot timers and is told when they fire.
//!
//! - [`TimerQueue`] is a virtual-clock scheduler, used directly by tests and
//!   by the async [`NotifierDriver`], which maps it onto a real
//!   [`Timer`](pawpoint_runtime::Timer).
//! - [`Jitter`] supplies the randomized rotation interval.
//!
//! # Example
//!
//! ```
//! use pawpoint_core::{BookingRecord, NotifierConfig};
//! use pawpoint_notifier::{DisplaySurface, FixedJitter, Phase, PointerListener, RotatingNotifier, TimerQueue};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Card(String);
//!
//! impl DisplaySurface for Card {
//!     fn apply_exiting(&mut self) {}
//!     fn apply_entering(&mut self) {}
//!     fn clear_transition(&mut self) {}
//!     fn set_content(&mut self, primary: &str, _time: &str) {
//!         self.0 = primary.to_string();
//!     }
//!     fn subscribe_pointer(&mut self, _listener: PointerListener) {}
//! }
//!
//! let records = vec![BookingRecord::new("Fluffy", "Groom"), BookingRecord::new("Max", "Trim")];
//! let mut notifier = RotatingNotifier::initialize(
//!     records,
//!     Some(Card::default()),
//!     TimerQueue::new(),
//!     FixedJitter::new(Duration::from_millis(5000)),
//!     NotifierConfig::default(),
//! )
//! .unwrap();
//!
//! notifier.run_for(Duration::from_millis(3400));
//! assert_eq!(notifier.surface().0, "Max");
//! assert_eq!(notifier.phase(), Phase::Entering);
//! ```

#[macro_use]
mod logging;

pub mod display_surface;
pub mod driver;
pub mod jitter;
pub mod phase;
pub mod rotating_notifier;
pub mod scheduler;
pub mod timer_queue;

pub use self::display_surface::{DisplaySurface, PointerEvent, PointerListener};
pub use self::driver::NotifierDriver;
pub use self::jitter::{FixedJitter, Jitter, RandomJitter};
pub use self::phase::Phase;
pub use self::rotating_notifier::RotatingNotifier;
pub use self::scheduler::{Scheduler, TimerEvent, TimerHandle};
pub use self::timer_queue::TimerQueue;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DisplaySurface, Jitter, NotifierDriver, Phase, PointerEvent, RotatingNotifier, Scheduler,
        TimerQueue,
    };
}
