// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Pawpoint widgets.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `RecordingSurface`
//!
//! A [`DisplaySurface`](pawpoint_notifier::DisplaySurface) that records every
//! call. It is a cheap handle over shared state: clone it before handing it
//! to a notifier and keep the clone for assertions and for simulating pointer
//! events.
//!
//! ```rust
//! use pawpoint_test_utils::{fixtures, RecordingSurface, SurfaceEvent};
//! use std::time::Duration;
//!
//! let surface = RecordingSurface::new();
//! let mut notifier = fixtures::notifier_with(fixtures::fluffy_and_max(), surface.clone());
//!
//! notifier.run_for(Duration::from_millis(3000));
//! assert!(surface.events().contains(&SurfaceEvent::Exiting));
//! ```
//!
//! ## Jitter sources
//!
//! - `SequenceJitter` cycles through a list of delays
//!
//! ## Stores
//!
//! - `FailingStore` rejects every write, for exercising storage failure paths

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod failing_store;
pub mod fixtures;
pub mod recording_surface;
pub mod sequence_jitter;

pub use failing_store::FailingStore;
pub use recording_surface::{RecordingSurface, SurfaceEvent};
pub use sequence_jitter::SequenceJitter;
