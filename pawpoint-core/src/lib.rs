// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Shared value types for the Pawpoint landing page.
//!
//! - [`BookingRecord`] is the immutable sample shown by the rotating notifier.
//! - [`Industry`] selects one of the fixed record catalogs.
//! - [`LandingConfig`] gathers the tunables of every page widget and is read
//!   from TOML by the host.
pub mod booking_record;
pub mod config;
pub mod industry;

pub use self::booking_record::BookingRecord;
pub use self::config::{LandingConfig, NotifierConfig, WaitlistConfig};
pub use self::industry::Industry;
