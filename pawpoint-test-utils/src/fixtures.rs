// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::RecordingSurface;
use core::time::Duration;
use pawpoint_core::{BookingRecord, NotifierConfig};
use pawpoint_notifier::{FixedJitter, RotatingNotifier, TimerQueue};

/// Notifier over a virtual clock with a recording surface and a fixed jitter.
pub type TestNotifier = RotatingNotifier<RecordingSurface, TimerQueue, FixedJitter>;

/// Fixed rotation interval used by [`notifier_with`].
pub const FIXED_INTERVAL: Duration = Duration::from_millis(5000);

pub fn fluffy_groom() -> BookingRecord {
    BookingRecord::new("Fluffy", "Groom")
}

pub fn max_trim() -> BookingRecord {
    BookingRecord::new("Max", "Trim")
}

pub fn rex_bath() -> BookingRecord {
    BookingRecord::new("Rex", "Bath")
}

pub fn fluffy_and_max() -> Vec<BookingRecord> {
    vec![fluffy_groom(), max_trim()]
}

pub fn three_records() -> Vec<BookingRecord> {
    vec![fluffy_groom(), max_trim(), rex_bath()]
}

/// Build a notifier with default timings and a 5000 ms rotation interval.
///
/// # Panics
/// Panics if `records` is empty.
pub fn notifier_with(records: Vec<BookingRecord>, surface: RecordingSurface) -> TestNotifier {
    notifier_with_config(records, surface, NotifierConfig::default())
}

/// # Panics
/// Panics if `records` is empty.
pub fn notifier_with_config(
    records: Vec<BookingRecord>,
    surface: RecordingSurface,
    config: NotifierConfig,
) -> TestNotifier {
    RotatingNotifier::initialize(
        records,
        Some(surface),
        TimerQueue::new(),
        FixedJitter::new(FIXED_INTERVAL),
        config,
    )
    .expect("fixture notifier needs records and a surface")
}

/// Default timings with the legacy hover behaviour (hover does not cancel an
/// armed rotation).
pub fn legacy_hover_config() -> NotifierConfig {
    NotifierConfig {
        pause_on_hover: false,
        ..NotifierConfig::default()
    }
}
