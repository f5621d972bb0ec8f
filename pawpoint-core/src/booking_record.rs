// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// A sample "recent booking" shown on the notification card.
///
/// `primary` is the human-readable label (who or what was booked) and `time`
/// the human-readable schedule string. Records are never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BookingRecord {
    primary: String,
    time: String,
}

impl BookingRecord {
    pub fn new(primary: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            time: time.into(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn time(&self) -> &str {
        &self.time
    }
}

impl fmt::Display for BookingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} · {}", self.primary, self.time)
    }
}

impl<P, T> From<(P, T)> for BookingRecord
where
    P: Into<String>,
    T: Into<String>,
{
    fn from((primary, time): (P, T)) -> Self {
        Self::new(primary, time)
    }
}
