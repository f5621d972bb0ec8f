// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, Datelike, TimeZone};

/// Year written into the footer copyright stamp.
pub fn footer_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}
