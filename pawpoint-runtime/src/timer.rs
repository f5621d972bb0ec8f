// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Source of sleeps and a monotonic clock for the notifier driver.
///
/// The driver only ever measures elapsed time against an origin taken with
/// [`Timer::now`], so an `Instant` needs nothing beyond ordering and duration
/// arithmetic.
pub trait Timer: Clone + Debug + 'static {
    type Sleep: Future<Output = ()>;

    type Instant: Copy
        + Debug
        + Ord
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// Time elapsed since `origin`, saturating at zero.
    fn elapsed_since(&self, origin: Self::Instant) -> Duration {
        let now = self.now();
        if now < origin {
            Duration::ZERO
        } else {
            now - origin
        }
    }
}
