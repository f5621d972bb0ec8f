// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the randomized delay between rotations.
pub trait Jitter {
    /// A delay `d` with `min <= d < max`, or `min` when the range is empty.
    fn interval(&mut self, min: Duration, max: Duration) -> Duration;
}

/// Uniform jitter in whole milliseconds.
#[derive(Clone, Debug)]
pub struct RandomJitter<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<SmallRng> {
    /// Deterministic generator, handy where no entropy source exists
    /// (seed from `Date.now()` in the browser).
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn interval(&mut self, min: Duration, max: Duration) -> Duration {
        let low = min.as_millis() as u64;
        let high = max.as_millis() as u64;
        if max <= min || high <= low {
            return min;
        }
        Duration::from_millis(self.rng.random_range(low..high)).max(min)
    }
}

/// Always the same delay, clamped into the requested range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedJitter {
    delay: Duration,
}

impl FixedJitter {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Jitter for FixedJitter {
    fn interval(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min || self.delay < min {
            return min;
        }
        if self.delay >= max {
            return max - Duration::from_millis(1).min(max - min);
        }
        self.delay
    }
}
