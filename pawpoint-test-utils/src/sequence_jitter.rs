// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use pawpoint_notifier::Jitter;

/// Jitter that replays a fixed list of delays, wrapping around at the end.
///
/// Delays are returned as given, without clamping, so tests can also feed
/// out-of-range values on purpose.
#[derive(Clone, Debug)]
pub struct SequenceJitter {
    delays: Vec<Duration>,
    position: usize,
}

impl SequenceJitter {
    /// # Panics
    /// Panics if `delays` is empty.
    pub fn new(delays: impl IntoIterator<Item = Duration>) -> Self {
        let delays: Vec<Duration> = delays.into_iter().collect();
        assert!(!delays.is_empty(), "SequenceJitter needs at least one delay");
        Self {
            delays,
            position: 0,
        }
    }

    pub fn from_millis(delays: &[u64]) -> Self {
        Self::new(delays.iter().map(|&ms| Duration::from_millis(ms)))
    }
}

impl Jitter for SequenceJitter {
    fn interval(&mut self, _min: Duration, _max: Duration) -> Duration {
        let delay = self.delays[self.position % self.delays.len()];
        self.position += 1;
        delay
    }
}
