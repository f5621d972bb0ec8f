// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pawpoint_core::NotifierConfig;
use pawpoint_notifier::{FixedJitter, Jitter, RandomJitter, RotatingNotifier, TimerEvent, TimerQueue};
use pawpoint_test_utils::fixtures::fluffy_and_max;
use pawpoint_test_utils::{RecordingSurface, SequenceJitter};
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_schedule_next_delay_stays_in_range() {
    // Arrange
    let mut notifier = RotatingNotifier::initialize(
        fluffy_and_max(),
        Some(RecordingSurface::new()),
        TimerQueue::new(),
        RandomJitter::seeded(0x5eed),
        NotifierConfig::default(),
    )
    .unwrap();

    // Act & Assert
    for _ in 0..1000 {
        let delay = notifier.schedule_next();
        assert!(delay >= ms(4000), "{delay:?} below range");
        assert!(delay < ms(6000), "{delay:?} above range");
    }
    assert_eq!(notifier.scheduler().count(TimerEvent::Rotate), 1);
}

#[test]
fn test_random_jitter_covers_the_range() {
    let mut jitter = RandomJitter::seeded(7);

    let samples: Vec<Duration> = (0..1000).map(|_| jitter.interval(ms(4000), ms(6000))).collect();

    assert!(samples.iter().all(|d| (ms(4000)..ms(6000)).contains(d)));
    assert!(samples.iter().any(|d| *d < ms(4500)));
    assert!(samples.iter().any(|d| *d >= ms(5500)));
}

#[test]
fn test_empty_range_returns_min() {
    let mut jitter = RandomJitter::seeded(1);

    assert_eq!(jitter.interval(ms(4000), ms(4000)), ms(4000));
    assert_eq!(jitter.interval(ms(4000), ms(3000)), ms(4000));
}

#[test]
fn test_fixed_jitter_clamps_into_range() {
    assert_eq!(FixedJitter::new(ms(5000)).interval(ms(4000), ms(6000)), ms(5000));
    assert_eq!(FixedJitter::new(ms(100)).interval(ms(4000), ms(6000)), ms(4000));
    assert_eq!(FixedJitter::new(ms(9000)).interval(ms(4000), ms(6000)), ms(5999));
}

#[test]
fn test_sequence_jitter_drives_rotation_deadlines() {
    // Arrange
    let mut notifier = RotatingNotifier::initialize(
        fluffy_and_max(),
        Some(RecordingSurface::new()),
        TimerQueue::new(),
        SequenceJitter::from_millis(&[4000, 5999]),
        NotifierConfig::default(),
    )
    .unwrap();

    // Act
    notifier.run_until(ms(3000));
    let first = notifier.rotation_timer().unwrap();
    let first_deadline = notifier.scheduler().deadline_of(first);
    notifier.run_until(ms(7000));
    let second = notifier.rotation_timer().unwrap();

    // Assert
    assert_eq!(first_deadline, Some(ms(7000)));
    assert_eq!(notifier.scheduler().deadline_of(second), Some(ms(12_999)));
}
