// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pawpoint_core::{Industry, NotifierConfig};
use pawpoint_notifier::{FixedJitter, Phase, RotatingNotifier, TimerEvent, TimerHandle, TimerQueue};
use pawpoint_test_utils::fixtures::{
    fluffy_and_max, fluffy_groom, max_trim, notifier_with, rex_bath, three_records,
};
use pawpoint_test_utils::{RecordingSurface, SurfaceEvent};
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_missing_surface_leaves_feature_inert() {
    // Arrange
    let mut queue = TimerQueue::new();

    // Act
    let inert = RotatingNotifier::<RecordingSurface, _, _>::initialize(
        fluffy_and_max(),
        None,
        &mut queue,
        FixedJitter::new(ms(5000)),
        NotifierConfig::default(),
    )
    .is_none();

    // Assert
    assert!(inert);
    assert!(queue.is_empty());
}

#[test]
fn test_empty_records_leave_feature_inert() {
    let surface = RecordingSurface::new();
    let mut queue = TimerQueue::new();

    let inert = RotatingNotifier::initialize(
        Vec::new(),
        Some(surface.clone()),
        &mut queue,
        FixedJitter::new(ms(5000)),
        NotifierConfig::default(),
    )
    .is_none();

    assert!(inert);
    assert!(queue.is_empty());
    assert!(surface.events().is_empty());
}

#[test]
fn test_initialize_renders_first_record_and_arms_first_rotation() {
    // Arrange
    let surface = RecordingSurface::new();

    // Act
    let notifier = notifier_with(fluffy_and_max(), surface.clone());

    // Assert
    assert_eq!(surface.content(), Some(fluffy_groom()));
    assert_eq!(notifier.phase(), Phase::Idle);
    assert_eq!(notifier.current_index(), 0);
    let rotation = notifier.rotation_timer().unwrap();
    assert_eq!(notifier.scheduler().deadline_of(rotation), Some(ms(3000)));
    assert_eq!(notifier.scheduler().len(), 1);
}

#[test]
fn test_first_rotation_waits_three_seconds() {
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(fluffy_and_max(), surface.clone());

    notifier.run_for(ms(2999));
    assert_eq!(notifier.phase(), Phase::Idle);

    notifier.run_for(ms(1));
    assert_eq!(notifier.phase(), Phase::Exiting);
    assert!(surface.is_exiting());
}

#[test]
fn test_advance_swaps_after_exit_and_commits_after_enter() {
    // Arrange
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(fluffy_and_max(), surface.clone());

    // Act
    assert!(notifier.advance());

    // Assert
    notifier.run_for(ms(399));
    assert_eq!(notifier.phase(), Phase::Exiting);
    assert_eq!(surface.content(), Some(fluffy_groom()));

    notifier.run_for(ms(1));
    assert_eq!(notifier.phase(), Phase::Entering);
    assert_eq!(surface.content(), Some(max_trim()));
    assert_eq!(notifier.current_index(), 0);

    notifier.run_for(ms(600));
    assert_eq!(notifier.phase(), Phase::Idle);
    assert_eq!(notifier.current_index(), 1);
    assert_eq!(notifier.current_record(), &max_trim());
}

#[test]
fn test_phase_sequence_and_single_content_change_per_cycle() {
    // Arrange
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(fluffy_and_max(), surface.clone());
    surface.take_events();

    // Act & Assert
    notifier.advance();
    assert_eq!(surface.take_events(), vec![SurfaceEvent::Exiting]);

    notifier.run_for(ms(400));
    assert_eq!(
        surface.take_events(),
        vec![
            SurfaceEvent::Content(max_trim()),
            SurfaceEvent::Cleared,
            SurfaceEvent::Entering,
        ]
    );

    notifier.run_for(ms(600));
    assert_eq!(surface.take_events(), vec![SurfaceEvent::Cleared]);
    assert!(!surface.is_exiting());
    assert!(!surface.is_entering());
}

#[test]
fn test_advance_is_ignored_while_animating() {
    // Arrange
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(three_records(), surface.clone());
    assert!(notifier.advance());
    let swap = notifier.animation_timer();

    // Act & Assert
    assert!(!notifier.advance());
    assert_eq!(notifier.animation_timer(), swap);
    assert_eq!(notifier.scheduler().count(TimerEvent::Swap), 1);
    assert_eq!(notifier.incoming_index(), Some(1));

    notifier.run_for(ms(400));
    assert_eq!(notifier.phase(), Phase::Entering);
    assert!(!notifier.advance());
    assert_eq!(notifier.scheduler().count(TimerEvent::Settle), 1);
    assert_eq!(notifier.current_index(), 0);

    notifier.run_for(ms(600));
    assert_eq!(notifier.current_index(), 1);
    assert_eq!(surface.content_changes().len(), 2);
}

#[test]
fn test_n_advances_wrap_around() {
    for n in 0..10 {
        // Arrange
        let surface = RecordingSurface::new();
        let mut notifier = notifier_with(three_records(), surface);

        // Act
        for _ in 0..n {
            assert!(notifier.advance());
            notifier.run_for(ms(1000));
        }

        // Assert
        assert_eq!(notifier.phase(), Phase::Idle);
        assert_eq!(notifier.current_index(), n % 3);
    }
}

#[test]
fn test_single_record_rotates_onto_itself() {
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(vec![rex_bath()], surface.clone());

    notifier.advance();
    notifier.run_for(ms(1000));

    assert_eq!(notifier.current_index(), 0);
    assert_eq!(surface.content_changes(), vec![rex_bath(), rex_bath()]);
}

#[test]
fn test_timer_driven_cycles_follow_jittered_interval() {
    // Arrange
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(three_records(), surface.clone());
    surface.take_events();

    // Act: rotations start at 3000, 8000 and 13000 with a fixed 5000 ms interval
    notifier.run_until(ms(3000 + 1000));
    assert_eq!(notifier.current_index(), 1);

    notifier.run_until(ms(7999));
    assert_eq!(notifier.phase(), Phase::Idle);

    notifier.run_until(ms(8000 + 1000));
    assert_eq!(notifier.current_index(), 2);

    notifier.run_until(ms(13000 + 1000));

    // Assert
    assert_eq!(notifier.current_index(), 0);
    assert_eq!(
        surface.content_changes(),
        vec![max_trim(), rex_bath(), fluffy_groom()]
    );
    assert_eq!(notifier.scheduler().count(TimerEvent::Rotate), 1);
}

#[test]
fn test_rotation_rearms_at_cycle_start() {
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(fluffy_and_max(), surface);

    notifier.run_until(ms(3000));

    let rotation = notifier.rotation_timer().unwrap();
    assert_eq!(notifier.scheduler().deadline_of(rotation), Some(ms(8000)));
    assert_eq!(notifier.scheduler().count(TimerEvent::Rotate), 1);
}

#[test]
fn test_manual_advance_restarts_rotation_after_settling() {
    // Arrange
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(fluffy_and_max(), surface);

    // Act
    notifier.advance();

    // Assert
    assert_eq!(notifier.rotation_timer(), None);
    notifier.run_for(ms(1000));
    let rotation = notifier.rotation_timer().unwrap();
    assert_eq!(notifier.scheduler().deadline_of(rotation), Some(ms(6000)));
}

#[test]
fn test_stale_and_foreign_timers_are_ignored() {
    // Arrange
    let surface = RecordingSurface::new();
    let mut notifier = notifier_with(fluffy_and_max(), surface.clone());
    surface.take_events();

    // Act
    notifier.fire(TimerHandle::new(999), TimerEvent::Rotate);
    notifier.fire(TimerHandle::new(999), TimerEvent::Swap);
    notifier.fire(TimerHandle::new(999), TimerEvent::HoverResume);

    // Assert
    assert_eq!(notifier.phase(), Phase::Idle);
    assert!(surface.events().is_empty());
    assert!(notifier.rotation_timer().is_some());
}

#[test]
fn test_custom_timings_are_honoured() {
    // Arrange
    let config = NotifierConfig {
        first_delay_ms: 100,
        exit_ms: 50,
        enter_ms: 70,
        ..NotifierConfig::default()
    };
    let surface = RecordingSurface::new();
    let mut notifier = pawpoint_test_utils::fixtures::notifier_with_config(
        fluffy_and_max(),
        surface.clone(),
        config,
    );

    // Act & Assert
    notifier.run_until(ms(150));
    assert_eq!(notifier.phase(), Phase::Entering);
    notifier.run_until(ms(220));
    assert_eq!(notifier.phase(), Phase::Idle);
    assert_eq!(notifier.current_index(), 1);
}

#[test]
fn test_industry_catalog_drives_notifier() {
    let surface = RecordingSurface::new();
    let records = Industry::from_flag("unknown").records();
    let expected = Industry::PetGroomer.records();

    let mut notifier = notifier_with(records, surface.clone());
    notifier.run_until(ms(4000));

    assert_eq!(notifier.records(), expected.as_slice());
    assert_eq!(surface.content(), Some(expected[1].clone()));
}
