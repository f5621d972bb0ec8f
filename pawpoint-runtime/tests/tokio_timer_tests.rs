// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use pawpoint_runtime::{Timer, TokioTimer};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_elapsed_follows_paused_clock() {
    // Arrange
    let timer = TokioTimer;
    let origin = timer.now();

    // Act
    advance(Duration::from_millis(1500)).await;

    // Assert
    assert_eq!(timer.elapsed_since(origin), Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_sleep_future_completes_after_duration() {
    // Arrange
    let timer = TokioTimer;
    let origin = timer.now();

    // Act
    timer.sleep_future(Duration::from_millis(400)).await;

    // Assert
    assert!(timer.elapsed_since(origin) >= Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_saturates_for_future_origin() {
    let timer = TokioTimer;
    let origin = timer.now() + Duration::from_secs(10);

    assert_eq!(timer.elapsed_since(origin), Duration::ZERO);
}
