// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async event loop that runs a notifier against a real clock.

use crate::display_surface::{DisplaySurface, PointerEvent};
use crate::jitter::Jitter;
use crate::rotating_notifier::RotatingNotifier;
use crate::timer_queue::TimerQueue;
use core::pin::pin;
use core::time::Duration;
use futures::future::{self, Either};
use futures::StreamExt;
use futures_channel::mpsc;
use pawpoint_runtime::Timer;

/// Drives a [`RotatingNotifier`] from a [`Timer`] and the surface's pointer
/// events.
///
/// The driver is a single future that owns the notifier, so timer expiries
/// and hover events are handled one at a time, the way a browser event loop
/// delivers callbacks. The queue's virtual clock is kept in step with
/// `timer.now()`.
///
/// The future completes once the surface drops its pointer listener, and
/// hands the notifier back.
///
/// # Example
///
/// ```rust,ignore
/// let driver = NotifierDriver::new(notifier, TokioTimer);
/// tokio::spawn(driver.run());
/// ```
pub struct NotifierDriver<D, J, T: Timer> {
    notifier: RotatingNotifier<D, TimerQueue, J>,
    timer: T,
    origin: T::Instant,
    base: Duration,
    pointer_events: mpsc::UnboundedReceiver<PointerEvent>,
}

impl<D, J, T> NotifierDriver<D, J, T>
where
    D: DisplaySurface,
    J: Jitter,
    T: Timer,
{
    /// Subscribe to the surface's pointer events and anchor the queue clock
    /// to `timer.now()`.
    pub fn new(mut notifier: RotatingNotifier<D, TimerQueue, J>, timer: T) -> Self {
        let (tx, rx) = mpsc::unbounded();
        notifier
            .surface_mut()
            .subscribe_pointer(Box::new(move |event| {
                // The driver only stops listening once it is gone.
                let _ = tx.unbounded_send(event);
            }));

        let origin = timer.now();
        let base = notifier.scheduler().now();
        Self {
            notifier,
            timer,
            origin,
            base,
            pointer_events: rx,
        }
    }

    pub fn notifier(&self) -> &RotatingNotifier<D, TimerQueue, J> {
        &self.notifier
    }

    fn elapsed(&self) -> Duration {
        self.base + self.timer.elapsed_since(self.origin)
    }

    pub async fn run(mut self) -> RotatingNotifier<D, TimerQueue, J> {
        loop {
            let elapsed = self.elapsed();
            self.notifier.run_until(elapsed);

            let next_deadline = self.notifier.scheduler().next_deadline();
            let event = match next_deadline {
                Some(deadline) => {
                    let sleep = pin!(self.timer.sleep_future(deadline.saturating_sub(elapsed)));
                    match future::select(self.pointer_events.next(), sleep).await {
                        Either::Left((event, _)) => event,
                        Either::Right(((), _)) => continue,
                    }
                }
                None => self.pointer_events.next().await,
            };

            let Some(event) = event else {
                debug!("pointer listener dropped, stopping notifier driver");
                break;
            };

            let now = self.elapsed();
            self.notifier.run_until(now);
            self.notifier.on_pointer(event);
        }

        self.notifier
    }
}
