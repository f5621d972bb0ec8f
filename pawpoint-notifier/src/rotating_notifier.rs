// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::display_surface::{DisplaySurface, PointerEvent};
use crate::jitter::Jitter;
use crate::phase::Phase;
use crate::scheduler::{Scheduler, TimerEvent, TimerHandle};
use crate::timer_queue::TimerQueue;
use core::time::Duration;
use pawpoint_core::{BookingRecord, NotifierConfig};

/// Cycles booking records through a [`DisplaySurface`] on a jittered timer.
///
/// Each rotation is a chain of three timers armed one from the other
/// (`Rotate` -> `Swap` -> `Settle`), which fixes the order exit transition ->
/// content swap -> entrance transition -> idle. The notifier owns at most one
/// timer per role (rotation, animation step, hover grace) and cancels the
/// previous handle of a role before arming a new one. `current_index` is only
/// committed once the entrance transition has finished.
///
/// The notifier never reads a clock: the owner of the [`Scheduler`] reports
/// expiries through [`fire`](Self::fire). With a [`TimerQueue`] this is done
/// by [`run_until`](Self::run_until) / [`run_for`](Self::run_for).
#[derive(Debug)]
pub struct RotatingNotifier<D, S, J> {
    surface: D,
    scheduler: S,
    jitter: J,
    config: NotifierConfig,
    records: Vec<BookingRecord>,
    current_index: usize,
    incoming_index: Option<usize>,
    phase: Phase,
    hovered: bool,
    rotation: Option<TimerHandle>,
    animation: Option<TimerHandle>,
    hover_resume: Option<TimerHandle>,
}

impl<D, S, J> RotatingNotifier<D, S, J>
where
    D: DisplaySurface,
    S: Scheduler,
    J: Jitter,
{
    /// Attach the widget to its surface and arm the first rotation.
    ///
    /// Returns `None`, with nothing armed, when the surface is absent or there
    /// is nothing to rotate. That is the only failure mode and it is not an
    /// error: the widget is simply inert.
    pub fn initialize(
        records: Vec<BookingRecord>,
        surface: Option<D>,
        scheduler: S,
        jitter: J,
        config: NotifierConfig,
    ) -> Option<Self> {
        let Some(mut surface) = surface else {
            info!("booking notifier disabled: display surface missing");
            return None;
        };
        if records.is_empty() {
            info!("booking notifier disabled: no records to rotate");
            return None;
        }

        surface.clear_transition();
        surface.set_content(records[0].primary(), records[0].time());

        let mut notifier = Self {
            surface,
            scheduler,
            jitter,
            config,
            records,
            current_index: 0,
            incoming_index: None,
            phase: Phase::Idle,
            hovered: false,
            rotation: None,
            animation: None,
            hover_resume: None,
        };
        let first_delay = notifier.config.first_delay();
        notifier.rotation = Some(notifier.scheduler.arm(first_delay, TimerEvent::Rotate));
        debug!(
            "booking notifier attached with {} records, first rotation in {:?}",
            notifier.records.len(),
            first_delay
        );
        Some(notifier)
    }

    /// Start one rotation cycle.
    ///
    /// Returns `false` without touching anything when an animation is already
    /// in flight.
    pub fn advance(&mut self) -> bool {
        if !self.phase.is_idle() {
            debug!("advance ignored: animation in flight ({})", self.phase);
            return false;
        }

        let next = (self.current_index + 1) % self.records.len();
        self.cancel_animation();
        self.cancel_rotation();

        self.incoming_index = Some(next);
        self.phase = Phase::Exiting;
        self.surface.apply_exiting();
        self.animation = Some(self.scheduler.arm(self.config.exit(), TimerEvent::Swap));
        debug!("rotation {} -> {} started", self.current_index, next);
        true
    }

    /// Arm the next rotation after a jittered delay and return that delay.
    ///
    /// Any rotation already armed is cancelled first.
    pub fn schedule_next(&mut self) -> Duration {
        self.cancel_rotation();
        let delay = self
            .jitter
            .interval(self.config.interval_min(), self.config.interval_max());
        self.rotation = Some(self.scheduler.arm(delay, TimerEvent::Rotate));
        debug!("next rotation in {:?}", delay);
        delay
    }

    pub fn on_hover_enter(&mut self) {
        self.hovered = true;
        self.cancel_hover_resume();
        if self.config.pause_on_hover {
            self.cancel_rotation();
        }
    }

    pub fn on_hover_leave(&mut self) {
        self.hovered = false;
        self.cancel_hover_resume();
        self.hover_resume = Some(
            self.scheduler
                .arm(self.config.hover_grace(), TimerEvent::HoverResume),
        );
    }

    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter => self.on_hover_enter(),
            PointerEvent::Leave => self.on_hover_leave(),
        }
    }

    /// Report that a timer armed by this notifier has expired.
    ///
    /// A handle that is no longer the one owned for its role (cancelled or
    /// superseded) is ignored.
    pub fn fire(&mut self, handle: TimerHandle, event: TimerEvent) {
        let slot = match event {
            TimerEvent::Rotate => &mut self.rotation,
            TimerEvent::Swap | TimerEvent::Settle => &mut self.animation,
            TimerEvent::HoverResume => &mut self.hover_resume,
        };
        if *slot != Some(handle) {
            debug!("ignoring stale {} ({:?})", handle, event);
            return;
        }
        *slot = None;

        match event {
            TimerEvent::Rotate => self.rotate(),
            TimerEvent::Swap => self.swap(),
            TimerEvent::Settle => self.settle(),
            TimerEvent::HoverResume => self.resume_after_hover(),
        }
    }

    fn rotate(&mut self) {
        self.advance();
        if !self.hovered {
            self.schedule_next();
        }
    }

    fn swap(&mut self) {
        if self.phase != Phase::Exiting {
            return;
        }
        let Some(next) = self.incoming_index else {
            return;
        };

        let record = &self.records[next];
        self.surface.set_content(record.primary(), record.time());
        self.surface.clear_transition();
        self.surface.apply_entering();
        self.phase = Phase::Entering;
        self.animation = Some(self.scheduler.arm(self.config.enter(), TimerEvent::Settle));
    }

    fn settle(&mut self) {
        if self.phase != Phase::Entering {
            return;
        }
        let Some(next) = self.incoming_index.take() else {
            return;
        };

        self.surface.clear_transition();
        self.phase = Phase::Idle;
        self.current_index = next;
        debug!("rotation settled on record {}", next);

        // A manual advance() or a grace timer that expired mid-animation
        // leaves nothing armed; pick the cycle back up here.
        if !self.hovered && self.rotation.is_none() && self.hover_resume.is_none() {
            self.schedule_next();
        }
    }

    fn resume_after_hover(&mut self) {
        if !self.hovered && self.phase.is_idle() {
            self.schedule_next();
        }
    }

    fn cancel_rotation(&mut self) {
        if let Some(handle) = self.rotation.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn cancel_animation(&mut self) {
        if let Some(handle) = self.animation.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn cancel_hover_resume(&mut self) {
        if let Some(handle) = self.hover_resume.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<D, S, J> RotatingNotifier<D, S, J> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index being animated in, while a rotation is in flight.
    pub fn incoming_index(&self) -> Option<usize> {
        self.incoming_index
    }

    pub fn current_record(&self) -> &BookingRecord {
        &self.records[self.current_index]
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn rotation_timer(&self) -> Option<TimerHandle> {
        self.rotation
    }

    pub fn animation_timer(&self) -> Option<TimerHandle> {
        self.animation
    }

    pub fn hover_resume_timer(&self) -> Option<TimerHandle> {
        self.hover_resume
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<D, J> RotatingNotifier<D, TimerQueue, J>
where
    D: DisplaySurface,
    J: Jitter,
{
    /// Fire every timer due at or before `until`, in deadline order, then
    /// move the queue clock to `until`. Returns how many timers fired.
    pub fn run_until(&mut self, until: Duration) -> usize {
        let mut fired = 0;
        while let Some((handle, event)) = self.scheduler.pop_due(until) {
            self.fire(handle, event);
            fired += 1;
        }
        self.scheduler.advance_to(until);
        fired
    }

    /// Let `duration` of virtual time pass.
    pub fn run_for(&mut self, duration: Duration) -> usize {
        let until = self.scheduler.now() + duration;
        self.run_until(until)
    }
}
