// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pawpoint
//!
//! Client-side widgets of the Pawpoint landing page, written as plain state
//! machines so they run and test natively and bind to the DOM from WASM.
//!
//! ## Overview
//!
//! - [`RotatingNotifier`]: the "recent booking" card, cycling records through
//!   a [`DisplaySurface`] with exit/enter transitions, jittered intervals and
//!   hover pausing
//! - [`NotifierDriver`]: runs a notifier against a real [`Timer`]
//! - [`WaitlistForm`], [`PricingToggle`], [`MobileNav`]: the rest of the page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pawpoint::prelude::*;
//!
//! let config = LandingConfig::from_toml_str(include_str!("landing.toml"))?;
//! if let Some(notifier) = pawpoint::booking_notifier(&config, surface, seed) {
//!     wasm_bindgen_futures::spawn_local(async move {
//!         NotifierDriver::new(notifier, WasmTimer).run().await;
//!     });
//! }
//! ```

pub use pawpoint_core::{BookingRecord, Industry, LandingConfig, NotifierConfig, WaitlistConfig};
pub use pawpoint_error::{PawpointError, Result};
pub use pawpoint_landing::{
    anchor_target, footer_year, BillingMode, KeyValueStore, MemoryStore, MobileNav, Note,
    PriceDisplay, PricingToggle, SubmitButton, SubmitOutcome, WaitlistFields, WaitlistForm,
    SCROLL_BEHAVIOR, SCROLL_BLOCK,
};
pub use pawpoint_notifier::{
    DisplaySurface, Jitter, NotifierDriver, Phase, PointerEvent, PointerListener, RandomJitter,
    RotatingNotifier, TimerQueue,
};
pub use pawpoint_runtime::Timer;

#[cfg(feature = "runtime-tokio")]
pub use pawpoint_runtime::TokioTimer;

#[cfg(feature = "runtime-smol")]
pub use pawpoint_runtime::SmolTimer;

#[cfg(feature = "runtime-wasm")]
pub use pawpoint_runtime::WasmTimer;

/// Notifier type assembled by [`booking_notifier`].
pub type BookingNotifier<D> = RotatingNotifier<D, TimerQueue, RandomJitter>;

/// Attach the booking notifier for the configured industry.
///
/// Returns `None` when `surface` is absent, in which case nothing is armed.
pub fn booking_notifier<D: DisplaySurface>(
    config: &LandingConfig,
    surface: Option<D>,
    seed: u64,
) -> Option<BookingNotifier<D>> {
    RotatingNotifier::initialize(
        config.industry.records(),
        surface,
        TimerQueue::new(),
        RandomJitter::seeded(seed),
        config.notifier.clone(),
    )
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{booking_notifier, BookingNotifier};
    pub use pawpoint_core::{Industry, LandingConfig};
    pub use pawpoint_landing::{BillingMode, MobileNav, PricingToggle, WaitlistForm};
    pub use pawpoint_notifier::{DisplaySurface, NotifierDriver, Phase, RotatingNotifier};
    pub use pawpoint_runtime::Timer;
}
