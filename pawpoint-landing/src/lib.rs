// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Page-level widgets of the Pawpoint landing page.
//!
//! Each type here holds the state a DOM event handler would otherwise keep
//! in attributes, so the host glue only mirrors it:
//!
//! - [`MobileNav`]: disclosure state of the mobile menu
//! - [`anchor_target`]: which in-page links scroll smoothly
//! - [`footer_year`]: the copyright year stamp
//! - [`PricingToggle`]: monthly / yearly plan display
//! - [`WaitlistForm`]: draft autosave, validation and local submission log

#[macro_use]
mod logging;

pub mod anchor;
pub mod footer;
pub mod mobile_nav;
pub mod pricing;
pub mod storage;
pub mod waitlist;

pub use self::anchor::{anchor_target, SCROLL_BEHAVIOR, SCROLL_BLOCK};
pub use self::footer::footer_year;
pub use self::mobile_nav::MobileNav;
pub use self::pricing::{BillingMode, PriceDisplay, PricingToggle};
pub use self::storage::{KeyValueStore, MemoryStore};
pub use self::waitlist::{
    Note, NoteKind, SubmitButton, SubmitOutcome, WaitlistDraft, WaitlistEntry, WaitlistFields,
    WaitlistForm,
};
