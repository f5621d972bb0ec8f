// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Waitlist signup form with local persistence.
//!
//! Nothing is sent over the network: drafts and submissions only ever land in
//! a [`KeyValueStore`](crate::KeyValueStore).

mod form;
mod payload;
mod validation;

pub use form::{Note, NoteKind, SubmitButton, SubmitOutcome, WaitlistForm};
pub use payload::{WaitlistDraft, WaitlistEntry, WaitlistFields, SUBMISSION_SOURCE};
pub use validation::{is_valid_email, validate};
