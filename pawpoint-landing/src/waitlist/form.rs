// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::payload::{WaitlistDraft, WaitlistEntry, WaitlistFields};
use super::validation::validate;
use crate::storage::{load_json, save_json, KeyValueStore};
use chrono::{DateTime, Utc};
use core::time::Duration;
use pawpoint_core::WaitlistConfig;
use pawpoint_error::Result;

const INVALID_INPUT: &str = "Please enter a valid work email and shop name.";
const JOINED: &str = "You’re on the list! We’ll email you when invites open.";
const FAILED: &str = "Something went wrong. Please try again later.";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoteKind {
    Info,
    Error,
}

/// Status line shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub message: String,
    pub kind: NoteKind,
}

impl Note {
    fn info(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: NoteKind::Info,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: NoteKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoteKind::Error
    }
}

/// Label and enabled state of the submit button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitButton {
    pub const IDLE: Self = Self {
        label: "Join waitlist",
        disabled: false,
    };
    pub const ADDING: Self = Self {
        label: "Adding…",
        disabled: true,
    };
    pub const JOINED: Self = Self {
        label: "Joined ✅",
        disabled: true,
    };
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Result of a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input failed validation; nothing was stored and the button is untouched.
    Rejected(Note),
    /// The entry was appended to the log. Call
    /// [`WaitlistForm::reset_button`] once `reset_after` has elapsed.
    Joined {
        note: Note,
        entry: WaitlistEntry,
        reset_after: Duration,
    },
    /// Storage failed; the button is usable again right away.
    Failed(Note),
}

/// Waitlist form state over a key-value store.
#[derive(Debug)]
pub struct WaitlistForm<S> {
    store: S,
    config: WaitlistConfig,
    fields: WaitlistFields,
    button: SubmitButton,
    note: Option<Note>,
}

impl<S: KeyValueStore> WaitlistForm<S> {
    pub fn new(store: S, config: WaitlistConfig) -> Self {
        Self {
            store,
            config,
            fields: WaitlistFields::default(),
            button: SubmitButton::IDLE,
            note: None,
        }
    }

    /// Fill the fields from a previously autosaved draft.
    ///
    /// Missing or unreadable drafts are skipped; returns whether one was
    /// applied.
    pub fn restore(&mut self) -> bool {
        match load_json::<WaitlistDraft, _>(&self.store, &self.config.draft_key) {
            Ok(Some(draft)) => {
                draft.apply_to(&mut self.fields);
                true
            }
            Ok(None) => false,
            Err(error) => {
                warn!("ignoring unreadable waitlist draft: {}", error);
                false
            }
        }
    }

    /// A control changed: keep the new values and autosave the draft.
    ///
    /// Storage failures only cost the autosave and are logged.
    pub fn on_input(&mut self, fields: WaitlistFields, now: DateTime<Utc>) {
        self.fields = fields;
        let draft = WaitlistDraft::capture(&self.fields, now);
        if let Err(error) = save_json(&mut self.store, &self.config.draft_key, &draft) {
            warn!("failed to autosave waitlist draft: {}", error);
        }
    }

    pub fn submit(&mut self, user_agent: &str, now: DateTime<Utc>) -> SubmitOutcome {
        if validate(&self.fields.email, &self.fields.shop).is_err() {
            let note = Note::error(INVALID_INPUT);
            self.note = Some(note.clone());
            return SubmitOutcome::Rejected(note);
        }

        self.button = SubmitButton::ADDING;
        let entry = WaitlistEntry::new(&self.fields, user_agent, now);

        match self.append_submission(&entry) {
            Ok(()) => {
                info!("waitlist submission stored for {}", entry.shop);
                self.fields = WaitlistFields::default();
                self.button = SubmitButton::JOINED;
                let note = Note::info(JOINED);
                self.note = Some(note.clone());
                SubmitOutcome::Joined {
                    note,
                    entry,
                    reset_after: self.config.reset_delay(),
                }
            }
            Err(error) => {
                warn!("failed to store waitlist submission: {}", error);
                self.button = SubmitButton::IDLE;
                let note = Note::error(FAILED);
                self.note = Some(note.clone());
                SubmitOutcome::Failed(note)
            }
        }
    }

    /// Return the button to its idle state after a successful submit.
    pub fn reset_button(&mut self) {
        self.button = SubmitButton::IDLE;
    }

    /// The stored submission log, oldest first.
    ///
    /// # Errors
    /// Propagates store failures and malformed log contents.
    pub fn submissions(&self) -> Result<Vec<WaitlistEntry>> {
        Ok(load_json(&self.store, &self.config.submissions_key)?.unwrap_or_default())
    }

    fn append_submission(&mut self, entry: &WaitlistEntry) -> Result<()> {
        let mut log = self.submissions()?;
        log.push(entry.clone());
        save_json(&mut self.store, &self.config.submissions_key, &log)
    }
}

impl<S> WaitlistForm<S> {
    pub fn fields(&self) -> &WaitlistFields {
        &self.fields
    }

    pub fn button(&self) -> SubmitButton {
        self.button
    }

    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
