// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, TimeZone, Utc};
use pawpoint_core::WaitlistConfig;
use pawpoint_landing::storage::{load_json, save_json};
use pawpoint_landing::waitlist::{is_valid_email, validate};
use pawpoint_landing::{
    KeyValueStore, MemoryStore, NoteKind, SubmitButton, SubmitOutcome, WaitlistDraft,
    WaitlistEntry, WaitlistFields, WaitlistForm,
};
use pawpoint_test_utils::FailingStore;
use std::time::Duration;

const UA: &str = "Mozilla/5.0 (test)";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap()
}

fn valid_fields() -> WaitlistFields {
    WaitlistFields {
        email: "  owner@happypaws.com ".to_string(),
        shop: " Happy Paws ".to_string(),
        team: "2-5".to_string(),
        current: " paper diary ".to_string(),
    }
}

#[test]
fn test_email_shape() {
    assert!(is_valid_email("a@b.co"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("ab.co"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_validate_reports_first_bad_field() {
    assert!(validate("owner@shop.com", "Shop").is_ok());
    assert!(validate("nope", "Shop").unwrap_err().is_user_facing());
    assert_eq!(
        validate("owner@shop.com", "   ").unwrap_err().to_string(),
        "Invalid shop: must not be empty"
    );
}

#[test]
fn test_input_autosaves_trimmed_draft() -> anyhow::Result<()> {
    // Arrange
    let mut form = WaitlistForm::new(MemoryStore::new(), WaitlistConfig::default());

    // Act
    form.on_input(valid_fields(), now());

    // Assert
    let draft: WaitlistDraft = load_json(form.store(), "pawpoint_waitlist")?.unwrap();
    assert_eq!(draft.email, "owner@happypaws.com");
    assert_eq!(draft.shop, "Happy Paws");
    assert_eq!(draft.team, "2-5");
    assert_eq!(draft.current, "paper diary");
    assert_eq!(draft.ts, now().timestamp_millis());
    Ok(())
}

#[test]
fn test_restore_fills_fields_from_draft() -> anyhow::Result<()> {
    // Arrange
    let mut store = MemoryStore::new();
    save_json(
        &mut store,
        "pawpoint_waitlist",
        &serde_json::json!({ "email": "owner@happypaws.com", "shop": "Happy Paws" }),
    )?;
    let mut form = WaitlistForm::new(store, WaitlistConfig::default());

    // Act
    let restored = form.restore();

    // Assert
    assert!(restored);
    assert_eq!(form.fields().email, "owner@happypaws.com");
    assert_eq!(form.fields().shop, "Happy Paws");
    assert_eq!(form.fields().team, "");
    Ok(())
}

#[test]
fn test_restore_ignores_corrupt_and_missing_drafts() -> anyhow::Result<()> {
    let mut form = WaitlistForm::new(MemoryStore::new(), WaitlistConfig::default());
    assert!(!form.restore());

    let mut store = MemoryStore::new();
    store.set("pawpoint_waitlist", "{not json")?;
    let mut form = WaitlistForm::new(store, WaitlistConfig::default());

    assert!(!form.restore());
    assert_eq!(form.fields(), &WaitlistFields::default());
    Ok(())
}

#[test]
fn test_invalid_submit_is_rejected_without_storing() -> anyhow::Result<()> {
    // Arrange
    let mut form = WaitlistForm::new(MemoryStore::new(), WaitlistConfig::default());
    form.on_input(
        WaitlistFields {
            email: "owner-at-shop".to_string(),
            shop: "Happy Paws".to_string(),
            ..WaitlistFields::default()
        },
        now(),
    );

    // Act
    let outcome = form.submit(UA, now());

    // Assert
    let SubmitOutcome::Rejected(note) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(note.message, "Please enter a valid work email and shop name.");
    assert_eq!(note.kind, NoteKind::Error);
    assert_eq!(form.button(), SubmitButton::IDLE);
    assert!(form.submissions()?.is_empty());
    Ok(())
}

#[test]
fn test_successful_submit_appends_entry_and_resets_form() -> anyhow::Result<()> {
    // Arrange
    let mut form = WaitlistForm::new(MemoryStore::new(), WaitlistConfig::default());
    form.on_input(valid_fields(), now());

    // Act
    let outcome = form.submit(UA, now());

    // Assert
    let SubmitOutcome::Joined {
        note,
        entry,
        reset_after,
    } = outcome
    else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(
        note.message,
        "You’re on the list! We’ll email you when invites open."
    );
    assert!(!note.is_error());
    assert_eq!(reset_after, Duration::from_millis(1800));
    assert_eq!(
        entry,
        WaitlistEntry {
            email: "owner@happypaws.com".to_string(),
            shop: "Happy Paws".to_string(),
            team: "2-5".to_string(),
            current: "paper diary".to_string(),
            source: "landing".to_string(),
            ts: "2026-10-16T09:30:00.000Z".to_string(),
            ua: UA.to_string(),
        }
    );
    assert_eq!(form.submissions()?, vec![entry]);
    assert_eq!(form.fields(), &WaitlistFields::default());
    assert_eq!(form.button(), SubmitButton::JOINED);

    form.reset_button();
    assert_eq!(form.button(), SubmitButton::IDLE);
    Ok(())
}

#[test]
fn test_submissions_accumulate() -> anyhow::Result<()> {
    let mut form = WaitlistForm::new(MemoryStore::new(), WaitlistConfig::default());

    form.on_input(valid_fields(), now());
    form.submit(UA, now());
    form.on_input(
        WaitlistFields {
            email: "second@shop.io".to_string(),
            shop: "Second Shop".to_string(),
            ..WaitlistFields::default()
        },
        now(),
    );
    form.submit(UA, now());

    let log = form.submissions()?;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].shop, "Happy Paws");
    assert_eq!(log[1].email, "second@shop.io");
    Ok(())
}

#[test]
fn test_storage_failure_reports_error_and_reenables_button() {
    // Arrange
    let mut form = WaitlistForm::new(FailingStore::new(), WaitlistConfig::default());
    form.on_input(valid_fields(), now());

    // Act
    let outcome = form.submit(UA, now());

    // Assert
    let SubmitOutcome::Failed(note) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(note.message, "Something went wrong. Please try again later.");
    assert_eq!(form.button(), SubmitButton::IDLE);
    assert_eq!(form.note(), Some(&note));
    assert_eq!(form.fields(), &valid_fields());
}

#[test]
fn test_corrupt_submission_log_fails_submit() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    store.set("pawpoint_waitlist_submissions", "oops")?;
    let mut form = WaitlistForm::new(store, WaitlistConfig::default());
    form.on_input(valid_fields(), now());

    let outcome = form.submit(UA, now());

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(form.submissions().is_err());
    Ok(())
}

#[test]
fn test_custom_keys_are_honoured() -> anyhow::Result<()> {
    let config = WaitlistConfig {
        draft_key: "draft".to_string(),
        submissions_key: "log".to_string(),
        reset_delay_ms: 500,
    };
    let mut form = WaitlistForm::new(MemoryStore::new(), config);

    form.on_input(valid_fields(), now());
    let outcome = form.submit(UA, now());

    assert!(matches!(
        outcome,
        SubmitOutcome::Joined { reset_after, .. } if reset_after == Duration::from_millis(500)
    ));
    let store = form.into_store();
    assert!(store.get("draft")?.is_some());
    assert!(store.get("log")?.is_some());
    assert!(store.get("pawpoint_waitlist")?.is_none());
    Ok(())
}
