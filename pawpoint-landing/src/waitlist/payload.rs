// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Value stored in every submission's `source` field.
pub const SUBMISSION_SOURCE: &str = "landing";

/// Raw values of the form controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistFields {
    pub email: String,
    pub shop: String,
    pub team: String,
    pub current: String,
}

/// Autosaved, not yet submitted form contents.
///
/// Free-text fields are trimmed; `team` comes from a select and is kept as is.
/// `ts` is milliseconds since the Unix epoch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistDraft {
    pub email: String,
    pub shop: String,
    pub team: String,
    pub current: String,
    pub ts: i64,
}

impl WaitlistDraft {
    pub fn capture(fields: &WaitlistFields, now: DateTime<Utc>) -> Self {
        Self {
            email: fields.email.trim().to_string(),
            shop: fields.shop.trim().to_string(),
            team: fields.team.clone(),
            current: fields.current.trim().to_string(),
            ts: now.timestamp_millis(),
        }
    }

    /// Copy the non-empty draft values over `fields`.
    pub fn apply_to(&self, fields: &mut WaitlistFields) {
        let pairs = [
            (&self.email, &mut fields.email),
            (&self.shop, &mut fields.shop),
            (&self.team, &mut fields.team),
            (&self.current, &mut fields.current),
        ];
        for (saved, field) in pairs {
            if !saved.is_empty() {
                field.clone_from(saved);
            }
        }
    }
}

/// One entry of the rolling submission log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub shop: String,
    pub team: String,
    pub current: String,
    pub source: String,
    /// RFC 3339 timestamp with millisecond precision, UTC.
    pub ts: String,
    pub ua: String,
}

impl WaitlistEntry {
    pub fn new(fields: &WaitlistFields, user_agent: &str, now: DateTime<Utc>) -> Self {
        Self {
            email: fields.email.trim().to_string(),
            shop: fields.shop.trim().to_string(),
            team: fields.team.clone(),
            current: fields.current.trim().to_string(),
            source: SUBMISSION_SOURCE.to_string(),
            ts: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            ua: user_agent.to_string(),
        }
    }
}
