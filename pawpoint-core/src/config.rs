// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Landing page configuration, read from TOML by the host page.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```
//! use pawpoint_core::{Industry, LandingConfig};
//!
//! let config = LandingConfig::from_toml_str("industry = \"general\"").unwrap();
//! assert_eq!(config.industry, Industry::General);
//! assert_eq!(config.notifier.first_delay_ms, 3000);
//! ```

use crate::Industry;
use core::time::Duration;
use pawpoint_error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub industry: Industry,
    pub notifier: NotifierConfig,
    pub waitlist: WaitlistConfig,
}

impl LandingConfig {
    /// Parse a TOML document. Missing tables and keys take their defaults.
    ///
    /// # Errors
    /// Returns `PawpointError::Config` when the document is not valid TOML or
    /// a value has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Timings of the rotating booking notifier, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Delay before the very first rotation.
    pub first_delay_ms: u64,
    /// Inclusive lower bound of the jittered rotation interval.
    pub interval_min_ms: u64,
    /// Exclusive upper bound of the jittered rotation interval.
    pub interval_max_ms: u64,
    /// Length of the exit transition before the content swap.
    pub exit_ms: u64,
    /// Length of the entrance transition after the content swap.
    pub enter_ms: u64,
    /// Grace period after the pointer leaves before rotation resumes.
    pub hover_grace_ms: u64,
    /// When set, entering the card also cancels an already armed rotation.
    pub pause_on_hover: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            first_delay_ms: 3000,
            interval_min_ms: 4000,
            interval_max_ms: 6000,
            exit_ms: 400,
            enter_ms: 600,
            hover_grace_ms: 1000,
            pause_on_hover: true,
        }
    }
}

impl NotifierConfig {
    pub fn first_delay(&self) -> Duration {
        Duration::from_millis(self.first_delay_ms)
    }

    pub fn interval_min(&self) -> Duration {
        Duration::from_millis(self.interval_min_ms)
    }

    pub fn interval_max(&self) -> Duration {
        Duration::from_millis(self.interval_max_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn hover_grace(&self) -> Duration {
        Duration::from_millis(self.hover_grace_ms)
    }
}

/// Persistence keys and timings of the waitlist form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitlistConfig {
    /// Key of the autosaved, not yet submitted form draft.
    pub draft_key: String,
    /// Key of the rolling JSON array of submissions.
    pub submissions_key: String,
    /// How long the "Joined" button state is held before reverting.
    pub reset_delay_ms: u64,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            draft_key: "pawpoint_waitlist".to_string(),
            submissions_key: "pawpoint_waitlist_submissions".to_string(),
            reset_delay_ms: 1800,
        }
    }
}

impl WaitlistConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
