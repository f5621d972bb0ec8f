// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the Pawpoint landing page widgets
//!
//! The rotating notifier itself never fails: a missing display surface simply
//! leaves the feature inert. Errors only arise around the page collaborators,
//! i.e. configuration parsing, local persistence and form validation.
//!
//! # Examples
//!
//! ```
//! use pawpoint_error::{PawpointError, Result};
//!
//! fn load_draft() -> Result<()> {
//!     Err(PawpointError::storage("localStorage unavailable"))
//! }
//! ```

/// Root error type for all Pawpoint operations
#[derive(Debug, thiserror::Error)]
pub enum PawpointError {
    /// Landing configuration could not be parsed
    #[error("Invalid configuration: {context}")]
    Config {
        /// What was wrong with the configuration
        context: String,
    },

    /// The key-value store rejected a read or write
    ///
    /// In the browser this is typically a quota error or storage disabled by
    /// privacy settings.
    #[error("Storage error: {context}")]
    Storage {
        /// Description of the failed storage operation
        context: String,
    },

    /// A persisted payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// User input failed validation
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Name of the offending form field
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl PawpointError {
    /// Create a configuration error with the given context
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }

    /// Create a storage error with the given context
    pub fn storage(context: impl Into<String>) -> Self {
        Self::Storage {
            context: context.into(),
        }
    }

    /// Create a validation error for a form field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error could succeed on retry
    ///
    /// Storage failures are often transient (quota freed, private mode left).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Check if this error was caused by the user rather than the environment
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<toml::de::Error> for PawpointError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(error.message())
    }
}

/// Specialized Result type for Pawpoint operations
///
/// ```
/// use pawpoint_error::Result;
///
/// fn read() -> Result<String> {
///     Ok("stored".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PawpointError>;

/// Helper trait for attaching storage context to foreign errors
pub trait ResultExt<T> {
    /// Map any error into [`PawpointError::Storage`] prefixed with `context`
    ///
    /// # Errors
    /// Returns `Err(PawpointError)` if the underlying result is `Err`.
    fn storage_context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: core::fmt::Display,
{
    fn storage_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PawpointError::storage(format!("{}: {e}", context.into())))
    }
}
