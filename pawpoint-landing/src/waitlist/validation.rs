// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pawpoint_error::{PawpointError, Result};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r".+@.+\..+").unwrap()
});

/// Loose shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validate the trimmed email and shop name.
///
/// # Errors
/// Returns `PawpointError::Validation` naming the first offending field.
pub fn validate(email: &str, shop: &str) -> Result<()> {
    if !is_valid_email(email.trim()) {
        return Err(PawpointError::validation("email", "expected name@domain.tld"));
    }
    if shop.trim().is_empty() {
        return Err(PawpointError::validation("shop", "must not be empty"));
    }
    Ok(())
}
