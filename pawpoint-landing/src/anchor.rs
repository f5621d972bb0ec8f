// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// `behavior` passed to `scrollIntoView` for in-page anchors.
pub const SCROLL_BEHAVIOR: &str = "smooth";

/// `block` passed to `scrollIntoView` for in-page anchors.
pub const SCROLL_BLOCK: &str = "start";

/// Selector to scroll to for a clicked link, if it is an in-page anchor.
///
/// A bare `#` and links that leave the page are left to the browser.
///
/// ```
/// use pawpoint_landing::anchor_target;
///
/// assert_eq!(anchor_target("#pricing"), Some("#pricing"));
/// assert_eq!(anchor_target("#"), None);
/// assert_eq!(anchor_target("https://example.com/#faq"), None);
/// ```
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(fragment) if !fragment.is_empty() => Some(href),
        _ => None,
    }
}
