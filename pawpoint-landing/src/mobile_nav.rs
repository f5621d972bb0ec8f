// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Disclosure state of the mobile navigation menu.
///
/// The toggle's `aria-expanded` and the menu's `aria-hidden` always mirror
/// each other: the menu is hidden exactly when it is not expanded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    expanded: bool,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The menu button was clicked.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// A click landed inside the menu. Following a link closes it.
    pub fn nav_clicked(&mut self, on_link: bool) {
        if on_link {
            self.close();
        }
    }

    /// A click reached the document. Clicks outside both the button and the
    /// menu close it.
    pub fn document_clicked(&mut self, inside_toggle: bool, inside_nav: bool) {
        if !inside_toggle && !inside_nav {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }

    pub fn aria_expanded(&self) -> &'static str {
        bool_attr(self.expanded)
    }

    pub fn aria_hidden(&self) -> &'static str {
        bool_attr(!self.expanded)
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
