// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Monthly / yearly pricing toggle.

/// Billing period selected on the pricing card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BillingMode {
    #[default]
    Monthly,
    Yearly,
}

impl BillingMode {
    /// Parse a button's `data-billing` attribute. Anything but `yearly` is
    /// monthly.
    pub fn from_attribute(value: &str) -> Self {
        match value {
            "yearly" => Self::Yearly,
            _ => Self::Monthly,
        }
    }

    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub const fn display(self) -> PriceDisplay {
        match self {
            Self::Monthly => MONTHLY,
            Self::Yearly => YEARLY,
        }
    }
}

/// Text shown on the pricing card. `sub_html` carries inline markup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PriceDisplay {
    pub amount: &'static str,
    pub period: &'static str,
    pub sub_html: &'static str,
}

const MONTHLY: PriceDisplay = PriceDisplay {
    amount: "$30",
    period: "/month",
    sub_html: "or <strong>$300 /year</strong> (save $60)",
};

const YEARLY: PriceDisplay = PriceDisplay {
    amount: "$300",
    period: "/year",
    sub_html: "<strong>Equivalent to $25 /month</strong>",
};

/// Which toggle button is active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingToggle {
    selected: BillingMode,
}

impl PricingToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> BillingMode {
        self.selected
    }

    /// Activate `mode` and return what the card should show.
    pub fn select(&mut self, mode: BillingMode) -> PriceDisplay {
        self.selected = mode;
        mode.display()
    }

    pub fn display(&self) -> PriceDisplay {
        self.selected.display()
    }

    pub fn is_active(&self, mode: BillingMode) -> bool {
        self.selected == mode
    }

    pub fn aria_selected(&self, mode: BillingMode) -> &'static str {
        if self.is_active(mode) {
            "true"
        } else {
            "false"
        }
    }
}
