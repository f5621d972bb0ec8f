// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Industry flag and the fixed booking catalogs it selects.

use crate::BookingRecord;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

const PET_GROOMER: &[(&str, &str)] = &[
    ("Bella booked a Full Groom", "Today · 2:30 PM"),
    ("Max booked a Bath & Brush", "Tomorrow · 10:00 AM"),
    ("Luna booked a Nail Trim", "Today · 4:15 PM"),
    ("Charlie booked a Puppy Intro", "Sat · 9:30 AM"),
    ("Daisy booked a De-shed Treatment", "Fri · 1:00 PM"),
];

const RESTAURANTS: &[(&str, &str)] = &[
    ("Table for 4 · Rivera party", "Tonight · 7:30 PM"),
    ("Table for 2 · Chen", "Tonight · 8:15 PM"),
    ("Patio for 6 · Okafor birthday", "Sat · 6:00 PM"),
    ("Bar seats for 2 · Novak", "Tomorrow · 9:00 PM"),
];

const GENERAL: &[(&str, &str)] = &[
    ("New client booked a Consultation", "Today · 11:00 AM"),
    ("Returning client booked a Follow-up", "Tomorrow · 3:45 PM"),
    ("Walk-in converted to an Appointment", "Today · 5:30 PM"),
    ("Group session booked for 5", "Thu · 10:00 AM"),
];

/// Which business vertical the landing page is pitched at.
///
/// Parsing is total: unrecognized flags fall back to [`Industry::PetGroomer`].
///
/// ```
/// use pawpoint_core::Industry;
///
/// assert_eq!(Industry::from_flag("restaurants"), Industry::Restaurants);
/// assert_eq!(Industry::from_flag("unknown"), Industry::PetGroomer);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Industry {
    #[default]
    PetGroomer,
    Restaurants,
    General,
}

impl Industry {
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim() {
            "restaurants" => Self::Restaurants,
            "general" => Self::General,
            _ => Self::PetGroomer,
        }
    }

    pub const fn as_flag(self) -> &'static str {
        match self {
            Self::PetGroomer => "pet-groomer",
            Self::Restaurants => "restaurants",
            Self::General => "general",
        }
    }

    /// The booking samples shown for this industry. Never empty.
    pub fn records(self) -> Vec<BookingRecord> {
        let catalog = match self {
            Self::PetGroomer => PET_GROOMER,
            Self::Restaurants => RESTAURANTS,
            Self::General => GENERAL,
        };
        catalog
            .iter()
            .map(|&(primary, time)| BookingRecord::new(primary, time))
            .collect()
    }
}

impl FromStr for Industry {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_flag(s))
    }
}

impl From<String> for Industry {
    fn from(flag: String) -> Self {
        Self::from_flag(&flag)
    }
}

impl From<Industry> for String {
    fn from(industry: Industry) -> Self {
        industry.as_flag().to_string()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}
