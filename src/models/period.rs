//! Weekly meeting period model.
//!
//! An offering occupies a set of periods. Each row names a period id
//! (the atomic weekly time slot), the day it falls on, and optionally
//! the room. Under the default conflict policy only the period id takes
//! part in conflict detection; day and room are descriptive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the school week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a day name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day of week: {0:?}")]
pub struct ParseWeekdayError(pub String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Parses a full English day name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

/// One weekly meeting of an offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingPeriod {
    /// Offering that meets in this period.
    pub offering_id: String,
    /// Period identifier; the conflict key.
    pub period_id: u32,
    /// Day the period falls on.
    pub day: Weekday,
    /// Room, if known.
    pub room: Option<String>,
}

impl OfferingPeriod {
    /// Creates a period row without a room.
    pub fn new(offering_id: impl Into<String>, period_id: u32, day: Weekday) -> Self {
        Self {
            offering_id: offering_id.into(),
            period_id,
            day,
            room: None,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}
