//! Course model.
//!
//! A course is a catalog entry that students request. It is scheduled
//! through one or more offerings (sections). The weekly period load of a
//! course drives request priority, never conflict detection.

use serde::{Deserialize, Serialize};

/// A course in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Number of class periods the course meets per week.
    pub periods_per_week: u32,
}

impl Course {
    /// Creates a new course with no name and zero weekly periods.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            periods_per_week: 0,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly period load.
    pub fn with_periods_per_week(mut self, periods: u32) -> Self {
        self.periods_per_week = periods;
        self
    }
}
