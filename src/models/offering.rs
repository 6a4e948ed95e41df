//! Offering (section) model.
//!
//! An offering is one schedulable instance of a course: its own section
//! number, teacher, capacity, and set of weekly meeting periods. Students
//! are assigned to offerings, not to courses.

use serde::{Deserialize, Serialize};

/// A section of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    /// Unique offering identifier.
    pub id: String,
    /// Section number within the course.
    pub section: i32,
    /// Course this offering belongs to.
    pub course_id: String,
    /// Teacher assigned to the section.
    pub teacher_id: String,
    /// Seat count. Carried for callers and validation; the assigner
    /// does not enforce it. Defaults to 1, so set it with
    /// [`Offering::with_capacity`] for any section shared by several
    /// students, or reports will flag it as over capacity.
    pub capacity: i32,
}

impl Offering {
    /// Creates a new offering of `course_id`.
    ///
    /// Defaults: section 1, no teacher, capacity 1.
    pub fn new(id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section: 1,
            course_id: course_id.into(),
            teacher_id: String::new(),
            capacity: 1,
        }
    }

    /// Sets the section number.
    pub fn with_section(mut self, section: i32) -> Self {
        self.section = section;
        self
    }

    /// Sets the teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = teacher_id.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }
}
