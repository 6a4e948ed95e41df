//! Student course request model.

use serde::{Deserialize, Serialize};

/// A student's request to be placed in some section of a course.
///
/// One row per student per requested course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRequest {
    /// Requesting student.
    pub student_id: String,
    /// Requested course.
    pub course_id: String,
}

impl CourseRequest {
    /// Creates a new request.
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }
}
