//! Input validation for sectioning problems.
//!
//! Checks structural integrity of the catalog and the request list
//! before assignment. Detects:
//! - Empty inputs
//! - Duplicate IDs and duplicate rows
//! - Dangling course and offering references
//! - Requests for courses that have no sections
//! - Sections that never meet
//! - Non-positive capacities and out-of-range period ids
//!
//! All problems are collected; validation does not stop at the first one.

use crate::models::{Course, CourseRequest, Offering, OfferingPeriod};
use std::collections::{HashMap, HashSet};

/// Highest period id accepted by [`validate_input`].
pub const DEFAULT_MAX_PERIOD_ID: u32 = 20;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required collection has no rows.
    EmptyInput,
    /// Two entities share the same ID.
    DuplicateId,
    /// The same row (request, section, or period) appears twice.
    DuplicateEntry,
    /// A row references a course that doesn't exist.
    InvalidCourseReference,
    /// A period row references an offering that doesn't exist.
    InvalidOfferingReference,
    /// A requested course has no offerings.
    CourseWithoutOfferings,
    /// An offering has no meeting periods.
    OfferingWithoutPeriods,
    /// An offering's capacity is zero or negative.
    NonPositiveCapacity,
    /// A period id lies outside `1..=max_period_id`.
    PeriodOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates sectioning input with period ids limited to
/// [`DEFAULT_MAX_PERIOD_ID`].
///
/// See [`validate_input_with`].
pub fn validate_input(
    courses: &[Course],
    offerings: &[Offering],
    periods: &[OfferingPeriod],
    requests: &[CourseRequest],
) -> ValidationResult {
    validate_input_with(courses, offerings, periods, requests, DEFAULT_MAX_PERIOD_ID)
}

/// Validates the input data for a sectioning run.
///
/// Checks:
/// 1. Offerings, periods, and requests are non-empty
/// 2. No duplicate course or offering IDs
/// 3. No duplicate (course, section), period, or request rows
/// 4. Offerings and requests reference existing courses
/// 5. Period rows reference existing offerings
/// 6. Every requested course has at least one offering
/// 7. Every offering meets at least once
/// 8. Capacities are positive
/// 9. Period ids lie in `1..=max_period_id`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input_with(
    courses: &[Course],
    offerings: &[Offering],
    periods: &[OfferingPeriod],
    requests: &[CourseRequest],
    max_period_id: u32,
) -> ValidationResult {
    let mut errors = Vec::new();

    for (name, empty) in [
        ("Offerings", offerings.is_empty()),
        ("Periods", periods.is_empty()),
        ("Requests", requests.is_empty()),
    ] {
        if empty {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInput,
                format!("{name} data is empty"),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
    }

    let mut offering_ids = HashSet::new();
    let mut sections = HashSet::new();
    let mut offerings_per_course: HashMap<&str, usize> = HashMap::new();
    for o in offerings {
        if !offering_ids.insert(o.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate offering ID: {}", o.id),
            ));
        }
        if !sections.insert((o.course_id.as_str(), o.section)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntry,
                format!("Course '{}' has section {} more than once", o.course_id, o.section),
            ));
        }
        if !course_ids.contains(o.course_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseReference,
                format!("Offering '{}' references unknown course '{}'", o.id, o.course_id),
            ));
        }
        if o.capacity <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCapacity,
                format!("Offering '{}' has non-positive capacity {}", o.id, o.capacity),
            ));
        }
        *offerings_per_course.entry(o.course_id.as_str()).or_insert(0) += 1;
    }

    let mut period_rows = HashSet::new();
    let mut meeting: HashSet<&str> = HashSet::new();
    for p in periods {
        if !period_rows.insert((p.offering_id.as_str(), p.day, p.period_id)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntry,
                format!(
                    "Offering '{}' lists period {} on {} more than once",
                    p.offering_id, p.period_id, p.day
                ),
            ));
        }
        if !offering_ids.contains(p.offering_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOfferingReference,
                format!("Period row references unknown offering '{}'", p.offering_id),
            ));
        }
        if p.period_id < 1 || p.period_id > max_period_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::PeriodOutOfRange,
                format!(
                    "Offering '{}' uses period {} outside 1-{max_period_id}",
                    p.offering_id, p.period_id
                ),
            ));
        }
        meeting.insert(p.offering_id.as_str());
    }

    for o in offerings {
        if !meeting.contains(o.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OfferingWithoutPeriods,
                format!("Offering '{}' does not meet at all", o.id),
            ));
        }
    }

    let mut request_rows = HashSet::new();
    let mut reported_courses = HashSet::new();
    for r in requests {
        if !request_rows.insert((r.student_id.as_str(), r.course_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntry,
                format!(
                    "Student '{}' requests course '{}' more than once",
                    r.student_id, r.course_id
                ),
            ));
        }
        if !course_ids.contains(r.course_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseReference,
                format!(
                    "Student '{}' requests unknown course '{}'",
                    r.student_id, r.course_id
                ),
            ));
        } else if !offerings_per_course.contains_key(r.course_id.as_str())
            && reported_courses.insert(r.course_id.as_str())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::CourseWithoutOfferings,
                format!("Requested course '{}' has no offerings", r.course_id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
