//! Error types.
//!
//! Unschedulable requests are not errors; they are recorded as
//! [`Diagnostic`](crate::models::Diagnostic)s on the enrollment. The
//! variants here cover broken preconditions on the input data and bad
//! configuration, which abort a run.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while building a catalog or running the assigner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnrollError {
    #[error("duplicate course id: {0}")]
    DuplicateCourse(String),
    #[error("duplicate offering id: {0}")]
    DuplicateOffering(String),
    #[error("unknown course '{course_id}' referenced by {referenced_by}")]
    UnknownCourse {
        course_id: String,
        referenced_by: String,
    },
    #[error("unknown offering '{offering_id}' referenced by a period row")]
    UnknownOffering { offering_id: String },
    #[error("offering picker returned index {index} for {len} eligible offerings")]
    PickOutOfRange { index: usize, len: usize },
    #[error("invalid assigner config: {0}")]
    InvalidConfig(String),
    #[error("input failed validation with {} error(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}
