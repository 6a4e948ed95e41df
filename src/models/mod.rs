//! Sectioning domain models.
//!
//! Provides the input catalog types (courses, offerings, meeting periods,
//! student requests) and the output types of an assignment run.
//!
//! # Domain Mappings
//!
//! | u-enroll | High school | University | Training center |
//! |----------|-------------|------------|-----------------|
//! | Course | Subject | Course | Program |
//! | Offering | Class section | Lecture section | Cohort |
//! | OfferingPeriod | Bell period | Time block | Session slot |
//! | Assignment | Class placement | Registration | Seat booking |

mod course;
mod enrollment;
mod offering;
mod period;
mod request;

pub use course::Course;
pub use enrollment::{
    Assignment, Diagnostic, DiagnosticReason, Enrollment, Violation, ViolationType,
};
pub use offering::Offering;
pub use period::{OfferingPeriod, ParseWeekdayError, Weekday};
pub use request::CourseRequest;
