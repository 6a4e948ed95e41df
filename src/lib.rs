//! Student sectioning for the U-Engine ecosystem.
//!
//! Places students into sections (offerings) of the courses they request
//! so that no student sits in two sections that share a class period.
//! Placement is a greedy heuristic: requests for scarce courses are
//! resolved first, and each request takes one of the sections still free
//! for that student, chosen uniformly at random. A request with no free
//! section is dropped with a diagnostic; the run continues.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Offering`, `OfferingPeriod`,
//!   `CourseRequest`, `Assignment`, `Diagnostic`, `Enrollment`
//! - **`catalog`**: Indexed view of the static inputs
//! - **`validation`**: Input integrity checks (duplicates, dangling refs, ranges)
//! - **`ordering`**: Stable multi-pass request ordering
//! - **`conflict`**: Conflict keys, per-student commitments, enrollment audit
//! - **`assigner`**: The greedy assigner, offering pickers, and metrics
//!
//! # Example
//!
//! ```
//! use u_enroll::assigner::{AssignerConfig, GreedyAssigner};
//! use u_enroll::catalog::Catalog;
//! use u_enroll::models::{Course, CourseRequest, Offering, OfferingPeriod, Weekday};
//!
//! let catalog = Catalog::build(
//!     vec![Course::new("MATH").with_periods_per_week(5), Course::new("BIO")],
//!     vec![
//!         Offering::new("MATH-1", "MATH"),
//!         Offering::new("MATH-2", "MATH").with_section(2),
//!         Offering::new("BIO-1", "BIO"),
//!     ],
//!     vec![
//!         OfferingPeriod::new("MATH-1", 1, Weekday::Monday),
//!         OfferingPeriod::new("MATH-2", 2, Weekday::Monday),
//!         OfferingPeriod::new("BIO-1", 1, Weekday::Monday),
//!     ],
//! ).unwrap();
//! let requests = vec![CourseRequest::new("ann", "MATH"), CourseRequest::new("ann", "BIO")];
//!
//! let enrollment = GreedyAssigner::new()
//!     .with_config(AssignerConfig::default().with_seed(7))
//!     .assign(&requests, &catalog)
//!     .unwrap();
//!
//! // BIO has one section, so it is placed first and MATH avoids period 1.
//! assert!(enrollment.is_complete());
//! assert_eq!(enrollment.offerings_of("ann"), vec!["BIO-1", "MATH-2"]);
//! ```

pub mod assigner;
pub mod catalog;
pub mod conflict;
pub mod error;
pub mod models;
pub mod ordering;
pub mod validation;

pub use error::EnrollError;
