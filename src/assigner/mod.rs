//! Student-to-section assignment.
//!
//! - [`GreedyAssigner`]: ordered, single-pass assignment with per-student
//!   conflict tracking
//! - [`OfferingPicker`]: the injectable tie-break among eligible sections
//! - [`EnrollmentReport`]: fulfillment and section-balance metrics

mod config;
mod greedy;
mod picker;
mod report;

pub use config::AssignerConfig;
pub use greedy::GreedyAssigner;
pub use picker::{FirstEligible, OfferingPicker, RandomPicker};
pub use report::EnrollmentReport;
