//! Request ordering for the greedy assigner.
//!
//! Requests are resolved one at a time, so the order decides which
//! students get first pick of the free periods. Ordering is built from
//! rules applied as independent **stable** sort passes: the last pass is
//! the dominant key, and each earlier pass survives only as a tie-break
//! inside the later ones.
//!
//! # Usage
//!
//! ```
//! use u_enroll::ordering::{rules, RequestOrderer};
//!
//! // Same as RequestOrderer::standard(): more weekly periods first,
//! // then (dominant) fewer sections first.
//! let orderer = RequestOrderer::new()
//!     .then_by(rules::MostPeriodsPerWeek)
//!     .then_by(rules::FewestOfferings);
//! ```
//!
//! # References
//!
//! - Knuth (1998), "The Art of Computer Programming", Vol. 3, 5.2.5:
//!   least-significant-key-first stable passes
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod orderer;
pub mod rules;

pub use orderer::RequestOrderer;

use crate::catalog::Catalog;
use crate::models::CourseRequest;
use std::fmt::Debug;

/// Sort key returned by an ordering rule.
///
/// Lower keys are resolved first.
pub type OrderKey = i64;

/// A rule that ranks course requests.
///
/// # Key Convention
/// **Lower key = resolved earlier.** Rules that prefer large values
/// return them negated.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "MPW", "FO").
    fn name(&self) -> &'static str;

    /// Ranks a request against the catalog.
    fn key(&self, request: &CourseRequest, catalog: &Catalog) -> OrderKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
