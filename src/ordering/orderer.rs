//! Multi-pass request orderer.
//!
//! Each rule is applied as its own stable sort over the order left by the
//! previous pass. Pass order matters: the last rule added is the primary
//! key, and rules added before it break its ties.

use std::sync::Arc;

use super::{rules, OrderKey, OrderingRule};
use crate::catalog::Catalog;
use crate::models::CourseRequest;

/// A composable request orderer.
///
/// # Example
/// ```
/// use u_enroll::catalog::Catalog;
/// use u_enroll::models::{Course, CourseRequest, Offering};
/// use u_enroll::ordering::RequestOrderer;
///
/// let catalog = Catalog::build(
///     vec![Course::new("GYM"), Course::new("MATH")],
///     vec![
///         Offering::new("GYM-1", "GYM"),
///         Offering::new("GYM-2", "GYM").with_section(2),
///         Offering::new("MATH-1", "MATH"),
///     ],
///     vec![],
/// ).unwrap();
/// let requests = vec![CourseRequest::new("ann", "GYM"), CourseRequest::new("ann", "MATH")];
///
/// let order = RequestOrderer::standard().order(&requests, &catalog);
/// assert_eq!(order, vec![1, 0]); // MATH has a single section
/// ```
#[derive(Clone)]
pub struct RequestOrderer {
    passes: Vec<Arc<dyn OrderingRule>>,
}

impl RequestOrderer {
    /// Creates an orderer with no passes (input order is kept).
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// The standard sectioning order.
    ///
    /// Pass 1 sorts by weekly periods, descending. Pass 2 sorts by section
    /// count, ascending, and therefore dominates: scarce courses go first,
    /// heavier courses first among equally scarce ones.
    pub fn standard() -> Self {
        Self::new()
            .then_by(rules::MostPeriodsPerWeek)
            .then_by(rules::FewestOfferings)
    }

    /// Appends a stable sort pass.
    pub fn then_by<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.passes.push(Arc::new(rule));
        self
    }

    /// Number of passes.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Returns indices into `requests` in resolution order.
    pub fn order(&self, requests: &[CourseRequest], catalog: &Catalog) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..requests.len()).collect();

        for rule in &self.passes {
            let keys: Vec<OrderKey> = requests.iter().map(|r| rule.key(r, catalog)).collect();
            // `sort_by_key` is stable.
            indices.sort_by_key(|&i| keys[i]);
        }

        indices
    }

    /// Returns the requests in resolution order.
    pub fn order_requests(&self, requests: &[CourseRequest], catalog: &Catalog) -> Vec<CourseRequest> {
        self.order(requests, catalog)
            .into_iter()
            .map(|i| requests[i].clone())
            .collect()
    }
}

impl Default for RequestOrderer {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RequestOrderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestOrderer")
            .field(
                "passes",
                &self.passes.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
