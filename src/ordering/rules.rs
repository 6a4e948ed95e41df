//! Built-in ordering rules.
//!
//! All rules return lower keys for requests that should be resolved first.
//! A course missing from the catalog ranks as if it had no load and no
//! sections; the assigner rejects such requests before ordering.

use super::{OrderKey, OrderingRule};
use crate::catalog::Catalog;
use crate::models::CourseRequest;

/// Most Periods per Week.
///
/// Heavy courses claim many slots, so they are placed while the
/// student's week is still empty.
#[derive(Debug, Clone, Copy)]
pub struct MostPeriodsPerWeek;

impl OrderingRule for MostPeriodsPerWeek {
    fn name(&self) -> &'static str {
        "MPW"
    }

    fn key(&self, request: &CourseRequest, catalog: &Catalog) -> OrderKey {
        -(catalog.periods_per_week(&request.course_id).unwrap_or(0) as OrderKey)
    }

    fn description(&self) -> &'static str {
        "Most Periods per Week"
    }
}

/// Fewest Offerings.
///
/// Courses with few sections have the fewest ways to fit around other
/// commitments, so they are placed first.
#[derive(Debug, Clone, Copy)]
pub struct FewestOfferings;

impl OrderingRule for FewestOfferings {
    fn name(&self) -> &'static str {
        "FO"
    }

    fn key(&self, request: &CourseRequest, catalog: &Catalog) -> OrderKey {
        catalog.offering_count(&request.course_id) as OrderKey
    }

    fn description(&self) -> &'static str {
        "Fewest Offerings"
    }
}
