//! Enrollment quality metrics.
//!
//! Summarizes a finished enrollment against its catalog.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fulfillment rate | assigned / (assigned + unresolved) |
//! | Headcount | Students per offering, including empty offerings |
//! | Section spread | max - min headcount across a course's offerings |
//! | Students affected | Distinct students with at least one unresolved request |
//!
//! Spread is a report only; the assigner never rebalances sections.
//! Over-capacity compares headcount with `Offering::capacity`, which
//! defaults to 1.
//!
//! # Reference
//! Carter (2001), "A Comprehensive Course Timetabling and Student
//! Scheduling System at the University of Waterloo", PATAT 2000, LNCS 2079

use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::models::Enrollment;

/// Enrollment performance indicators.
#[derive(Debug, Clone)]
pub struct EnrollmentReport {
    /// Requests resolved into assignments.
    pub assigned: usize,
    /// Requests dropped with a diagnostic.
    pub unresolved: usize,
    /// Fraction of requests resolved (0.0..1.0).
    pub fulfillment_rate: f64,
    /// Students per offering, for every offering in the catalog.
    pub headcount_by_offering: HashMap<String, usize>,
    /// Max minus min headcount across each course's offerings.
    pub spread_by_course: HashMap<String, usize>,
    /// Offerings whose headcount exceeds their capacity.
    pub over_capacity: Vec<String>,
    /// Distinct students with at least one unresolved request.
    pub students_with_gaps: usize,
}

impl EnrollmentReport {
    /// Computes the report.
    pub fn calculate(enrollment: &Enrollment, catalog: &Catalog) -> Self {
        let assigned = enrollment.assignments.len();
        let unresolved = enrollment.diagnostics.len();
        let total = assigned + unresolved;

        let fulfillment_rate = if total == 0 {
            1.0
        } else {
            assigned as f64 / total as f64
        };

        let mut headcount_by_offering: HashMap<String, usize> = catalog
            .offerings()
            .iter()
            .map(|o| (o.id.clone(), 0))
            .collect();
        for (offering, count) in enrollment.headcounts() {
            headcount_by_offering.insert(offering, count);
        }

        let mut spread_by_course = HashMap::new();
        for course in catalog.courses() {
            let counts: Vec<usize> = catalog
                .offerings_for(&course.id)
                .map(|o| headcount_by_offering.get(&o.id).copied().unwrap_or(0))
                .collect();
            if let (Some(max), Some(min)) = (counts.iter().max(), counts.iter().min()) {
                spread_by_course.insert(course.id.clone(), max - min);
            }
        }

        let mut over_capacity: Vec<String> = catalog
            .offerings()
            .iter()
            .filter(|o| {
                let count = headcount_by_offering.get(&o.id).copied().unwrap_or(0);
                count > o.capacity.max(0) as usize
            })
            .map(|o| o.id.clone())
            .collect();
        over_capacity.sort();

        let students_with_gaps = enrollment
            .diagnostics
            .iter()
            .map(|d| d.student_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            assigned,
            unresolved,
            fulfillment_rate,
            headcount_by_offering,
            spread_by_course,
            over_capacity,
            students_with_gaps,
        }
    }

    /// Largest section spread of any course (0 for an empty catalog).
    pub fn max_spread(&self) -> usize {
        self.spread_by_course.values().copied().max().unwrap_or(0)
    }

    /// Whether the enrollment meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_fulfillment: f64, max_spread: usize) -> bool {
        self.fulfillment_rate >= min_fulfillment && self.max_spread() <= max_spread
    }
}
