//! Greedy first-fit / random-fit assigner.
//!
//! # Algorithm
//!
//! 1. Order requests with the [`RequestOrderer`] (scarce courses first).
//! 2. For each request, collect the offerings of its course.
//! 3. Keep those whose slots are free in the student's commitments.
//! 4. None left: record a diagnostic and move on.
//! 5. Otherwise let the picker choose one, create the assignment, and
//!    commit its slots before the next request is evaluated.
//!
//! Requests are processed strictly one after another; every commitment is
//! visible to the very next eligibility check.
//!
//! # Complexity
//! O(r * o * p) where r=requests, o=offerings/course, p=periods/offering.

use std::collections::{BTreeSet, HashMap};

use super::{AssignerConfig, OfferingPicker, RandomPicker};
use crate::catalog::Catalog;
use crate::conflict::{Commitments, Slot};
use crate::error::EnrollError;
use crate::models::{Assignment, CourseRequest, Diagnostic, Enrollment, Offering};
use crate::ordering::RequestOrderer;
use crate::validation;

/// Greedy, priority-ordered sectioning assigner.
///
/// # Example
///
/// ```
/// use u_enroll::assigner::GreedyAssigner;
/// use u_enroll::catalog::Catalog;
/// use u_enroll::models::{Course, CourseRequest, Offering, OfferingPeriod, Weekday};
///
/// let catalog = Catalog::build(
///     vec![Course::new("MATH").with_periods_per_week(5)],
///     vec![Offering::new("MATH-1", "MATH").with_capacity(30)],
///     vec![OfferingPeriod::new("MATH-1", 1, Weekday::Monday)],
/// ).unwrap();
/// let requests = vec![CourseRequest::new("ann", "MATH"), CourseRequest::new("bob", "MATH")];
///
/// let enrollment = GreedyAssigner::new().assign(&requests, &catalog).unwrap();
/// assert_eq!(enrollment.assignment_count(), 2);
/// assert!(enrollment.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    config: AssignerConfig,
    orderer: RequestOrderer,
}

impl GreedyAssigner {
    /// Creates an assigner with the default config and standard ordering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AssignerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the request orderer.
    pub fn with_orderer(mut self, orderer: RequestOrderer) -> Self {
        self.orderer = orderer;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &AssignerConfig {
        &self.config
    }

    /// Assigns students using a uniform random picker.
    ///
    /// The picker is seeded from `config.seed` when set.
    pub fn assign(
        &self,
        requests: &[CourseRequest],
        catalog: &Catalog,
    ) -> Result<Enrollment, EnrollError> {
        let mut picker = match self.config.seed {
            Some(seed) => RandomPicker::from_seed(seed),
            None => RandomPicker::from_entropy(),
        };
        self.assign_with(requests, catalog, &mut picker)
    }

    /// Assigns students, delegating the choice among eligible offerings
    /// to `picker`.
    ///
    /// # Errors
    /// Invalid config; a request for a course missing from the catalog;
    /// any validation error in strict mode; a picker index out of range.
    pub fn assign_with<P: OfferingPicker + ?Sized>(
        &self,
        requests: &[CourseRequest],
        catalog: &Catalog,
        picker: &mut P,
    ) -> Result<Enrollment, EnrollError> {
        self.config.validate().map_err(EnrollError::InvalidConfig)?;

        if self.config.strict {
            validation::validate_input_with(
                catalog.courses(),
                catalog.offerings(),
                catalog.periods(),
                requests,
                self.config.max_period_id,
            )
            .map_err(EnrollError::Invalid)?;
        }

        if let Some(r) = requests.iter().find(|r| !catalog.has_course(&r.course_id)) {
            return Err(EnrollError::UnknownCourse {
                course_id: r.course_id.clone(),
                referenced_by: format!("a request of student '{}'", r.student_id),
            });
        }

        let slots = catalog.slot_table(self.config.conflict_policy);
        let order = self.orderer.order(requests, catalog);

        let mut commitments = Commitments::new();
        let mut enrollment = Enrollment::new();
        let mut next_id: u64 = 1;

        for idx in order {
            let request = &requests[idx];
            let eligible = eligible_offerings(request, catalog, &slots, &commitments);

            if eligible.is_empty() {
                let load = commitments.load(&request.student_id).to_vec();
                let diagnostic = if catalog.offering_count(&request.course_id) == 0 {
                    Diagnostic::no_offerings(&request.student_id, &request.course_id, load)
                } else {
                    Diagnostic::unschedulable(&request.student_id, &request.course_id, load)
                };
                log::warn!("{}", diagnostic.message());
                enrollment.add_diagnostic(diagnostic);
                continue;
            }

            let pick = picker.pick(&eligible);
            let chosen = *eligible.get(pick).ok_or(EnrollError::PickOutOfRange {
                index: pick,
                len: eligible.len(),
            })?;

            let assignment = Assignment::new(
                next_id,
                &request.student_id,
                &chosen.id,
                &chosen.course_id,
            );
            next_id += 1;

            if let Some(taken) = slots.get(chosen.id.as_str()) {
                commitments.commit(&request.student_id, &chosen.id, taken);
            }
            log::debug!(
                "assignment {}: student {} -> offering {} ({} of {} eligible)",
                assignment.id,
                assignment.student_id,
                assignment.offering_id,
                pick + 1,
                eligible.len()
            );
            enrollment.add_assignment(assignment);
        }

        log::info!(
            "assigned {} of {} requests ({} unresolved, {} students)",
            enrollment.assignments.len(),
            requests.len(),
            enrollment.diagnostics.len(),
            commitments.student_count()
        );

        Ok(enrollment)
    }
}

/// Offerings of the requested course that fit the student's commitments,
/// in catalog order.
fn eligible_offerings<'a>(
    request: &CourseRequest,
    catalog: &'a Catalog,
    slots: &HashMap<&str, BTreeSet<Slot>>,
    commitments: &Commitments,
) -> Vec<&'a Offering> {
    catalog
        .offerings_for(&request.course_id)
        .filter(|o| {
            slots
                .get(o.id.as_str())
                .map_or(true, |s| commitments.is_eligible(&request.student_id, s))
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::assigner::FirstEligible;
    use crate::conflict::{audit, ConflictPolicy};
    use crate::models::{Course, Offering, OfferingPeriod, Weekday};
    use proptest::prelude::*;

    /// Random catalog: up to 6 courses, each with 1-3 sections meeting in
    /// 1-3 of periods 1..=8, and requests from up to 5 students.
    fn problem() -> impl Strategy<Value = (Catalog, Vec<CourseRequest>)> {
        let sections = prop::collection::vec(prop::collection::btree_set(1u32..=8, 1..=3), 1..=3);
        let courses = prop::collection::vec((0u32..=5, sections), 1..=6);
        (courses, prop::collection::vec((0usize..5, 0usize..6), 0..=20)).prop_map(
            |(courses, picks)| {
                let mut course_rows = Vec::new();
                let mut offering_rows = Vec::new();
                let mut period_rows = Vec::new();
                for (c, (ppw, secs)) in courses.iter().enumerate() {
                    let cid = format!("C{c}");
                    course_rows.push(Course::new(&cid).with_periods_per_week(*ppw));
                    for (s, periods) in secs.iter().enumerate() {
                        let oid = format!("{cid}-{s}");
                        offering_rows.push(Offering::new(&oid, &cid).with_section(s as i32 + 1));
                        for &p in periods {
                            period_rows.push(OfferingPeriod::new(&oid, p, Weekday::Monday));
                        }
                    }
                }
                let mut requests: Vec<CourseRequest> = picks
                    .into_iter()
                    .map(|(s, c)| CourseRequest::new(format!("S{s}"), format!("C{}", c % courses.len())))
                    .collect();
                // One request per student per course.
                let mut seen = std::collections::HashSet::new();
                requests.retain(|r| seen.insert(r.clone()));
                let catalog = Catalog::build(course_rows, offering_rows, period_rows).unwrap();
                (catalog, requests)
            },
        )
    }

    proptest! {
        #[test]
        fn invariants_hold((catalog, requests) in problem(), seed in any::<u64>()) {
            let e = GreedyAssigner::new()
                .with_config(AssignerConfig::default().with_seed(seed))
                .assign(&requests, &catalog)
                .unwrap();

            // No conflicts, course match, unique ids, completeness.
            prop_assert!(audit(&e, &requests, &catalog, ConflictPolicy::PeriodOnly).is_empty());
            prop_assert_eq!(e.request_count(), requests.len());
            for a in &e.assignments {
                prop_assert_eq!(catalog.course_of(&a.offering_id), Some(a.course_id.as_str()));
            }
        }

        #[test]
        fn deterministic_picker_is_reproducible((catalog, requests) in problem()) {
            let assigner = GreedyAssigner::new();
            let a = assigner.assign_with(&requests, &catalog, &mut FirstEligible).unwrap();
            let b = assigner.assign_with(&requests, &catalog, &mut FirstEligible).unwrap();
            prop_assert_eq!(a.assignments, b.assignments);
            prop_assert_eq!(a.diagnostics, b.diagnostics);
        }

        #[test]
        fn same_seed_is_reproducible((catalog, requests) in problem(), seed in any::<u64>()) {
            let assigner = GreedyAssigner::new()
                .with_config(AssignerConfig::default().with_seed(seed));
            let a = assigner.assign(&requests, &catalog).unwrap();
            let b = assigner.assign(&requests, &catalog).unwrap();
            prop_assert_eq!(a.assignments, b.assignments);
        }

        #[test]
        fn satisfiable_input_always_completes(n_courses in 1usize..=8, n_students in 1usize..=6, seed in any::<u64>()) {
            // Course k has sections at periods 2k+1 and 2k+2: no two courses
            // can ever collide, so every request must be placed.
            let courses: Vec<Course> = (0..n_courses).map(|k| Course::new(format!("C{k}"))).collect();
            let mut offerings = Vec::new();
            let mut periods = Vec::new();
            for k in 0..n_courses {
                for s in 0..2u32 {
                    let oid = format!("C{k}-{s}");
                    offerings.push(Offering::new(&oid, format!("C{k}")).with_section(s as i32 + 1));
                    periods.push(OfferingPeriod::new(&oid, 2 * k as u32 + s + 1, Weekday::Monday));
                }
            }
            let catalog = Catalog::build(courses, offerings, periods).unwrap();
            let requests: Vec<CourseRequest> = (0..n_students)
                .flat_map(|s| (0..n_courses).map(move |k| CourseRequest::new(format!("S{s}"), format!("C{k}"))))
                .collect();

            let e = GreedyAssigner::new()
                .with_config(AssignerConfig::default().with_seed(seed))
                .assign(&requests, &catalog)
                .unwrap();
            prop_assert!(e.is_complete());
            prop_assert_eq!(e.assignment_count(), requests.len());
        }
    }
}
