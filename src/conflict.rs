//! Conflict evaluation.
//!
//! Two offerings conflict iff the slot sets they occupy intersect. A slot
//! is derived from a period row under a [`ConflictPolicy`]: by default
//! only the period id counts, so the same period id on two different
//! days is still one slot.
//!
//! [`Commitments`] holds each student's occupied slots as they accumulate
//! during a run. Testing a candidate against the occupied set is
//! equivalent to testing it pairwise against every committed offering,
//! but costs one lookup per candidate slot.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{CourseRequest, Enrollment, OfferingPeriod, Violation, ViolationType, Weekday};

/// Which fields of a period row form the conflict key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictPolicy {
    /// Period id only; day and room are ignored.
    #[default]
    PeriodOnly,
    /// Period id on a specific day.
    PeriodAndDay,
}

/// An atomic weekly time slot used as the conflict key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day component; `None` under [`ConflictPolicy::PeriodOnly`].
    pub day: Option<Weekday>,
    /// Period id.
    pub period_id: u32,
}

impl ConflictPolicy {
    /// Conflict slot of a period row.
    pub fn slot(&self, period: &OfferingPeriod) -> Slot {
        match self {
            ConflictPolicy::PeriodOnly => Slot {
                day: None,
                period_id: period.period_id,
            },
            ConflictPolicy::PeriodAndDay => Slot {
                day: Some(period.day),
                period_id: period.period_id,
            },
        }
    }
}

/// Whether two slot sets share at least one slot.
pub fn overlaps(a: &BTreeSet<Slot>, b: &BTreeSet<Slot>) -> bool {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().any(|s| large.contains(s))
}

/// Per-student commitment state of a run.
///
/// Grows monotonically: offerings are committed, never released.
#[derive(Debug, Clone, Default)]
pub struct Commitments {
    occupied: HashMap<String, HashSet<Slot>>,
    held: HashMap<String, Vec<String>>,
}

impl Commitments {
    /// Creates empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a candidate offering occupying `slots` fits the student's
    /// current commitments.
    pub fn is_eligible(&self, student_id: &str, slots: &BTreeSet<Slot>) -> bool {
        match self.occupied.get(student_id) {
            None => true,
            Some(taken) => !slots.iter().any(|s| taken.contains(s)),
        }
    }

    /// Records that the student now holds `offering_id`.
    pub fn commit(&mut self, student_id: &str, offering_id: &str, slots: &BTreeSet<Slot>) {
        self.occupied
            .entry(student_id.to_string())
            .or_default()
            .extend(slots.iter().copied());
        self.held
            .entry(student_id.to_string())
            .or_default()
            .push(offering_id.to_string());
    }

    /// Offerings the student holds, in commit order.
    pub fn load(&self, student_id: &str) -> &[String] {
        self.held.get(student_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of slots the student occupies.
    pub fn occupied_count(&self, student_id: &str) -> usize {
        self.occupied.get(student_id).map_or(0, HashSet::len)
    }

    /// Number of students with at least one commitment.
    pub fn student_count(&self) -> usize {
        self.held.len()
    }
}

/// Audits a finished enrollment against its inputs.
///
/// Checks:
/// 1. No student holds two offerings that share a slot under `policy`
/// 2. Every assignment's course was requested by its student
/// 3. Assignment ids are unique
/// 4. Assignments plus diagnostics account for every request
///
/// Returns an empty list when the enrollment is sound.
pub fn audit(
    enrollment: &Enrollment,
    requests: &[CourseRequest],
    catalog: &Catalog,
    policy: ConflictPolicy,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut by_student: HashMap<&str, Vec<&str>> = HashMap::new();
    for a in &enrollment.assignments {
        by_student
            .entry(a.student_id.as_str())
            .or_default()
            .push(a.offering_id.as_str());
    }

    for (student, held) in &by_student {
        let slot_sets: Vec<BTreeSet<Slot>> =
            held.iter().map(|o| catalog.slots(o, policy)).collect();
        for i in 0..held.len() {
            for j in (i + 1)..held.len() {
                if overlaps(&slot_sets[i], &slot_sets[j]) {
                    violations.push(Violation::new(
                        ViolationType::PeriodConflict,
                        *student,
                        format!(
                            "Student {student} holds {} and {} which share a period",
                            held[i], held[j]
                        ),
                    ));
                }
            }
        }
    }

    let requested: HashSet<(&str, &str)> = requests
        .iter()
        .map(|r| (r.student_id.as_str(), r.course_id.as_str()))
        .collect();
    for a in &enrollment.assignments {
        let course = catalog.course_of(&a.offering_id).unwrap_or(a.course_id.as_str());
        if !requested.contains(&(a.student_id.as_str(), course)) {
            violations.push(Violation::new(
                ViolationType::UnrequestedCourse,
                &a.offering_id,
                format!(
                    "Assignment {} places {} into {} of course {course}, which was not requested",
                    a.id, a.student_id, a.offering_id
                ),
            ));
        }
    }

    let mut ids = HashSet::new();
    for a in &enrollment.assignments {
        if !ids.insert(a.id) {
            violations.push(Violation::new(
                ViolationType::DuplicateAssignmentId,
                &a.student_id,
                format!("Assignment id {} is used more than once", a.id),
            ));
        }
    }

    if enrollment.request_count() != requests.len() {
        violations.push(Violation::new(
            ViolationType::UnaccountedRequests,
            "",
            format!(
                "{} assignments + {} diagnostics != {} requests",
                enrollment.assignments.len(),
                enrollment.diagnostics.len(),
                requests.len()
            ),
        ));
    }

    violations
}
