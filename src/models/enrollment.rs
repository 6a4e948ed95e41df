//! Enrollment (solution) model.
//!
//! An enrollment is the outcome of one assignment run: the student to
//! offering assignments that were made, plus a diagnostic for every
//! request that could not be placed. Audits of a finished enrollment
//! report invariant breaches as violations.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::Weekday;
use crate::catalog::Catalog;

/// The result of an assignment run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrollment {
    /// Resolved requests, in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Unresolved requests, in the order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

/// A student placed into an offering.
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Identifier, unique within the enrollment.
    pub id: u64,
    /// Assigned student.
    pub student_id: String,
    /// Offering the student was placed in.
    pub offering_id: String,
    /// Course of the offering (denormalized for query convenience).
    pub course_id: String,
}

/// A request that could not be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Student whose request was dropped.
    pub student_id: String,
    /// Course that could not be placed.
    pub course_id: String,
    /// Why no offering could be chosen.
    pub reason: DiagnosticReason,
    /// Offerings the student already held when the request was evaluated.
    pub existing_load: Vec<String>,
}

/// Cause of an unresolved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticReason {
    /// The course has no offerings in the catalog.
    NoOfferings,
    /// Every offering shares a period with the student's current load.
    TimeConflict,
}

/// An invariant breach found when auditing an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (student or offering).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of enrollment violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two of a student's offerings share a period.
    PeriodConflict,
    /// An assignment's offering belongs to a course the student never requested.
    UnrequestedCourse,
    /// Assignment identifiers repeat.
    DuplicateAssignmentId,
    /// Assignments plus diagnostics do not cover the request list.
    UnaccountedRequests,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        id: u64,
        student_id: impl Into<String>,
        offering_id: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self {
            id,
            student_id: student_id.into(),
            offering_id: offering_id.into(),
            course_id: course_id.into(),
        }
    }
}

impl Diagnostic {
    /// Creates a diagnostic for a request whose every offering conflicts
    /// with the student's load.
    pub fn unschedulable(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        existing_load: Vec<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            reason: DiagnosticReason::TimeConflict,
            existing_load,
        }
    }

    /// Creates a diagnostic for a request of a course with no offerings.
    pub fn no_offerings(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        existing_load: Vec<String>,
    ) -> Self {
        Self {
            reason: DiagnosticReason::NoOfferings,
            ..Self::unschedulable(student_id, course_id, existing_load)
        }
    }

    /// Operator-facing message.
    pub fn message(&self) -> String {
        match self.reason {
            DiagnosticReason::NoOfferings => format!(
                "Student {} cannot be scheduled into course {}: the course has no sections",
                self.student_id, self.course_id
            ),
            DiagnosticReason::TimeConflict => format!(
                "Student {} cannot be scheduled into course {}: every section conflicts with current load {:?}",
                self.student_id, self.course_id, self.existing_load
            ),
        }
    }
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl Enrollment {
    /// Creates an empty enrollment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether every request was resolved.
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of requests accounted for (assigned + unresolved).
    pub fn request_count(&self) -> usize {
        self.assignments.len() + self.diagnostics.len()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns all assignments for a student.
    pub fn assignments_for_student(&self, student_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.student_id == student_id)
            .collect()
    }

    /// Returns all assignments into an offering.
    pub fn assignments_for_offering(&self, offering_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.offering_id == offering_id)
            .collect()
    }

    /// Returns the diagnostics recorded for a student.
    pub fn diagnostics_for_student(&self, student_id: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.student_id == student_id)
            .collect()
    }

    /// Headcount per offering (offerings with no students are absent).
    pub fn headcounts(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for a in &self.assignments {
            *counts.entry(a.offering_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Offering ids held by a student, in assignment order.
    pub fn offerings_of(&self, student_id: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.student_id == student_id)
            .map(|a| a.offering_id.as_str())
            .collect()
    }

    /// Weekly timetable of a student: (day, period) to offering id.
    ///
    /// Built from the catalog's period rows of every offering the student
    /// holds. Empty for a student with no assignments.
    pub fn timetable(
        &self,
        student_id: &str,
        catalog: &Catalog,
    ) -> BTreeMap<(Weekday, u32), String> {
        let mut table = BTreeMap::new();
        for offering in self.offerings_of(student_id) {
            for p in catalog.periods_of(offering) {
                table.insert((p.day, p.period_id), offering.to_string());
            }
        }
        table
    }

    /// Class rosters: offering id to its students, in assignment order.
    ///
    /// Offerings nobody was placed in are absent.
    pub fn rosters(&self) -> BTreeMap<String, Vec<String>> {
        let mut rosters: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for a in &self.assignments {
            rosters
                .entry(a.offering_id.clone())
                .or_default()
                .push(a.student_id.clone());
        }
        rosters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enrollment() -> Enrollment {
        let mut e = Enrollment::new();
        e.add_assignment(Assignment::new(1, "ann", "MATH-1", "MATH"));
        e.add_assignment(Assignment::new(2, "ann", "BIO-2", "BIO"));
        e.add_assignment(Assignment::new(3, "bob", "MATH-1", "MATH"));
        e.add_diagnostic(Diagnostic::unschedulable(
            "bob",
            "ART",
            vec!["MATH-1".into()],
        ));
        e
    }

    #[test]
    fn test_counts() {
        let e = sample_enrollment();
        assert_eq!(e.assignment_count(), 3);
        assert_eq!(e.request_count(), 4);
        assert!(!e.is_complete());
        assert!(Enrollment::new().is_complete());
    }

    #[test]
    fn test_queries() {
        let e = sample_enrollment();
        assert_eq!(e.assignments_for_student("ann").len(), 2);
        assert_eq!(e.assignments_for_offering("MATH-1").len(), 2);
        assert_eq!(e.diagnostics_for_student("bob").len(), 1);
        assert!(e.diagnostics_for_student("ann").is_empty());
        assert_eq!(e.offerings_of("ann"), vec!["MATH-1", "BIO-2"]);
    }

    #[test]
    fn test_headcounts() {
        let counts = sample_enrollment().headcounts();
        assert_eq!(counts["MATH-1"], 2);
        assert_eq!(counts["BIO-2"], 1);
        assert!(!counts.contains_key("ART-1"));
    }

    #[test]
    fn test_diagnostic_message() {
        let d = Diagnostic::unschedulable("bob", "ART", vec!["MATH-1".into()]);
        let msg = d.message();
        assert!(msg.contains("bob"));
        assert!(msg.contains("ART"));
        assert!(msg.contains("MATH-1"));
    }

    #[test]
    fn test_diagnostic_message_by_reason() {
        let none = Diagnostic::no_offerings("ann", "MATH", vec![]);
        assert_eq!(none.reason, DiagnosticReason::NoOfferings);
        assert!(none.message().contains("no sections"));
        assert!(!none.message().contains("conflicts"));

        let clash = Diagnostic::unschedulable("ann", "MATH", vec!["BIO-1".into()]);
        assert_eq!(clash.reason, DiagnosticReason::TimeConflict);
        assert!(clash.message().contains("conflicts"));
    }

    fn timetable_catalog() -> Catalog {
        use crate::models::{Course, Offering, OfferingPeriod};
        Catalog::build(
            vec![Course::new("MATH"), Course::new("BIO")],
            vec![Offering::new("MATH-1", "MATH"), Offering::new("BIO-2", "BIO")],
            vec![
                OfferingPeriod::new("MATH-1", 1, Weekday::Monday),
                OfferingPeriod::new("MATH-1", 1, Weekday::Wednesday),
                OfferingPeriod::new("BIO-2", 3, Weekday::Tuesday),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_timetable() {
        let e = sample_enrollment();
        let cat = timetable_catalog();

        let ann = e.timetable("ann", &cat);
        assert_eq!(ann.len(), 3);
        assert_eq!(ann[&(Weekday::Monday, 1)], "MATH-1");
        assert_eq!(ann[&(Weekday::Wednesday, 1)], "MATH-1");
        assert_eq!(ann[&(Weekday::Tuesday, 3)], "BIO-2");

        let bob = e.timetable("bob", &cat);
        assert_eq!(bob.len(), 2);
        assert!(!bob.contains_key(&(Weekday::Tuesday, 3)));
    }

    #[test]
    fn test_timetable_student_without_assignments() {
        let e = sample_enrollment();
        assert!(e.timetable("zoe", &timetable_catalog()).is_empty());
        assert!(Enrollment::new().timetable("ann", &timetable_catalog()).is_empty());
    }

    #[test]
    fn test_rosters() {
        let rosters = sample_enrollment().rosters();
        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters["MATH-1"], vec!["ann".to_string(), "bob".to_string()]);
        assert_eq!(rosters["BIO-2"], vec!["ann".to_string()]);
        assert!(Enrollment::new().rosters().is_empty());
    }

    #[test]
    fn test_enrollment_serde() {
        let e = sample_enrollment();
        let json = serde_json::to_string(&e).unwrap();
        let back: Enrollment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.assignments, e.assignments);
        assert_eq!(back.diagnostics, e.diagnostics);
    }
}
