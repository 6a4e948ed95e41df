//! Indexed, read-only view of the course catalog.
//!
//! Bridges the flat input collections (courses, offerings, period rows)
//! to the lookups the assigner needs: offering → course and period set,
//! course → weekly load, course → offerings. Built once per run; never
//! mutated afterwards.
//!
//! Offerings of a course are kept in input order so that deterministic
//! pickers produce reproducible results.

use std::collections::{BTreeSet, HashMap};

use crate::conflict::{ConflictPolicy, Slot};
use crate::error::EnrollError;
use crate::models::{Course, Offering, OfferingPeriod};

/// The static catalog of one run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    offerings: Vec<Offering>,
    periods: Vec<OfferingPeriod>,
    course_index: HashMap<String, usize>,
    offering_index: HashMap<String, usize>,
    /// course_id → indices into `offerings`, in input order.
    course_offerings: HashMap<String, Vec<usize>>,
    /// offering_id → indices into `periods`.
    offering_periods: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Indexes the catalog inputs.
    ///
    /// # Errors
    /// Duplicate course or offering ids, an offering whose course is not
    /// in the catalog, or a period row for an unknown offering.
    pub fn build(
        courses: Vec<Course>,
        offerings: Vec<Offering>,
        periods: Vec<OfferingPeriod>,
    ) -> Result<Self, EnrollError> {
        let mut course_index = HashMap::with_capacity(courses.len());
        for (i, c) in courses.iter().enumerate() {
            if course_index.insert(c.id.clone(), i).is_some() {
                return Err(EnrollError::DuplicateCourse(c.id.clone()));
            }
        }

        let mut offering_index = HashMap::with_capacity(offerings.len());
        let mut course_offerings: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, o) in offerings.iter().enumerate() {
            if !course_index.contains_key(&o.course_id) {
                return Err(EnrollError::UnknownCourse {
                    course_id: o.course_id.clone(),
                    referenced_by: format!("offering '{}'", o.id),
                });
            }
            if offering_index.insert(o.id.clone(), i).is_some() {
                return Err(EnrollError::DuplicateOffering(o.id.clone()));
            }
            course_offerings
                .entry(o.course_id.clone())
                .or_default()
                .push(i);
        }

        let mut offering_periods: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, p) in periods.iter().enumerate() {
            if !offering_index.contains_key(&p.offering_id) {
                return Err(EnrollError::UnknownOffering {
                    offering_id: p.offering_id.clone(),
                });
            }
            offering_periods
                .entry(p.offering_id.clone())
                .or_default()
                .push(i);
        }

        Ok(Self {
            courses,
            offerings,
            periods,
            course_index,
            offering_index,
            course_offerings,
            offering_periods,
        })
    }

    /// All courses, in input order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All offerings, in input order.
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// All period rows, in input order.
    pub fn periods(&self) -> &[OfferingPeriod] {
        &self.periods
    }

    /// Looks up a course.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.course_index.get(course_id).map(|&i| &self.courses[i])
    }

    /// Looks up an offering.
    pub fn offering(&self, offering_id: &str) -> Option<&Offering> {
        self.offering_index
            .get(offering_id)
            .map(|&i| &self.offerings[i])
    }

    /// Whether the course is in the catalog.
    pub fn has_course(&self, course_id: &str) -> bool {
        self.course_index.contains_key(course_id)
    }

    /// Weekly period load of a course.
    pub fn periods_per_week(&self, course_id: &str) -> Option<u32> {
        self.course(course_id).map(|c| c.periods_per_week)
    }

    /// Course an offering belongs to.
    pub fn course_of(&self, offering_id: &str) -> Option<&str> {
        self.offering(offering_id).map(|o| o.course_id.as_str())
    }

    /// Offerings of a course, in input order. Empty for unknown courses.
    pub fn offerings_for<'a>(&'a self, course_id: &str) -> impl Iterator<Item = &'a Offering> + 'a {
        self.course_offerings
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.offerings[i])
    }

    /// Number of offerings of a course.
    pub fn offering_count(&self, course_id: &str) -> usize {
        self.course_offerings.get(course_id).map_or(0, Vec::len)
    }

    /// Period rows of an offering.
    pub fn periods_of<'a>(&'a self, offering_id: &str) -> impl Iterator<Item = &'a OfferingPeriod> + 'a {
        self.offering_periods
            .get(offering_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.periods[i])
    }

    /// Conflict slots an offering occupies under `policy`.
    ///
    /// An offering without period rows occupies nothing.
    pub fn slots(&self, offering_id: &str, policy: ConflictPolicy) -> BTreeSet<Slot> {
        self.periods_of(offering_id).map(|p| policy.slot(p)).collect()
    }

    /// Slot sets of every offering, keyed by offering id.
    pub fn slot_table(&self, policy: ConflictPolicy) -> HashMap<&str, BTreeSet<Slot>> {
        self.offerings
            .iter()
            .map(|o| (o.id.as_str(), self.slots(&o.id, policy)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn sample_catalog() -> Catalog {
        Catalog::build(
            vec![
                Course::new("MATH").with_periods_per_week(5),
                Course::new("ART").with_periods_per_week(2),
            ],
            vec![
                Offering::new("MATH-1", "MATH"),
                Offering::new("ART-1", "ART"),
                Offering::new("MATH-2", "MATH").with_section(2),
            ],
            vec![
                OfferingPeriod::new("MATH-1", 1, Weekday::Monday),
                OfferingPeriod::new("MATH-1", 1, Weekday::Tuesday),
                OfferingPeriod::new("MATH-2", 2, Weekday::Monday),
                OfferingPeriod::new("ART-1", 3, Weekday::Friday),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookups() {
        let cat = sample_catalog();
        assert_eq!(cat.periods_per_week("MATH"), Some(5));
        assert_eq!(cat.periods_per_week("NONE"), None);
        assert_eq!(cat.course_of("ART-1"), Some("ART"));
        assert_eq!(cat.offering_count("MATH"), 2);
        assert_eq!(cat.offering_count("NONE"), 0);
        assert!(cat.has_course("ART"));
    }

    #[test]
    fn test_offerings_keep_input_order() {
        let cat = sample_catalog();
        let ids: Vec<&str> = cat.offerings_for("MATH").map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["MATH-1", "MATH-2"]);
        assert_eq!(cat.offerings_for("NONE").count(), 0);
    }

    #[test]
    fn test_slots_by_policy() {
        let cat = sample_catalog();
        // Same period id on two days collapses under PeriodOnly.
        assert_eq!(cat.slots("MATH-1", ConflictPolicy::PeriodOnly).len(), 1);
        assert_eq!(cat.slots("MATH-1", ConflictPolicy::PeriodAndDay).len(), 2);
        assert!(cat.slots("UNKNOWN", ConflictPolicy::PeriodOnly).is_empty());
    }

    #[test]
    fn test_slot_table_covers_all_offerings() {
        let cat = sample_catalog();
        let table = cat.slot_table(ConflictPolicy::PeriodOnly);
        assert_eq!(table.len(), 3);
        assert!(table.contains_key("MATH-2"));
    }

    #[test]
    fn test_duplicate_course() {
        let err = Catalog::build(vec![Course::new("A"), Course::new("A")], vec![], vec![])
            .unwrap_err();
        assert_eq!(err, EnrollError::DuplicateCourse("A".into()));
    }

    #[test]
    fn test_duplicate_offering() {
        let err = Catalog::build(
            vec![Course::new("A")],
            vec![Offering::new("A-1", "A"), Offering::new("A-1", "A")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, EnrollError::DuplicateOffering("A-1".into()));
    }

    #[test]
    fn test_offering_with_unknown_course() {
        let err = Catalog::build(vec![], vec![Offering::new("X-1", "X")], vec![]).unwrap_err();
        assert!(matches!(err, EnrollError::UnknownCourse { ref course_id, .. } if course_id == "X"));
    }

    #[test]
    fn test_period_with_unknown_offering() {
        let err = Catalog::build(
            vec![Course::new("A")],
            vec![Offering::new("A-1", "A")],
            vec![OfferingPeriod::new("A-9", 1, Weekday::Monday)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            EnrollError::UnknownOffering {
                offering_id: "A-9".into()
            }
        );
    }
}
