//! The user's personal schedule
//!
//! [`SelectedSet`] holds the courses a user has added, keyed by `seq` and
//! kept in insertion order. Adding goes through the conflict detector and
//! the optional credit ceiling; removing is unconditional.

use tracing::debug;

use crate::catalog::NormalizedCourse;
use crate::config::ScheduleConfig;
use crate::conflict::{Scheduled, conflicting_seqs};
use crate::types::Day;
use crate::{Result, ScheduleError};

/// Result of a successful [`SelectedSet::try_add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The course joined the schedule.
    Added,
    /// A course with the same `seq` was already selected; nothing changed.
    AlreadySelected,
}

/// Courses selected into one schedule. No `seq` appears twice.
#[derive(Debug, Clone, Default)]
pub struct SelectedSet {
    courses: Vec<NormalizedCourse>,
    credit_limit: Option<u32>,
}

impl SelectedSet {
    /// Empty schedule using the credit ceiling from `config`.
    pub fn new(config: &ScheduleConfig) -> Self {
        Self { courses: Vec::new(), credit_limit: config.credit_limit }
    }

    /// Empty schedule with no credit ceiling.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Add a course unless it collides or breaks the credit ceiling.
    ///
    /// Re-adding a selected `seq` is a no-op. Courses without intervals
    /// never collide.
    pub fn try_add(&mut self, course: NormalizedCourse) -> Result<AddOutcome> {
        if self.contains(course.seq()) {
            return Ok(AddOutcome::AlreadySelected);
        }

        let with = conflicting_seqs(&course, &self.courses);
        if !with.is_empty() {
            debug!(seq = course.seq(), ?with, "Rejecting course with time conflict");
            return Err(ScheduleError::conflict(course.seq(), with));
        }

        if let Some(limit) = self.credit_limit {
            let requested = self.total_credits().saturating_add(course.credits());
            if requested > limit {
                debug!(seq = course.seq(), requested, limit, "Rejecting course over credit limit");
                return Err(ScheduleError::CreditLimit {
                    seq: course.seq().to_string(),
                    requested,
                    limit,
                });
            }
        }

        debug!(seq = course.seq(), credits = course.credits(), "Added course to schedule");
        self.courses.push(course);
        Ok(AddOutcome::Added)
    }

    /// Remove a course by `seq`, returning it if it was selected.
    pub fn remove(&mut self, seq: &str) -> Option<NormalizedCourse> {
        let position = self.courses.iter().position(|course| course.seq() == seq)?;
        Some(self.courses.remove(position))
    }

    pub fn contains(&self, seq: &str) -> bool {
        self.courses.iter().any(|course| course.seq() == seq)
    }

    /// Whether `candidate` would collide with the current selection.
    pub fn conflicts_with(&self, candidate: &impl Scheduled) -> bool {
        crate::conflict::has_conflict(candidate, &self.courses)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedCourse> {
        self.courses.iter()
    }

    /// Selected courses in insertion order.
    pub fn courses(&self) -> &[NormalizedCourse] {
        &self.courses
    }

    pub fn seqs(&self) -> Vec<&str> {
        self.courses.iter().map(|course| course.seq()).collect()
    }

    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(NormalizedCourse::credits).fold(0, u32::saturating_add)
    }

    /// Credits left under the ceiling; `None` when there is no ceiling.
    pub fn remaining_credits(&self) -> Option<u32> {
        self.credit_limit.map(|limit| limit.saturating_sub(self.total_credits()))
    }

    /// First selected course occupying `period` on `day`.
    pub fn course_at(&self, day: Day, period: u8) -> Option<&NormalizedCourse> {
        self.courses
            .iter()
            .find(|course| course.intervals().iter().any(|interval| interval.covers(day, period)))
    }
}

impl<'a> IntoIterator for &'a SelectedSet {
    type Item = &'a NormalizedCourse;
    type IntoIter = std::slice::Iter<'a, NormalizedCourse>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawCourse;
    use crate::parser::TimeParser;

    fn course(seq: &str, credits: u32, times: &[&str]) -> NormalizedCourse {
        RawCourse {
            seq: seq.into(),
            credits,
            times: Some(times.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
        .normalize(&TimeParser::default())
    }

    #[test]
    fn adds_non_conflicting_courses() {
        let mut set = SelectedSet::unlimited();
        assert_eq!(set.try_add(course("A", 3, &["一/6-8/E219"])).unwrap(), AddOutcome::Added);
        assert_eq!(set.try_add(course("B", 2, &["一/9-10/E220"])).unwrap(), AddOutcome::Added);
        assert_eq!(set.seqs(), vec!["A", "B"]);
        assert_eq!(set.total_credits(), 5);
    }

    #[test]
    fn rejects_conflicting_course() {
        let mut set = SelectedSet::unlimited();
        set.try_add(course("A", 3, &["Mon/6-8/E219"])).unwrap();

        let err = set.try_add(course("B", 2, &["Mon/7/Lab"])).unwrap_err();
        match err {
            ScheduleError::Conflict { seq, with } => {
                assert_eq!(seq, "B");
                assert_eq!(with, vec!["A"]);
            }
            other => panic!("Expected Conflict, got {other:?}"),
        }
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn re_adding_is_idempotent() {
        let mut set = SelectedSet::unlimited();
        set.try_add(course("A", 3, &["Mon/6-8/E219"])).unwrap();
        assert_eq!(
            set.try_add(course("A", 3, &["Mon/6-8/E219"])).unwrap(),
            AddOutcome::AlreadySelected
        );
        assert_eq!(set.len(), 1);
        assert_eq!(set.total_credits(), 3);
    }

    #[test]
    fn unscheduled_courses_always_fit() {
        let mut set = SelectedSet::unlimited();
        set.try_add(course("A", 3, &["Mon/1-14/Hall"])).unwrap();
        assert_eq!(set.try_add(course("B", 2, &[])).unwrap(), AddOutcome::Added);
        assert_eq!(set.try_add(course("C", 2, &["garbage"])).unwrap(), AddOutcome::Added);
    }

    #[test]
    fn credit_limit_is_enforced() {
        let config = ScheduleConfig { credit_limit: Some(5), ..Default::default() };
        let mut set = SelectedSet::new(&config);
        set.try_add(course("A", 3, &["Mon/1/X"])).unwrap();
        assert_eq!(set.remaining_credits(), Some(2));

        let err = set.try_add(course("B", 3, &["Tue/1/X"])).unwrap_err();
        assert!(matches!(err, ScheduleError::CreditLimit { requested: 6, limit: 5, .. }));

        set.try_add(course("C", 2, &["Tue/1/X"])).unwrap();
        assert_eq!(set.remaining_credits(), Some(0));
        assert_eq!(SelectedSet::unlimited().remaining_credits(), None);
    }

    #[test]
    fn remove_frees_the_slot() {
        let mut set = SelectedSet::unlimited();
        set.try_add(course("A", 3, &["Mon/6-8/E219"])).unwrap();
        let candidate = course("B", 2, &["Mon/7/Lab"]);
        assert!(set.conflicts_with(&candidate));

        let removed = set.remove("A").unwrap();
        assert_eq!(removed.seq(), "A");
        assert!(set.remove("A").is_none());
        assert!(!set.conflicts_with(&candidate));
        assert_eq!(set.try_add(candidate).unwrap(), AddOutcome::Added);
    }

    #[test]
    fn course_at_finds_grid_occupant() {
        let mut set = SelectedSet::unlimited();
        set.try_add(course("A", 3, &["二/3-4/RoomA", "二/6,7,8/RoomB"])).unwrap();

        assert_eq!(set.course_at(Day::Tuesday, 3).map(|c| c.seq()), Some("A"));
        assert_eq!(set.course_at(Day::Tuesday, 7).map(|c| c.seq()), Some("A"));
        assert!(set.course_at(Day::Tuesday, 5).is_none());
        assert!(set.course_at(Day::Monday, 3).is_none());
    }
}
