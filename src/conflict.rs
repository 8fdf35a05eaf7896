//! Timetable conflict detection
//!
//! Decides whether adding a candidate course to a set of selected courses
//! would double-book any period. The checks are pure functions of their
//! inputs and are cheap enough to run on every render.
//!
//! Two rules short-circuit to "no conflict":
//! - the candidate's `seq` is already selected (re-selecting is idempotent)
//! - the candidate has no intervals (an unscheduled course cannot collide)
//!
//! A candidate whose descriptors only partly parsed is checked against the
//! intervals that did parse.

use crate::types::Interval;

/// Anything that occupies slots on the weekly grid.
pub trait Scheduled {
    /// Offering sequence number, unique within a catalog.
    fn seq(&self) -> &str;

    /// Normalized meeting intervals.
    fn intervals(&self) -> &[Interval];
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn seq(&self) -> &str {
        (**self).seq()
    }

    fn intervals(&self) -> &[Interval] {
        (**self).intervals()
    }
}

/// Minimal [`Scheduled`] value: a sequence number and its intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSlots {
    pub seq: String,
    pub intervals: Vec<Interval>,
}

impl CourseSlots {
    pub fn new(seq: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self { seq: seq.into(), intervals }
    }
}

impl Scheduled for CourseSlots {
    fn seq(&self) -> &str {
        &self.seq
    }

    fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

/// Whether `a` and `b` share any (day, period) cell.
pub fn intervals_collide(a: &[Interval], b: &[Interval]) -> bool {
    a.iter().any(|x| b.iter().any(|y| x.overlaps(y)))
}

/// Whether scheduling `candidate` would collide with any selected course.
///
/// Stops at the first overlapping pair.
pub fn has_conflict<C, S>(candidate: &C, selected: &[S]) -> bool
where
    C: Scheduled + ?Sized,
    S: Scheduled,
{
    if is_exempt(candidate, selected) {
        return false;
    }
    selected.iter().any(|course| intervals_collide(candidate.intervals(), course.intervals()))
}

/// Sequence numbers of every selected course that collides with `candidate`.
///
/// Empty under the same rules that make [`has_conflict`] return `false`.
pub fn conflicting_seqs<C, S>(candidate: &C, selected: &[S]) -> Vec<String>
where
    C: Scheduled + ?Sized,
    S: Scheduled,
{
    if is_exempt(candidate, selected) {
        return Vec::new();
    }
    selected
        .iter()
        .filter(|course| intervals_collide(candidate.intervals(), course.intervals()))
        .map(|course| course.seq().to_string())
        .collect()
}

/// Pair every course with its conflict flag against `selected`.
pub fn annotate_conflicts<'a, C, S>(courses: &'a [C], selected: &[S]) -> Vec<(&'a C, bool)>
where
    C: Scheduled,
    S: Scheduled,
{
    courses.iter().map(|course| (course, has_conflict(course, selected))).collect()
}

fn is_exempt<C, S>(candidate: &C, selected: &[S]) -> bool
where
    C: Scheduled + ?Sized,
    S: Scheduled,
{
    candidate.intervals().is_empty()
        || selected.iter().any(|course| course.seq() == candidate.seq())
}
