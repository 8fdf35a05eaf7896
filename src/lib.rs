//! Course time-descriptor parsing and timetable conflict detection.
//!
//! Coursegrid turns the free-text meeting descriptors found in course
//! catalogs into normalized weekly intervals and checks whether a course
//! can join a personal schedule without double-booking a period.
//!
//! # Features
//!
//! - **Tolerant parsing**: CJK, English and numeric day tokens; period lists
//!   and ranges; malformed lines are dropped instead of failing the course
//! - **Conflict detection**: pure, allocation-free overlap checks suitable
//!   for every render
//! - **Catalog pipeline**: explicit raw → normalized course records
//! - **Configurable**: period count and credit ceiling come from
//!   [`ScheduleConfig`]
//!
//! # Quick Start
//!
//! ```rust
//! use coursegrid::{AddOutcome, ScheduleConfig, Scheduler};
//!
//! let json = r#"[
//!     {"seq": "0001", "title": "Algorithms", "credits": 3, "times": ["一 / 6-8 / E 219"]},
//!     {"seq": "0002", "title": "Databases",  "credits": 3, "times": ["Mon/7/B206"]},
//!     {"seq": "0003", "title": "Seminar",    "credits": 1, "times": null}
//! ]"#;
//!
//! let mut scheduler = Scheduler::from_json_str(json, ScheduleConfig::default())?;
//! assert_eq!(scheduler.select("0001")?, AddOutcome::Added);
//! assert!(scheduler.select("0002").is_err()); // Monday period 7 is taken
//! assert_eq!(scheduler.select("0003")?, AddOutcome::Added);
//! assert_eq!(scheduler.selected().total_credits(), 4);
//! # Ok::<(), coursegrid::ScheduleError>(())
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Parsing and detection
pub mod conflict;
pub mod parser;

// Catalog and schedule state
pub mod catalog;
pub mod config;
pub mod schedule;

// Core exports
pub use error::*;
pub use types::*;

pub use catalog::{Catalog, NormalizedCourse, RawCourse};
pub use config::ScheduleConfig;
pub use conflict::{
    CourseSlots, Scheduled, annotate_conflicts, conflicting_seqs, has_conflict, intervals_collide,
};
pub use parser::{LineRejection, TimeParser, parse_line, parse_times};
pub use schedule::{AddOutcome, SelectedSet};

use std::path::Path;

use tracing::warn;

/// Catalog plus the user's selection, addressed by `seq`.
///
/// The catalog is normalized once at construction; selecting a course clones
/// its normalized record into the [`SelectedSet`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    parser: TimeParser,
    catalog: Catalog,
    selected: SelectedSet,
}

impl Scheduler {
    /// Build from already-parsed raw records.
    pub fn new(raw: Vec<RawCourse>, config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        let parser = TimeParser::new(config);
        let catalog = Catalog::from_raw(raw, &parser);
        let selected = SelectedSet::new(parser.config());
        Ok(Self { parser, catalog, selected })
    }

    /// Build from a JSON catalog document.
    pub fn from_json_str(json: &str, config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        let parser = TimeParser::new(config);
        let catalog = Catalog::from_json_str(json, &parser)?;
        let selected = SelectedSet::new(parser.config());
        Ok(Self { parser, catalog, selected })
    }

    /// Build from a JSON catalog file.
    ///
    /// ```rust,no_run
    /// use coursegrid::{ScheduleConfig, Scheduler};
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() -> coursegrid::Result<()> {
    ///     let scheduler = Scheduler::open("courses.json", ScheduleConfig::default()).await?;
    ///     println!("{} courses", scheduler.catalog().len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn open(path: impl AsRef<Path>, config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        let parser = TimeParser::new(config);
        let catalog = Catalog::open(path, &parser).await?;
        let selected = SelectedSet::new(parser.config());
        Ok(Self { parser, catalog, selected })
    }

    /// Replace the catalog, keeping selected courses that still exist.
    ///
    /// Kept courses are re-read from the new catalog so their intervals
    /// reflect the refreshed descriptors. Returns the `seq`s that were
    /// dropped because they vanished or now collide.
    pub fn refresh(&mut self, raw: Vec<RawCourse>) -> Vec<String> {
        self.catalog = Catalog::from_raw(raw, &self.parser);
        let previous =
            std::mem::replace(&mut self.selected, SelectedSet::new(self.parser.config()));

        let mut dropped = Vec::new();
        for course in previous.iter() {
            let kept = match self.catalog.get(course.seq()) {
                Some(fresh) => self.selected.try_add(fresh.clone()).is_ok(),
                None => false,
            };
            if !kept {
                dropped.push(course.seq().to_string());
            }
        }
        if !dropped.is_empty() {
            warn!(?dropped, "Selected courses dropped on catalog refresh");
        }
        dropped
    }

    /// Add a catalog course to the selection.
    pub fn select(&mut self, seq: &str) -> Result<AddOutcome> {
        let course = self
            .catalog
            .get(seq)
            .ok_or_else(|| ScheduleError::UnknownCourse { seq: seq.to_string() })?;
        self.selected.try_add(course.clone())
    }

    /// Remove a course from the selection; `false` if it was not selected.
    pub fn deselect(&mut self, seq: &str) -> bool {
        self.selected.remove(seq).is_some()
    }

    /// Conflict flag for every catalog course against the current selection.
    pub fn conflict_flags(&self) -> Vec<(&NormalizedCourse, bool)> {
        annotate_conflicts(self.catalog.courses(), self.selected.courses())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> &SelectedSet {
        &self.selected
    }

    pub fn parser(&self) -> &TimeParser {
        &self.parser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{init_tracing, raw_course};

    fn scheduler() -> Scheduler {
        Scheduler::new(
            vec![
                raw_course("A", 3, &["Mon/6-8/E219"]),
                raw_course("B", 2, &["Mon/7/B206"]),
                raw_course("C", 2, &["Tue/1-2/Lab"]),
            ],
            ScheduleConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn select_and_deselect() {
        let mut scheduler = scheduler();
        assert_eq!(scheduler.select("A").unwrap(), AddOutcome::Added);
        assert!(matches!(scheduler.select("B"), Err(ScheduleError::Conflict { .. })));
        assert!(scheduler.deselect("A"));
        assert!(!scheduler.deselect("A"));
        assert_eq!(scheduler.select("B").unwrap(), AddOutcome::Added);
    }

    #[test]
    fn unknown_seq_is_an_error() {
        let mut scheduler = scheduler();
        assert!(matches!(scheduler.select("Z"), Err(ScheduleError::UnknownCourse { .. })));
    }

    #[test]
    fn conflict_flags_follow_selection() {
        let mut scheduler = scheduler();
        scheduler.select("A").unwrap();
        let flags: Vec<(&str, bool)> =
            scheduler.conflict_flags().into_iter().map(|(c, f)| (c.seq(), f)).collect();
        assert_eq!(flags, vec![("A", false), ("B", true), ("C", false)]);
    }

    #[test]
    fn refresh_drops_vanished_and_colliding_courses() {
        init_tracing();
        let mut scheduler = scheduler();
        scheduler.select("A").unwrap();
        scheduler.select("C").unwrap();

        let dropped = scheduler.refresh(vec![
            raw_course("A", 3, &["Mon/6-8/E219"]),
            raw_course("C", 2, &["Mon/8/Lab"]),
        ]);
        assert_eq!(dropped, vec!["C"]);
        assert_eq!(scheduler.selected().seqs(), vec!["A"]);

        let dropped = scheduler.refresh(vec![raw_course("C", 2, &["Mon/8/Lab"])]);
        assert_eq!(dropped, vec!["A"]);
        assert!(scheduler.selected().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ScheduleConfig { max_period: 0, credit_limit: None };
        assert!(matches!(Scheduler::new(vec![], config), Err(ScheduleError::Config { .. })));
    }
}
