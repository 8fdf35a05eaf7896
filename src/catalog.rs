//! Course catalog and the raw → normalized pipeline
//!
//! Catalog records arrive as JSON with a `times` list of descriptor lines.
//! Normalization runs each record through the [`TimeParser`] once and keeps
//! the resulting intervals next to the untouched record:
//!
//! ```text
//! RawCourse { times } ──normalize──► NormalizedCourse { raw, intervals }
//! ```
//!
//! Intervals are derived only from `times`, so normalizing the same record
//! twice gives the same course. Refreshing a catalog re-runs normalization
//! from the raw records.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::conflict::Scheduled;
use crate::parser::TimeParser;
use crate::types::{Interval, ParsedTimes};
use crate::{Result, ScheduleError};

/// A catalog record as published.
///
/// Only `seq` and `times` matter to scheduling; the other fields are carried
/// through for display. Missing fields take their defaults.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(default)]
pub struct RawCourse {
    /// Offering sequence number
    pub seq: String,
    /// Course code
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub teacher: String,
    /// Department block, e.g. `"AA.CS 資工系"`
    pub dept_block: String,
    /// Required / elective marker
    pub required: String,
    pub grade: String,
    /// Weekly descriptor lines such as `"五 / 6,7 / B 206"`; may be null
    pub times: Option<Vec<String>>,
    pub source: String,
    pub major: Option<String>,
    pub term_order: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub group_div: Option<String>,
    pub group: String,
    /// Enrollment capacity
    pub cap: u32,
    pub english_taught: bool,
    pub note: Option<String>,
}

impl RawCourse {
    /// Descriptor lines, empty when the record has none.
    pub fn times(&self) -> &[String] {
        self.times.as_deref().unwrap_or_default()
    }

    /// Derive the course's intervals.
    pub fn normalize(self, parser: &TimeParser) -> NormalizedCourse {
        let intervals = parser.parse_intervals(self.times());
        NormalizedCourse { raw: self, intervals }
    }
}

/// A catalog record together with the intervals derived from its `times`.
///
/// Only built by [`RawCourse::normalize`]. Serializes to the flat record
/// shape with `place`, `day`, `startTime` and `endTime` columns appended.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCourse {
    raw: RawCourse,
    intervals: Vec<Interval>,
}

impl NormalizedCourse {
    pub fn raw(&self) -> &RawCourse {
        &self.raw
    }

    pub fn credits(&self) -> u32 {
        self.raw.credits
    }

    /// Column form of the intervals for grid rendering.
    pub fn parsed_times(&self) -> ParsedTimes {
        ParsedTimes::from(self.intervals.as_slice())
    }

    /// Whether at least one descriptor line produced an interval.
    pub fn has_schedule_times(&self) -> bool {
        !self.intervals.is_empty()
    }

    /// Give back the raw record, discarding derived data.
    pub fn into_raw(self) -> RawCourse {
        self.raw
    }
}

impl Scheduled for NormalizedCourse {
    fn seq(&self) -> &str {
        &self.raw.seq
    }

    fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

#[derive(Serialize)]
struct ScheduledView<'a> {
    #[serde(flatten)]
    raw: &'a RawCourse,
    #[serde(flatten)]
    times: ParsedTimes,
}

impl Serialize for NormalizedCourse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ScheduledView { raw: &self.raw, times: self.parsed_times() }.serialize(serializer)
    }
}

/// Normalized course catalog with lookup by `seq`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<NormalizedCourse>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Normalize raw records, keeping catalog order.
    ///
    /// When a `seq` appears more than once the first record wins lookups;
    /// every record stays in [`Catalog::courses`].
    pub fn from_raw(raw: Vec<RawCourse>, parser: &TimeParser) -> Self {
        let courses: Vec<NormalizedCourse> =
            raw.into_iter().map(|course| course.normalize(parser)).collect();

        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            if index.contains_key(course.seq()) {
                warn!(seq = course.seq(), "Duplicate seq in catalog; keeping first record");
                continue;
            }
            index.insert(course.seq().to_string(), i);
        }

        let unscheduled = courses.iter().filter(|c| !c.has_schedule_times()).count();
        debug!(courses = courses.len(), unscheduled, "Normalized catalog");

        Self { courses, index }
    }

    /// Parse a JSON array of catalog records.
    pub fn from_json_str(json: &str, parser: &TimeParser) -> Result<Self> {
        let raw: Vec<RawCourse> = serde_json::from_str(json)
            .map_err(|e| ScheduleError::parse_error("Catalog deserialization", e))?;
        Ok(Self::from_raw(raw, parser))
    }

    /// Read and normalize a JSON catalog file.
    pub async fn open(path: impl AsRef<Path>, parser: &TimeParser) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ScheduleError::file_error(path, e))?;
        debug!(path = %path.display(), bytes = json.len(), "Read catalog file");
        Self::from_json_str(&json, parser)
    }

    /// Re-derive every course from its raw record.
    pub fn renormalize(self, parser: &TimeParser) -> Self {
        let raw = self.courses.into_iter().map(NormalizedCourse::into_raw).collect();
        Self::from_raw(raw, parser)
    }

    pub fn get(&self, seq: &str) -> Option<&NormalizedCourse> {
        self.index.get(seq).map(|&i| &self.courses[i])
    }

    pub fn courses(&self) -> &[NormalizedCourse] {
        &self.courses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedCourse> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a NormalizedCourse;
    type IntoIter = std::slice::Iter<'a, NormalizedCourse>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
