//! # Time-Descriptor Parsing
//!
//! Course catalogs describe weekly meetings as free-text lines such as
//! `"五 / 6,7 / B 206"` or `"Mon/6-8/E219"`. This module turns those lines into
//! normalized [`Interval`]s.
//!
//! ## Descriptor Format
//!
//! ```text
//! <day> / <periods> [/ <place>]
//!
//!  day      一..日, 天, Mon..Sun, or a digit 1..7
//!  periods  comma list of single periods and ranges: 3-4,6,8~10
//!  place    optional; all whitespace is removed
//! ```
//!
//! ## Tolerance
//!
//! Catalog data is scraped and partly garbage. A line that cannot be parsed
//! is dropped and the rest of the course keeps going; parsing never fails.
//! Dropped lines are reported at `trace` level together with a
//! [`LineRejection`] reason.
//!
//! ## Pipeline
//!
//! ```text
//!  line ──► split '/' ──► day token ──► Day
//!                    │
//!                    ├──► period field ──► expand ──► dedup+sort ──► runs
//!                    │
//!                    └──► place (whitespace stripped)
//!
//!  one Interval per run, sharing day and place
//! ```

use tracing::trace;

use crate::config::ScheduleConfig;
use crate::types::{Day, Interval, ParsedTimes};

mod period;

pub use period::{RANGE_SEPARATORS, collapse_runs, parse_period_field};

/// Why a descriptor line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRejection {
    /// Fewer than two non-empty `/`-separated fields.
    TooFewFields(usize),
    /// Day token not in the lookup table and not a digit in `1..=7`.
    UnknownDay(String),
    /// Period field empty, non-numeric, malformed or out of range.
    BadPeriod(String),
}

impl std::fmt::Display for LineRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineRejection::TooFewFields(n) => write!(f, "expected at least 2 fields, found {}", n),
            LineRejection::UnknownDay(token) => write!(f, "unrecognized day token '{}'", token),
            LineRejection::BadPeriod(field) => write!(f, "unparseable period field '{}'", field),
        }
    }
}

/// Descriptor parser bound to a [`ScheduleConfig`].
///
/// Parsing is pure: the same lines always produce the same intervals in the
/// same order.
#[derive(Debug, Clone, Default)]
pub struct TimeParser {
    config: ScheduleConfig,
}

impl TimeParser {
    /// Create a parser using the given configuration.
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Parse one descriptor line, reporting why it was rejected.
    pub fn parse_line_checked(&self, line: &str) -> Result<Vec<Interval>, LineRejection> {
        let fields: Vec<&str> =
            line.split('/').map(str::trim).filter(|field| !field.is_empty()).collect();
        if fields.len() < 2 {
            return Err(LineRejection::TooFewFields(fields.len()));
        }

        let day =
            Day::from_token(fields[0]).ok_or_else(|| LineRejection::UnknownDay(fields[0].into()))?;
        let runs = parse_period_field(fields[1], self.config.max_period)?;
        let place: String = fields
            .get(2)
            .map(|place| place.chars().filter(|c| !c.is_whitespace()).collect())
            .unwrap_or_default();

        Ok(runs
            .into_iter()
            .map(|(start, end)| Interval::new(day, start, end, place.clone()))
            .collect())
    }

    /// Parse one descriptor line; `None` when the line is dropped.
    pub fn parse_line(&self, line: &str) -> Option<Vec<Interval>> {
        match self.parse_line_checked(line) {
            Ok(intervals) => Some(intervals),
            Err(reason) => {
                trace!(line, %reason, "Dropping time descriptor");
                None
            }
        }
    }

    /// Parse every line of a course, in order, skipping dropped lines.
    pub fn parse_intervals<S: AsRef<str>>(&self, times: &[S]) -> Vec<Interval> {
        times.iter().filter_map(|line| self.parse_line(line.as_ref())).flatten().collect()
    }

    /// Parse a course's descriptor list into the column form.
    ///
    /// Absent or empty input yields four empty columns.
    pub fn parse_times<S: AsRef<str>>(&self, times: Option<&[S]>) -> ParsedTimes {
        match times {
            Some(times) => ParsedTimes::from(self.parse_intervals(times)),
            None => ParsedTimes::default(),
        }
    }
}

/// Parse descriptor lines with the default configuration.
///
/// ```rust
/// use coursegrid::parse_times;
///
/// let parsed = parse_times(Some(&["二/3-4/RoomA", "二/6,7,8/RoomB"][..]));
/// assert_eq!(parsed.day, vec![2, 2]);
/// assert_eq!(parsed.start_time, vec![3, 6]);
/// assert_eq!(parsed.end_time, vec![4, 8]);
/// assert_eq!(parsed.place, vec!["RoomA", "RoomB"]);
///
/// assert!(parse_times::<&str>(None).is_empty());
/// ```
pub fn parse_times<S: AsRef<str>>(times: Option<&[S]>) -> ParsedTimes {
    TimeParser::default().parse_times(times)
}

/// Parse one descriptor line with the default configuration.
pub fn parse_line(line: &str) -> Option<Vec<Interval>> {
    TimeParser::default().parse_line(line)
}
