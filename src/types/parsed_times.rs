//! Column-oriented view of a course's intervals

use serde::{Deserialize, Serialize};

use super::{Day, Interval};

/// Four parallel arrays, one slot per interval.
///
/// This is the shape the grid renderer consumes. All four arrays have the
/// same length when built from intervals.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct ParsedTimes {
    pub place: Vec<String>,
    pub day: Vec<u8>,
    pub start_time: Vec<u8>,
    pub end_time: Vec<u8>,
}

impl ParsedTimes {
    /// Number of interval slots.
    pub fn len(&self) -> usize {
        self.day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty()
    }

    /// Zip the columns back into intervals.
    ///
    /// Data that did not come from this crate may have ragged columns or bad
    /// day numbers; iteration stops at the shortest numeric column and slots
    /// with an invalid day are skipped. A missing place becomes empty.
    pub fn intervals(&self) -> Vec<Interval> {
        self.day
            .iter()
            .zip(&self.start_time)
            .zip(&self.end_time)
            .enumerate()
            .filter_map(|(i, ((&day, &start), &end))| {
                let day = Day::from_number(day)?;
                let place = self.place.get(i).cloned().unwrap_or_default();
                Some(Interval::new(day, start, end, place))
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a Interval> for ParsedTimes {
    fn from_iter<I: IntoIterator<Item = &'a Interval>>(iter: I) -> Self {
        let mut out = ParsedTimes::default();
        for interval in iter {
            out.place.push(interval.place.clone());
            out.day.push(interval.day.number());
            out.start_time.push(interval.start_period);
            out.end_time.push(interval.end_period);
        }
        out
    }
}

impl From<&[Interval]> for ParsedTimes {
    fn from(intervals: &[Interval]) -> Self {
        intervals.iter().collect()
    }
}

impl From<Vec<Interval>> for ParsedTimes {
    fn from(intervals: Vec<Interval>) -> Self {
        intervals.iter().collect()
    }
}
