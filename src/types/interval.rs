//! Normalized meeting interval

use serde::{Deserialize, Serialize};

use super::Day;

/// One weekly meeting block: a day, an inclusive period range and a place.
///
/// Invariant: `start_period <= end_period`. Deserialization goes through
/// [`Interval::new`], so reversed bounds are swapped on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    #[cfg_attr(feature = "typescript", specta(type = u8))]
    pub day: Day,
    pub start_period: u8,
    pub end_period: u8,
    pub place: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalRepr {
    day: Day,
    start_period: u8,
    end_period: u8,
    #[serde(default)]
    place: String,
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = IntervalRepr::deserialize(deserializer)?;
        Ok(Interval::new(repr.day, repr.start_period, repr.end_period, repr.place))
    }
}

impl Interval {
    /// Build an interval, swapping the bounds if they arrive reversed.
    pub fn new(day: Day, start_period: u8, end_period: u8, place: impl Into<String>) -> Self {
        let (start_period, end_period) = if start_period <= end_period {
            (start_period, end_period)
        } else {
            (end_period, start_period)
        };
        Self { day, start_period, end_period, place: place.into() }
    }

    /// Closed-interval intersection on the same day.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.day == other.day
            && self.start_period <= other.end_period
            && other.start_period <= self.end_period
    }

    /// Whether this interval occupies `period` on `day`.
    pub fn covers(&self, day: Day, period: u8) -> bool {
        self.day == day && (self.start_period..=self.end_period).contains(&period)
    }

    /// Number of periods spanned (always at least 1).
    pub fn len(&self) -> usize {
        usize::from(self.end_period.abs_diff(self.start_period)) + 1
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start_period == self.end_period {
            write!(f, "{} {}", self.day, self.start_period)?;
        } else {
            write!(f, "{} {}-{}", self.day, self.start_period, self.end_period)?;
        }
        if !self.place.is_empty() {
            write!(f, " @ {}", self.place)?;
        }
        Ok(())
    }
}
