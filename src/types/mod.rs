//! Core value types for timetable data.
//!
//! This module provides the structures the parser produces and the conflict
//! detector consumes.
//!
//! ## Architecture
//!
//! - [`Day`] maps descriptor day tokens (一, `Mon`, `3`, ...) to a weekday
//! - [`Interval`] is one normalized `(day, start, end, place)` meeting block
//! - [`ParsedTimes`] is the column-oriented form (`place`, `day`, `startTime`,
//!   `endTime`) handed to grid renderers
//!
//! ## Usage Example
//!
//! ```rust
//! use coursegrid::types::{Day, Interval, ParsedTimes};
//!
//! let lecture = Interval::new(Day::Monday, 6, 8, "E219");
//! let lab = Interval::new(Day::Monday, 7, 7, "Lab");
//! assert!(lecture.overlaps(&lab));
//!
//! let columns = ParsedTimes::from(vec![lecture, lab]);
//! assert_eq!(columns.day, vec![1, 1]);
//! assert_eq!(columns.start_time, vec![6, 7]);
//! ```

mod day;
mod interval;
mod parsed_times;

pub use day::{DAY_TOKENS, Day};
pub use interval::Interval;
pub use parsed_times::ParsedTimes;
