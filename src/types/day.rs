//! Weekday type and the descriptor day-token table

use serde::{Deserialize, Serialize};

/// Day of the week, numbered Monday = 1 through Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Day {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

/// Tokens accepted in the day field of a descriptor line.
///
/// 天 is an alias for Sunday. Literal digits are handled separately by
/// [`Day::from_token`].
pub const DAY_TOKENS: &[(&str, Day)] = &[
    ("一", Day::Monday),
    ("二", Day::Tuesday),
    ("三", Day::Wednesday),
    ("四", Day::Thursday),
    ("五", Day::Friday),
    ("六", Day::Saturday),
    ("日", Day::Sunday),
    ("天", Day::Sunday),
    ("Mon", Day::Monday),
    ("Tue", Day::Tuesday),
    ("Wed", Day::Wednesday),
    ("Thu", Day::Thursday),
    ("Fri", Day::Friday),
    ("Sat", Day::Saturday),
    ("Sun", Day::Sunday),
];

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Day number in `1..=7`.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Map a day number in `1..=7` back to a [`Day`].
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=7 => Some(Self::ALL[usize::from(n) - 1]),
            _ => None,
        }
    }

    /// Resolve a descriptor day token.
    ///
    /// The token is trimmed, then looked up in [`DAY_TOKENS`]. A token made
    /// only of ASCII digits is accepted when its value lies in `1..=7`.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some((_, day)) = DAY_TOKENS.iter().find(|(name, _)| *name == token) {
            return Some(*day);
        }

        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse::<u8>().ok().and_then(Self::from_number)
    }

    /// Three-letter English abbreviation.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Day::Monday => "Mon",
            Day::Tuesday => "Tue",
            Day::Wednesday => "Wed",
            Day::Thursday => "Thu",
            Day::Friday => "Fri",
            Day::Saturday => "Sat",
            Day::Sunday => "Sun",
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.number()
    }
}

impl TryFrom<u8> for Day {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Day::from_number(n).ok_or_else(|| format!("day number {} outside 1..=7", n))
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}
