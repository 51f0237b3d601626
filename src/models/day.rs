//! Booking day model.
//!
//! Orders name the booking day in Indonesian (`senin` .. `minggu`). This
//! module maps those names onto [`chrono::Weekday`].

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A recognised booking day.
///
/// Parsing is case-insensitive; the canonical form is lowercase.
///
/// # Example
///
/// ```
/// use cinema_pricing::models::Day;
/// use chrono::Weekday;
///
/// let day: Day = "Sabtu".parse().unwrap();
/// assert_eq!(day, Day::Sabtu);
/// assert_eq!(day.weekday(), Weekday::Sat);
/// assert_eq!(day.to_string(), "sabtu");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    /// Monday.
    Senin,
    /// Tuesday.
    Selasa,
    /// Wednesday.
    Rabu,
    /// Thursday.
    Kamis,
    /// Friday.
    Jumat,
    /// Saturday.
    Sabtu,
    /// Sunday.
    Minggu,
}

impl Day {
    /// All seven days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Senin,
        Day::Selasa,
        Day::Rabu,
        Day::Kamis,
        Day::Jumat,
        Day::Sabtu,
        Day::Minggu,
    ];

    /// Returns the lowercase day name.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Senin => "senin",
            Day::Selasa => "selasa",
            Day::Rabu => "rabu",
            Day::Kamis => "kamis",
            Day::Jumat => "jumat",
            Day::Sabtu => "sabtu",
            Day::Minggu => "minggu",
        }
    }

    /// Returns the matching chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            Day::Senin => Weekday::Mon,
            Day::Selasa => Weekday::Tue,
            Day::Rabu => Weekday::Wed,
            Day::Kamis => Weekday::Thu,
            Day::Jumat => Weekday::Fri,
            Day::Sabtu => Weekday::Sat,
            Day::Minggu => Weekday::Sun,
        }
    }

    /// Converts a chrono weekday into a booking day.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Senin,
            Weekday::Tue => Day::Selasa,
            Weekday::Wed => Day::Rabu,
            Weekday::Thu => Day::Kamis,
            Weekday::Fri => Day::Jumat,
            Weekday::Sat => Day::Sabtu,
            Weekday::Sun => Day::Minggu,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ValidationError;

    /// Matches after ASCII lowercasing. Surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| day.as_str() == lowered)
            .ok_or(ValidationError)
    }
}
