use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Calendar month, used as the key for monthly progress notes.
///
/// Serializes as the three-letter abbreviation ("Jan".."Dec"), which is the
/// key format on the wire and in the session cache. The derive order gives
/// calendar ordering, so a `BTreeMap<Month, _>` iterates January first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// Month from a 1-based calendar number (chrono's convention).
    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    /// 1-based calendar number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn of(date: chrono::NaiveDate) -> Month {
        // date.month() is always 1..=12
        Month::ALL[date.month0() as usize]
    }

    /// The month of today's local date.
    pub fn current() -> Month {
        Month::of(chrono::Local::now().date_naive())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CoreError::InvalidMonth(s.to_string()))
    }
}
