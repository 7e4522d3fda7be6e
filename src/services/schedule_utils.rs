use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Minutes since midnight. Values of 1440 and above belong to the next day.
pub type Minutes = i64;

pub const MINUTES_PER_DAY: Minutes = 24 * 60;

/// Largest hour accepted by the clock parser; covers slots rendered past midnight.
const MAX_CLOCK_HOUR: Minutes = 47;

static CLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").expect("clock pattern must compile"));

static SLOT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*[-–]\s*(\d{1,2}):(\d{2})\s*$")
        .expect("slot pattern must compile")
});

/// Half-open `[start, end)` interval in minutes. `end > start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    start: Minutes,
    end: Minutes,
}

impl TimeRange {
    pub fn new(start: Minutes, end: Minutes) -> Option<Self> {
        if end > start {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Builds a range from two clock readings, treating `end <= start` as
    /// crossing midnight.
    pub fn from_clock(start: Minutes, end: Minutes) -> Option<Self> {
        let end = if end <= start {
            end + MINUTES_PER_DAY
        } else {
            end
        };
        Self::new(start, end)
    }

    pub fn start(&self) -> Minutes {
        self.start
    }

    pub fn end(&self) -> Minutes {
        self.end
    }

    pub fn width(&self) -> Minutes {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    pub fn with_start(&self, start: Minutes) -> Option<Self> {
        Self::new(start, self.end)
    }

    pub fn with_end(&self, end: Minutes) -> Option<Self> {
        Self::new(self.start, end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_slot(&raw).ok_or_else(|| de::Error::custom(format!("invalid time slot: {raw}")))
    }
}

pub fn overlaps(a_start: Minutes, a_end: Minutes, b_start: Minutes, b_end: Minutes) -> bool {
    a_start < b_end && b_start < a_end
}

/// `"HH:MM"` to minutes since midnight.
pub fn parse_clock(value: &str) -> Option<Minutes> {
    let captures = CLOCK_PATTERN.captures(value)?;
    clock_minutes(&captures[1], &captures[2])
}

/// Minutes to `"HH:MM"`; hours keep counting past 23 for next-day values.
pub fn format_clock(minutes: Minutes) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `"HH:MM-HH:MM"` to a wrap-normalized range, e.g. `22:00-02:00` becomes `[1320, 1560)`.
pub fn parse_slot(value: &str) -> Option<TimeRange> {
    let captures = SLOT_PATTERN.captures(value)?;
    let start = clock_minutes(&captures[1], &captures[2])?;
    let end = clock_minutes(&captures[3], &captures[4])?;
    TimeRange::from_clock(start, end)
}

/// Parses a pair of separate clock strings into a wrap-normalized range.
pub fn parse_clock_pair(start: &str, end: &str) -> Option<TimeRange> {
    TimeRange::from_clock(parse_clock(start)?, parse_clock(end)?)
}

fn clock_minutes(hours: &str, minutes: &str) -> Option<Minutes> {
    let hours: Minutes = hours.parse().ok()?;
    let minutes: Minutes = minutes.parse().ok()?;
    if hours > MAX_CLOCK_HOUR || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}
