//! Day and part identifiers, plus puzzle unlock times.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

use crate::error::{AocError, Result};

/// A puzzle day, always within 1..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub fn new(day: i64) -> Result<Self> {
        if (1..=25).contains(&day) {
            Ok(Day(day as u8))
        } else {
            Err(AocError::InvalidDay(day))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-padded form used in file names, e.g. `05`.
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A puzzle part: 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn new(part: i64) -> Result<Self> {
        match part {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(AocError::InvalidPart(other)),
        }
    }

    pub fn get(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }

    pub fn padded(self) -> String {
        format!("{:02}", self.get())
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Puzzles unlock at midnight EST, which is 05:00 UTC on December `day`.
pub fn unlock_time(year: i32, day: Day) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 12, u32::from(day.get()), 5, 0, 0)
        .single()
        .ok_or_else(|| AocError::Config {
            message: format!("no valid unlock time for {} day {}", year, day),
        })
}
