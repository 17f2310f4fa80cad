//! Compiled-in daily solutions.
//!
//! `aoc --add` writes `dayDD.rs` next to this file and registers it at the
//! two `@aoc:` markers below, so keep them in place.

use crate::puzzle::Day;
use crate::solution::Solution;

// @aoc:modules

type Constructor = fn() -> Box<dyn Solution>;

const DAYS: &[(u8, Constructor)] = &[
    // @aoc:days
];

/// The solution registered for `day`, if any.
pub fn lookup(day: Day) -> Option<Box<dyn Solution>> {
    DAYS.iter()
        .find(|(d, _)| *d == day.get())
        .map(|(_, make)| make())
}

