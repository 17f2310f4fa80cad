//! The interface every daily solution implements.

use std::fmt;

use crate::input::PuzzleInput;
use crate::puzzle::Part;

/// A puzzle answer, kept as the text that would be typed into the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Answer(String);

impl Answer {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! answer_from_display {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    Answer(value.to_string())
                }
            }
        )*
    };
}

answer_from_display!(i32, i64, i128, u32, u64, u128, usize, isize, String, &str, char);

/// A day's solution. Return `None` from a part that is not solved yet.
pub trait Solution {
    fn part1(&self, input: &PuzzleInput) -> Option<Answer>;

    fn part2(&self, input: &PuzzleInput) -> Option<Answer>;

    /// Whether the puzzle needs untrimmed input (`--raw`).
    fn requires_raw(&self) -> bool {
        false
    }

    fn solve(&self, part: Part, input: &PuzzleInput) -> Option<Answer> {
        match part {
            Part::One => self.part1(input),
            Part::Two => self.part2(input),
        }
    }
}
