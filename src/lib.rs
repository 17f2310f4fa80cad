//! aoc - Advent of Code workflow runner
//!
//! Fetch inputs, scaffold solution files, run and time solutions, submit
//! answers.
//!
//! # Workspace layout
//!
//! | Path | Contents |
//! |------|----------|
//! | `src/solutions/dayDD.rs` | Solution for day DD |
//! | `data/dayDD/puzzle_input.txt` | Personal puzzle input |
//! | `tests/data/dayDD/test_PP_input.txt` | Example input for part PP |
//! | `tests/dayDD.rs` | Example tests |
//! | `aoc_session` | Session cookie value |
//! | `aoc_headers.json` | Extra request headers |
//!
//! # Quick Start
//!
//! ```no_run
//! use aoc::{Answer, Day, Mode, Part, PuzzleInput, Runner, Solution, Workspace};
//!
//! struct Depths;
//!
//! impl Solution for Depths {
//!     fn part1(&self, input: &PuzzleInput) -> Option<Answer> {
//!         Some(input.lines().len().into())
//!     }
//!
//!     fn part2(&self, _input: &PuzzleInput) -> Option<Answer> {
//!         None
//!     }
//! }
//!
//! let workspace = Workspace::discover().unwrap();
//! let day = Day::new(1).unwrap();
//! let outcome = Runner::new(&workspace)
//!     .with_benchmark(true)
//!     .run_with(&Depths, day, Part::One, Mode::Test)
//!     .unwrap();
//! println!("{:?}", outcome.answer);
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod html;
pub mod input;
pub mod logging;
pub mod puzzle;
pub mod runner;
pub mod scaffold;
pub mod solution;
pub mod solutions;
pub mod tester;

pub use client::AocClient;
pub use config::{Config, Workspace};
pub use error::{AocError, Result};
pub use html::{SubmissionReport, Verdict};
pub use input::PuzzleInput;
pub use puzzle::{Day, Part};
pub use runner::{Mode, Outcome, Runner};
pub use scaffold::Scaffold;
pub use solution::{Answer, Solution};

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Solution for Echo {
        fn part1(&self, input: &PuzzleInput) -> Option<Answer> {
            Some(input.text().into())
        }

        fn part2(&self, input: &PuzzleInput) -> Option<Answer> {
            Some(input.lines().len().into())
        }
    }

    #[test]
    fn test_root_exports_drive_a_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path(), Config::default());
        let day = Day::new(14).unwrap();
        let path = workspace.puzzle_input(day);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "  O..#\n.O.#.\n").unwrap();

        let part = Part::new(2).unwrap();
        assert_eq!(part, Part::Two);
        let outcome: Outcome = Runner::new(&workspace)
            .run_with(&Echo, day, part, Mode::Puzzle)
            .unwrap();
        assert_eq!(outcome.answer, Some(Answer::from(2usize)));

        let err: AocError = Runner::new(&workspace)
            .run_with(&Echo, day, Part::One, Mode::Test)
            .unwrap_err();
        assert!(matches!(err, AocError::MissingInput { hint: "--add-test-input", .. }));
    }
}
