//! Checks a solution against the example answer from the puzzle text.
//!
//! Generated `tests/dayDD.rs` files call [`run_test`].

use std::fmt::Display;

use crate::config::Workspace;
use crate::error::{AocError, Result};
use crate::input;
use crate::puzzle::{Day, Part};
use crate::solution::Solution;
use crate::solutions;

/// Run the registered solution for `day` on its example input and compare
/// the answer text with `expected`.
pub fn run_test(day: u8, part: u8, expected: impl Display, raw: bool) -> Result<()> {
    let day = Day::new(i64::from(day))?;
    let part = Part::new(i64::from(part))?;
    let workspace = Workspace::discover()?;
    let solution = solutions::lookup(day).ok_or(AocError::NoSolution { day: day.get() })?;
    check(&workspace, solution.as_ref(), day, part, expected, raw)
}

/// Same as [`run_test`] for an explicit workspace and solution.
pub fn check(
    workspace: &Workspace,
    solution: &dyn Solution,
    day: Day,
    part: Part,
    expected: impl Display,
    raw: bool,
) -> Result<()> {
    let input = input::read_test_input(workspace, day, part, raw)?;
    let actual = solution
        .solve(part, &input)
        .map(|answer| answer.to_string())
        .unwrap_or_else(|| "None".to_string());
    let expected = expected.to_string();

    if actual != expected {
        return Err(AocError::TestFailed {
            day: day.get(),
            part: part.get(),
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::PuzzleInput;
    use crate::solution::Answer;
    use tempfile::TempDir;

    /// Sum of the numbers on each line, part 2 unsolved.
    struct Totals;

    impl Solution for Totals {
        fn part1(&self, input: &PuzzleInput) -> Option<Answer> {
            Some(
                input
                    .lines()
                    .iter()
                    .map(|l| l.split_whitespace().filter_map(|n| n.parse::<i64>().ok()).sum::<i64>())
                    .sum::<i64>()
                    .into(),
            )
        }

        fn part2(&self, _input: &PuzzleInput) -> Option<Answer> {
            None
        }
    }

    fn workspace(day: Day) -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::new(dir.path(), Config::default());
        for part in [Part::One, Part::Two] {
            let path = ws.test_input(day, part);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "1 2\n3 4\n").unwrap();
        }
        (dir, ws)
    }

    #[test]
    fn test_check_passes() {
        let day = Day::new(1).unwrap();
        let (_dir, ws) = workspace(day);
        check(&ws, &Totals, day, Part::One, 10, false).unwrap();
        check(&ws, &Totals, day, Part::One, "10", false).unwrap();
    }

    #[test]
    fn test_check_reports_mismatch() {
        let day = Day::new(1).unwrap();
        let (_dir, ws) = workspace(day);
        let err = check(&ws, &Totals, day, Part::One, 11, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Test failed for Day 1, Part 1: Expected 11, got 10."
        );
    }

    /// Same failure path as the body of a generated `tests/dayDD.rs` test.
    #[test]
    #[should_panic(expected = "Test failed for Day 1, Part 1: Expected 11, got 10.")]
    fn test_generated_test_panics_with_message() {
        let day = Day::new(1).unwrap();
        let (_dir, ws) = workspace(day);
        if let Err(e) = check(&ws, &Totals, day, Part::One, "11", false) {
            panic!("{}", e);
        }
    }

    #[test]
    fn test_unsolved_part_fails() {
        let day = Day::new(1).unwrap();
        let (_dir, ws) = workspace(day);
        let err = check(&ws, &Totals, day, Part::Two, 0, false).unwrap_err();
        assert!(err.to_string().ends_with("got None."));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(matches!(run_test(0, 1, 0, false), Err(AocError::InvalidDay(0))));
    }
}
