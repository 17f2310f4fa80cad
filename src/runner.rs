//! Running a solution against test or puzzle input, with optional timing.

use colored::{ColoredString, Colorize};
use std::time::{Duration, Instant};
use tracing::info;

use crate::client::AocClient;
use crate::config::Workspace;
use crate::error::{AocError, Result};
use crate::html::{SubmissionReport, Verdict};
use crate::input::{self, PuzzleInput};
use crate::puzzle::{Day, Part};
use crate::solution::{Answer, Solution};
use crate::solutions;

/// Which input a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The part's example from `tests/data`.
    Test,
    /// The personal puzzle input from `data`.
    Puzzle,
}

impl Mode {
    /// `--skip-test` and `--benchmark` both go straight to the puzzle input.
    pub fn select(skip_test: bool, benchmark: bool) -> Self {
        if skip_test || benchmark {
            Mode::Puzzle
        } else {
            Mode::Test
        }
    }
}

/// Warning for a `--submit` that will be ignored in `mode`.
pub fn submit_warning(mode: Mode, submit: bool) -> Option<&'static str> {
    match (mode, submit) {
        (Mode::Test, true) => Some("--submit only applies together with --skip-test"),
        _ => None,
    }
}

/// Finds the compiled-in solution for a day.
pub type Lookup = fn(Day) -> Option<Box<dyn Solution>>;

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub answer: Option<Answer>,
    pub elapsed: Option<Duration>,
}

/// Runs solutions inside one workspace.
#[derive(Debug, Clone)]
pub struct Runner<'a> {
    workspace: &'a Workspace,
    raw: bool,
    benchmark: bool,
    lookup: Lookup,
}

impl<'a> Runner<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            workspace,
            raw: false,
            benchmark: false,
            lookup: solutions::lookup,
        }
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn with_benchmark(mut self, benchmark: bool) -> Self {
        self.benchmark = benchmark;
        self
    }

    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Look up the registered solution for `day` and run it.
    pub fn run(&self, day: Day, part: Part, mode: Mode) -> Result<Outcome> {
        let solution = (self.lookup)(day).ok_or(AocError::NoSolution { day: day.get() })?;
        self.run_with(solution.as_ref(), day, part, mode)
    }

    /// Run a given solution and print its answer and timing.
    pub fn run_with(&self, solution: &dyn Solution, day: Day, part: Part, mode: Mode) -> Result<Outcome> {
        if solution.requires_raw() && !self.raw {
            return Err(AocError::RawRequired);
        }

        let input = match mode {
            Mode::Test => input::read_test_input(self.workspace, day, part, self.raw)?,
            Mode::Puzzle => input::read_puzzle_input(self.workspace, day, self.raw)?,
        };

        let outcome = self.solve(solution, part, &input);

        if let Some(answer) = &outcome.answer {
            let label = match mode {
                Mode::Test => "The test answer is",
                Mode::Puzzle => "The answer is",
            };
            println!("{} {}\n", label, answer.to_string().bold());
        }
        if let Some(elapsed) = outcome.elapsed {
            info!("Benchmarking: {}", format_elapsed(elapsed));
        }
        Ok(outcome)
    }

    fn solve(&self, solution: &dyn Solution, part: Part, input: &PuzzleInput) -> Outcome {
        if !self.benchmark {
            return Outcome {
                answer: solution.solve(part, input),
                elapsed: None,
            };
        }
        let start = Instant::now();
        let answer = solution.solve(part, input);
        Outcome {
            answer,
            elapsed: Some(start.elapsed()),
        }
    }
}

/// Submit a puzzle-mode answer. Returns `None` without connecting when
/// there is nothing to submit.
pub fn submit_outcome<C>(outcome: &Outcome, day: Day, part: Part, connect: C) -> Result<Option<SubmissionReport>>
where
    C: FnOnce() -> Result<AocClient>,
{
    match &outcome.answer {
        Some(answer) if !answer.is_empty() => {
            let report = connect()?.submit(day, part, answer.as_str())?;
            Ok(Some(report))
        }
        _ => Ok(None),
    }
}

/// The site's reply, one colored line per sentence.
pub fn report_lines(report: &SubmissionReport) -> Vec<ColoredString> {
    report
        .lines
        .iter()
        .map(|line| match report.verdict {
            Verdict::Correct => line.green(),
            Verdict::Incorrect => line.red(),
            Verdict::TooSoon | Verdict::AlreadySolved => line.yellow(),
            Verdict::Unknown => line.normal(),
        })
        .collect()
}

/// Two decimals in the largest unit that keeps the value at least 1,
/// bottoming out at nanoseconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    const UNITS: [&str; 4] = ["s", "ms", "µs", "ns"];
    let mut t = elapsed.as_secs_f64();
    let mut unit = 0;
    while t < 1.0 && unit < UNITS.len() - 1 {
        t *= 1000.0;
        unit += 1;
    }
    format!("{:.2} {}", t, UNITS[unit])
}
