use chrono::{Datelike, Local};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use std::io;
use tracing::{info, warn};

use aoc::runner::{report_lines, submit_outcome, submit_warning};
use aoc::scaffold::Site;
use aoc::{AocClient, Day, Mode, Part, Runner, Scaffold, Workspace};

#[derive(Parser, Debug)]
#[command(name = "aoc")]
#[command(author, version, about = "Advent of Code solution runner")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Day number of the event, 1 to 25 (default: today)
    #[arg(short, long, value_name = "DAY_NUMBER", allow_negative_numbers = true)]
    day: Option<i64>,

    /// Part number of the day's puzzle, 1 or 2
    #[arg(short, long, value_name = "PART_NUMBER", default_value = "1", allow_negative_numbers = true)]
    part: i64,

    /// Use raw input instead of stripped input
    #[arg(long)]
    raw: bool,

    /// Create the day's solution file and download its input
    #[arg(long)]
    add: bool,

    /// Download the example input for the given part
    #[arg(long)]
    add_test_input: bool,

    /// Create the day's test file
    #[arg(long)]
    add_test_file: bool,

    /// Skip the example run and solve the real input
    #[arg(long)]
    skip_test: bool,

    /// Time the solution (also skips tests)
    #[arg(long)]
    benchmark: bool,

    /// Submit the answer to Advent of Code
    #[arg(long)]
    submit: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() {
    aoc::logging::init();
    let args = Args::parse();

    if let Some(Command::Completion { shell }) = args.command {
        clap_complete::generate(shell, &mut Args::command(), "aoc", &mut io::stdout());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> aoc::Result<()> {
    let day = Day::new(args.day.unwrap_or_else(|| i64::from(Local::now().day())))?;
    let workspace = Workspace::discover()?;

    if args.add {
        info!("Adding day {}", day);
        return Scaffold::new(&workspace).add_day(day, &Site::new(&workspace));
    }

    if args.add_test_input {
        let part = Part::new(args.part)?;
        info!("Adding test input file for day {}", day);
        return Scaffold::new(&workspace).add_test_input(day, part, &Site::new(&workspace));
    }

    if args.add_test_file {
        info!("Adding test file for day {}", day);
        return Scaffold::new(&workspace).add_test_file(day);
    }

    let part = Part::new(args.part)?;
    let runner = Runner::new(&workspace)
        .with_raw(args.raw)
        .with_benchmark(args.benchmark);

    let mode = Mode::select(args.skip_test, args.benchmark);
    match mode {
        Mode::Test => info!("Testing day {} part {}", day, part),
        Mode::Puzzle => info!("Solving day {} part {}", day, part),
    }
    let outcome = runner.run(day, part, mode)?;

    if let Some(warning) = submit_warning(mode, args.submit) {
        warn!("{}", warning);
        return Ok(());
    }
    if !args.submit {
        return Ok(());
    }

    match submit_outcome(&outcome, day, part, || AocClient::from_workspace(&workspace))? {
        Some(report) => {
            for line in report_lines(&report) {
                println!("{}", line);
            }
        }
        None => warn!("no answer to submit"),
    }

    Ok(())
}
