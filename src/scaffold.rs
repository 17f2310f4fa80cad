//! Day setup for aoc
//!
//! `aoc --add`, `--add-test-input` and `--add-test-file` create the files a
//! new puzzle day needs. Nothing that already exists is overwritten.

use chrono::{DateTime, Utc};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::client::AocClient;
use crate::config::Workspace;
use crate::error::{AocError, Result};
use crate::puzzle::{self, Day, Part};

/// Built-in solution template (embedded at compile time)
const SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.tmpl");

/// Built-in test template (embedded at compile time)
const TEST_TEMPLATE: &str = include_str!("../templates/test.rs.tmpl");

const MODULES_MARKER: &str = "// @aoc:modules";
const DAYS_MARKER: &str = "// @aoc:days";

/// Where downloaded inputs come from.
pub trait InputSource {
    fn fetch_input(&self, day: Day) -> Result<String>;

    fn fetch_example(&self, day: Day, part: Part) -> Result<Option<String>>;
}

/// The real puzzle site. The client is only built when a download is needed,
/// so scaffolding works without a session file.
pub struct Site<'a> {
    workspace: &'a Workspace,
}

impl<'a> Site<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }
}

impl InputSource for Site<'_> {
    fn fetch_input(&self, day: Day) -> Result<String> {
        AocClient::from_workspace(self.workspace)?.fetch_input(day)
    }

    fn fetch_example(&self, day: Day, part: Part) -> Result<Option<String>> {
        AocClient::from_workspace(self.workspace)?.fetch_example(day, part)
    }
}

/// Substitute `{day}` and `{day:02}`. Every other brace is left alone.
pub fn render(template: &str, day: Day) -> String {
    template
        .replace("{day:02}", &day.padded())
        .replace("{day}", &day.to_string())
}

/// Creates day files inside one workspace.
pub struct Scaffold<'a> {
    workspace: &'a Workspace,
}

impl<'a> Scaffold<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    fn display<'p>(&self, path: &'p Path) -> std::path::Display<'p> {
        path.strip_prefix(self.workspace.root())
            .unwrap_or(path)
            .display()
    }

    /// Workspace override under `templates/` if present, else the built-in.
    fn template(&self, name: &str, builtin: &'static str) -> Result<String> {
        let path = self.workspace.template(name);
        if path.exists() {
            fs::read_to_string(&path).map_err(|e| AocError::io(&path, e))
        } else {
            Ok(builtin.to_string())
        }
    }

    /// Solution file, registry entry, and puzzle input for `day`.
    pub fn add_day(&self, day: Day, source: &dyn InputSource) -> Result<()> {
        let solution_path = self.workspace.solution_file(day);
        let template = self.template("solution.rs.tmpl", SOLUTION_TEMPLATE)?;
        self.write_file_if_missing(&solution_path, &render(&template, day))?;

        let registry = self.workspace.solution_registry();
        if registry.exists() {
            if register_solution(&registry, day)? {
                println!("   {} {} (registered day {})", "Updated".green(), self.display(&registry), day);
            }
        } else {
            warn!("no solution registry at {}; register day {} by hand", registry.display(), day);
        }

        let input_path = self.workspace.puzzle_input(day);
        self.touch(&input_path)?;

        if is_empty(&input_path)? {
            self.wait_for_unlock(day, "Puzzle input")?;
            info!("Downloading puzzle input...");
            let input = source.fetch_input(day)?;
            fs::write(&input_path, input).map_err(|e| AocError::io(&input_path, e))?;
            println!("   {} {}", "Downloaded".green(), self.display(&input_path));
        }
        Ok(())
    }

    /// Example input for one part, scraped from the puzzle page.
    pub fn add_test_input(&self, day: Day, part: Part, source: &dyn InputSource) -> Result<()> {
        let path = self.workspace.test_input(day, part);
        self.touch(&path)?;

        if is_empty(&path)? {
            self.wait_for_unlock(day, "Test input")?;
            info!("Downloading test input...");
            match source.fetch_example(day, part)? {
                Some(example) => {
                    fs::write(&path, example).map_err(|e| AocError::io(&path, e))?;
                    println!("   {} {}", "Downloaded".green(), self.display(&path));
                }
                None => warn!("no example found for day {} part {}", day, part),
            }
        }
        Ok(())
    }

    /// Test file for `day` from the test template.
    pub fn add_test_file(&self, day: Day) -> Result<()> {
        let path = self.workspace.test_file(day);
        info!("Test file path: {}", path.display());
        let template = self.template("test.rs.tmpl", TEST_TEMPLATE)?;
        self.write_file_if_missing(&path, &render(&template, day))
    }

    fn wait_for_unlock(&self, day: Day, what: &str) -> Result<()> {
        let unlock = puzzle::unlock_time(self.workspace.year()?, day)?;
        wait_until(unlock, what, Utc::now, std::thread::sleep);
        Ok(())
    }

    fn touch(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_if_missing(parent)?;
        }
        if !path.exists() {
            fs::write(path, "").map_err(|e| AocError::io(path, e))?;
            println!("   {} {}", "Creating".green(), self.display(path));
        }
        Ok(())
    }

    fn write_file_if_missing(&self, path: &Path, content: &str) -> Result<()> {
        if path.exists() {
            println!("   {} {} (already exists)", "Skipping".yellow(), self.display(path));
        } else {
            if let Some(parent) = path.parent() {
                create_dir_if_missing(parent)?;
            }
            fs::write(path, content).map_err(|e| AocError::io(path, e))?;
            println!("   {} {}", "Creating".green(), self.display(path));
        }
        Ok(())
    }
}

fn create_dir_if_missing(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| AocError::io(path, e))?;
    }
    Ok(())
}

fn is_empty(path: &Path) -> Result<bool> {
    let meta = fs::metadata(path).map_err(|e| AocError::io(path, e))?;
    Ok(meta.len() == 0)
}

/// Add `pub mod dayDD;` and its table entry to the registry. Returns false
/// when the day is already registered.
pub fn register_solution(registry: &Path, day: Day) -> Result<bool> {
    let existing = fs::read_to_string(registry).map_err(|e| AocError::io(registry, e))?;
    let module = format!("day{}", day.padded());
    let module_line = format!("pub mod {};", module);

    if existing.lines().any(|line| line.trim() == module_line) {
        return Ok(false);
    }

    let entry = format!("({}, {}::solution),", day, module);
    let updated = insert_before_marker(&existing, MODULES_MARKER, &module_line)
        .and_then(|content| insert_before_marker(&content, DAYS_MARKER, &entry))
        .ok_or_else(|| AocError::Config {
            message: format!(
                "{} is missing the `{}` / `{}` markers",
                registry.display(),
                MODULES_MARKER,
                DAYS_MARKER
            ),
        })?;

    fs::write(registry, updated).map_err(|e| AocError::io(registry, e))?;
    Ok(true)
}

/// Insert `line` above the marker, matching the marker's indentation.
fn insert_before_marker(content: &str, marker: &str, line: &str) -> Option<String> {
    let mut out = String::with_capacity(content.len() + line.len() + 8);
    let mut found = false;
    for current in content.split_inclusive('\n') {
        if !found && current.trim() == marker {
            let indent: String = current.chars().take_while(|c| c.is_whitespace()).collect();
            out.push_str(&indent);
            out.push_str(line);
            out.push('\n');
            found = true;
        }
        out.push_str(current);
    }
    found.then_some(out)
}

/// Block until `unlock`, redrawing a clock line once per tick.
pub fn wait_until<N, S>(unlock: DateTime<Utc>, what: &str, mut now: N, mut sleep: S)
where
    N: FnMut() -> DateTime<Utc>,
    S: FnMut(Duration),
{
    let mut current = now();
    if current >= unlock {
        return;
    }
    println!(
        "{} not available to download until {} UTC\n",
        what,
        unlock.format("%Y-%m-%d %H:%M:%S")
    );
    while current < unlock {
        println!("\x1b[Fnow: {} UTC", current.format("%Y-%m-%d %H:%M:%S%.3f"));
        sleep(Duration::from_secs(1));
        current = now();
    }
}
