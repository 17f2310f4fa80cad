//! Loading puzzle and test input from the workspace.

use std::path::Path;

use crate::config::Workspace;
use crate::error::{AocError, Result};
use crate::puzzle::{Day, Part};

/// Input handed to a solution.
///
/// In the default mode the text is trimmed and split into lines. Raw mode
/// keeps the file exactly as written, for puzzles where leading or trailing
/// whitespace matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    text: String,
    raw: bool,
}

impl PuzzleInput {
    pub fn new(text: impl Into<String>, raw: bool) -> Self {
        Self {
            text: text.into(),
            raw,
        }
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// The whole input; trimmed unless raw.
    pub fn text(&self) -> &str {
        if self.raw {
            &self.text
        } else {
            self.text.trim()
        }
    }

    /// Lines of the input. Non-raw input is trimmed before splitting, so an
    /// empty file yields a single empty line.
    pub fn lines(&self) -> Vec<&str> {
        self.text().split('\n').collect()
    }
}

fn read(path: &Path, raw: bool, hint: &'static str) -> Result<PuzzleInput> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(PuzzleInput::new(text, raw)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AocError::MissingInput {
            path: path.to_path_buf(),
            hint,
        }),
        Err(e) => Err(AocError::io(path, e)),
    }
}

/// Example input for one part, from `tests/data/dayDD/test_PP_input.txt`.
pub fn read_test_input(workspace: &Workspace, day: Day, part: Part, raw: bool) -> Result<PuzzleInput> {
    read(&workspace.test_input(day, part), raw, "--add-test-input")
}

/// Personal input, from `data/dayDD/puzzle_input.txt`.
pub fn read_puzzle_input(workspace: &Workspace, day: Day, raw: bool) -> Result<PuzzleInput> {
    read(&workspace.puzzle_input(day), raw, "--add")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_lines_trim_outer_whitespace() {
        let input = PuzzleInput::new("\n 1 2\n3 4 \n\n", false);
        assert_eq!(input.lines(), vec!["1 2", "3 4"]);
        assert_eq!(input.text(), "1 2\n3 4");
    }

    #[test]
    fn test_raw_keeps_everything() {
        let input = PuzzleInput::new("  a\n b\n", true);
        assert!(input.is_raw());
        assert_eq!(input.text(), "  a\n b\n");
        assert_eq!(input.lines(), vec!["  a", " b", ""]);
    }

    #[test]
    fn test_read_from_workspace() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::new(dir.path(), Config::default());
        let day = Day::new(4).unwrap();

        let path = ws.test_input(day, Part::One);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "x\ny\n").unwrap();

        let input = read_test_input(&ws, day, Part::One, false).unwrap();
        assert_eq!(input.lines(), vec!["x", "y"]);
    }

    #[test]
    fn test_missing_input_hint() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::new(dir.path(), Config::default());
        let day = Day::new(4).unwrap();

        match read_puzzle_input(&ws, day, false) {
            Err(AocError::MissingInput { hint, .. }) => assert_eq!(hint, "--add"),
            other => panic!("expected MissingInput, got {:?}", other),
        }
        match read_test_input(&ws, day, Part::Two, true) {
            Err(AocError::MissingInput { hint, path }) => {
                assert_eq!(hint, "--add-test-input");
                assert!(path.ends_with("tests/data/day04/test_02_input.txt"));
            }
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }
}
