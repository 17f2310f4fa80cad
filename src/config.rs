//! Configuration file support for aoc
//!
//! Reads from aoc.toml at the project root, and resolves every path the
//! runner touches relative to that root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AocError, Result};
use crate::puzzle::{Day, Part};

/// Name of the file that marks the project root.
pub const CONFIG_FILE: &str = "aoc.toml";

/// Configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Event year. Falls back to the root directory name suffix when unset.
    #[serde(default)]
    pub year: Option<i32>,

    /// Puzzle site base URL
    /// Default: https://adventofcode.com
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// File holding the session cookie value, relative to the root
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,

    /// JSON file with extra request headers, relative to the root
    #[serde(default = "default_headers_file")]
    pub headers_file: PathBuf,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://adventofcode.com".to_string()
}

fn default_session_file() -> PathBuf {
    PathBuf::from("aoc_session")
}

fn default_headers_file() -> PathBuf {
    PathBuf::from("aoc_headers.json")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: None,
            base_url: default_base_url(),
            session_file: default_session_file(),
            headers_file: default_headers_file(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Parse config from a file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| AocError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| AocError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Find aoc.toml by walking up directory tree
    fn find_root(start: &Path) -> Option<PathBuf> {
        let mut dir = start;

        loop {
            if dir.join(CONFIG_FILE).exists() {
                return Some(dir.to_path_buf());
            }

            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
        None
    }
}

/// A project root plus its configuration. Every file the runner reads or
/// writes is located through this.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Locate the workspace from `AOC_ROOT`, else the nearest directory with
    /// an aoc.toml, else the current directory.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| AocError::io(".", e))?;
        let root = match std::env::var_os("AOC_ROOT") {
            Some(root) => absolute_root(Path::new(&root), &cwd),
            None => Config::find_root(&cwd).unwrap_or(cwd),
        };
        let config = Config::load_from(&root.join(CONFIG_FILE))?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Event year, from `AOC_YEAR`, then aoc.toml, then the directory name.
    pub fn year(&self) -> Result<i32> {
        let env = std::env::var("AOC_YEAR").ok();
        resolve_year(env.as_deref(), &self.config, &self.root)
    }

    pub fn solution_file(&self, day: Day) -> PathBuf {
        self.root
            .join("src")
            .join("solutions")
            .join(format!("day{}.rs", day.padded()))
    }

    pub fn solution_registry(&self) -> PathBuf {
        self.root.join("src").join("solutions").join("mod.rs")
    }

    pub fn puzzle_input(&self, day: Day) -> PathBuf {
        self.root
            .join("data")
            .join(format!("day{}", day.padded()))
            .join("puzzle_input.txt")
    }

    pub fn test_input(&self, day: Day, part: Part) -> PathBuf {
        self.root
            .join("tests")
            .join("data")
            .join(format!("day{}", day.padded()))
            .join(format!("test_{}_input.txt", part.padded()))
    }

    pub fn test_file(&self, day: Day) -> PathBuf {
        self.root
            .join("tests")
            .join(format!("day{}.rs", day.padded()))
    }

    pub fn template(&self, name: &str) -> PathBuf {
        self.root.join("templates").join(name)
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join(&self.config.session_file)
    }

    pub fn headers_file(&self) -> PathBuf {
        self.root.join(&self.config.headers_file)
    }
}

/// Resolve `root` against `cwd` so the directory name is always known.
/// Falls back to a plain join when the path cannot be canonicalized.
pub fn absolute_root(root: &Path, cwd: &Path) -> PathBuf {
    let joined = cwd.join(root);
    std::fs::canonicalize(&joined).unwrap_or(joined)
}

/// Year lookup order: explicit override, config, then the trailing
/// `-YYYY` of the root directory name.
pub fn resolve_year(env: Option<&str>, config: &Config, root: &Path) -> Result<i32> {
    if let Some(raw) = env {
        return raw.trim().parse().map_err(|_| AocError::Config {
            message: format!("AOC_YEAR is not a year: {:?}", raw),
        });
    }
    if let Some(year) = config.year {
        return Ok(year);
    }
    root.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit('-').next())
        .and_then(|suffix| suffix.parse().ok())
        .ok_or_else(|| AocError::Config {
            message: format!(
                "cannot determine the event year; set `year` in {} or name the directory like advent-of-code-2024",
                CONFIG_FILE
            ),
        })
}
