//! Session cookie and extra request headers for the puzzle site.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Workspace;
use crate::error::{AocError, Result};

/// Everything needed to authenticate a request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub session: String,
    pub headers: BTreeMap<String, String>,
}

impl Credentials {
    /// Load from `AOC_SESSION` or the session file, plus the headers file.
    pub fn load(workspace: &Workspace) -> Result<Self> {
        let session = match std::env::var("AOC_SESSION") {
            Ok(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => read_session(&workspace.session_file())?,
        };
        let headers = read_headers(&workspace.headers_file())?;
        Ok(Self { session, headers })
    }

    /// `Cookie` header value.
    pub fn cookie(&self) -> String {
        format!("session={}", self.session)
    }
}

/// Read and trim the session token.
pub fn read_session(path: &Path) -> Result<String> {
    let token = std::fs::read_to_string(path).map_err(|e| AocError::Auth {
        message: format!("could not read session file {}: {}", path.display(), e),
    })?;
    let token = token.trim();
    if token.is_empty() {
        return Err(AocError::Auth {
            message: format!("session file {} is empty", path.display()),
        });
    }
    Ok(token.to_string())
}

/// Read the optional headers JSON object. No file means no extra headers.
pub fn read_headers(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|e| AocError::io(path, e))?;
    serde_json::from_str(raw.trim()).map_err(|e| AocError::Auth {
        message: format!("invalid headers file {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_session_trims() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aoc_session");
        std::fs::write(&path, "  abc123\n").unwrap();
        assert_eq!(read_session(&path).unwrap(), "abc123");
    }

    #[test]
    fn test_read_session_missing_or_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aoc_session");
        assert!(matches!(read_session(&path), Err(AocError::Auth { .. })));

        std::fs::write(&path, "\n").unwrap();
        let err = read_session(&path).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_read_headers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("aoc_headers.json");
        assert!(read_headers(&path).unwrap().is_empty());

        std::fs::write(&path, r#"{"User-Agent": "github.com/me/aoc by me@example.com"}"#).unwrap();
        let headers = read_headers(&path).unwrap();
        assert_eq!(
            headers.get("User-Agent").map(String::as_str),
            Some("github.com/me/aoc by me@example.com")
        );

        std::fs::write(&path, "not json").unwrap();
        assert!(read_headers(&path).is_err());
    }

    #[test]
    fn test_cookie() {
        let creds = Credentials {
            session: "tok".into(),
            headers: BTreeMap::new(),
        };
        assert_eq!(creds.cookie(), "session=tok");
    }
}
