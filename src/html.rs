//! Scraping helpers for puzzle pages and answer responses.
//!
//! The site's markup is small and stable, so a handful of regexes is enough.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt;

use crate::error::{AocError, Result};

lazy_static! {
    static ref CODE_RE: Regex = Regex::new(r"(?s)<code[^>]*>(.*?)</code>").unwrap();
    static ref ARTICLE_RE: Regex = Regex::new(r"(?s)<article[^>]*>(.*?)</article>").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"(?s)<.*?>").unwrap();
    static ref RETURN_RE: Regex = Regex::new(r"(?s)\[Return.*?\]").unwrap();
    static ref SHARE_RE: Regex = Regex::new(r"(?s)You\scan\s\[Share.*$").unwrap();
    static ref ENTITY_RE: Regex = Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap();
}

/// Multi-line `<code>` blocks in document order, tags stripped and entities
/// decoded. Inline snippets (no newline) are skipped.
pub fn code_blocks(html: &str) -> Vec<String> {
    CODE_RE
        .captures_iter(html)
        .map(|caps| decode_entities(&TAG_RE.replace_all(&caps[1], "")))
        .filter(|text| text.contains('\n'))
        .collect()
}

/// Example input for a part: the Nth multi-line code block.
pub fn example_for_part(html: &str, part: u8) -> Option<String> {
    let index = usize::from(part).checked_sub(1)?;
    code_blocks(html).into_iter().nth(index)
}

pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some(' '),
                _ if name.starts_with("#x") || name.starts_with("#X") => {
                    u32::from_str_radix(&name[2..], 16).ok().and_then(char::from_u32)
                }
                _ if name.starts_with('#') => name[1..].parse().ok().and_then(char::from_u32),
                _ => None,
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// How the site judged a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    TooSoon,
    AlreadySolved,
    Unknown,
}

impl Verdict {
    fn classify(message: &str) -> Self {
        if message.contains("That's the right answer") {
            Verdict::Correct
        } else if message.contains("That's not the right answer") {
            Verdict::Incorrect
        } else if message.contains("You gave an answer too recently") {
            Verdict::TooSoon
        } else if message.contains("You don't seem to be solving the right level") {
            Verdict::AlreadySolved
        } else {
            Verdict::Unknown
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Correct => "correct",
            Verdict::Incorrect => "incorrect",
            Verdict::TooSoon => "too soon",
            Verdict::AlreadySolved => "already solved",
            Verdict::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// The readable part of an answer response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReport {
    pub verdict: Verdict,
    pub lines: Vec<String>,
}

/// Reduce the response `<article>` to one sentence per line, without links
/// back to the calendar, share prompts, or the generic "stuck" hint.
pub fn parse_submission(html: &str) -> Result<SubmissionReport> {
    let article = ARTICLE_RE
        .captures(html)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| AocError::Response {
            message: "No response article found".to_string(),
        })?;

    let article = article.replace("</p>", "").replace('\n', "");
    let article = TAG_RE.replace_all(&article, "");
    let article = RETURN_RE.replace_all(&article, "");
    let article = SHARE_RE.replace_all(&article, "");
    let article = decode_entities(&article)
        .replace('!', "!\n")
        .replace('.', ".\n")
        .replace(".\n)", ".)");

    let lines: Vec<String> = article
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("If you're stuck"))
        .map(str::to_string)
        .collect();

    let verdict = Verdict::classify(&lines.join(" "));
    Ok(SubmissionReport { verdict, lines })
}
