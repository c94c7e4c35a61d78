use regex::Regex;
use std::sync::LazyLock;
use strum_macros::Display;

/// One parsed operator instruction.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Click the element with the given id.
    Click(String),
    /// Dump the current board state to the log.
    State,
    /// Shut the dispatch loop down.
    Quit,
}

/// Matches `click <element-id>` with space, underscore or dash separators.
static CLICK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^click[\s_-]+([a-z0-9-]+)\s*$").unwrap());

/// Card shortcuts for the four wired buttons.
const ALIASES: [(&str, &str); 4] = [
    ("conflict", "resolve-conflict-btn"),
    ("error", "trigger-error-btn"),
    ("relief", "relief-button"),
    ("break", "break-tutorial-btn"),
];

impl ConsoleCommand {
    /// Parses one console line; anything unknown yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("state") {
            return Some(Self::State);
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            return Some(Self::Quit);
        }
        for (alias, id) in ALIASES {
            if trimmed.eq_ignore_ascii_case(alias) {
                return Some(Self::Click(id.to_owned()));
            }
        }
        CLICK_REGEX.captures(trimmed).map(|caps| Self::Click(caps[1].to_lowercase()))
    }
}
