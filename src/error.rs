//! Error handling boundary (spec §7).
//!
//! Invariant violations inside the search (DAG inconsistency, hash mismatch,
//! a DP bound overrun) are bugs, not recoverable conditions, and are reported
//! by panicking with a diagnostic dump — the same posture the teacher takes
//! with `.expect("...")` on conditions it considers impossible. Everything
//! that crosses an I/O or parsing boundary (CLI flags, advice/assumption
//! files, the minibs binary cache) returns `anyhow::Result`.

pub type Result<T> = anyhow::Result<T>;

/// A parse error with the byte offset and source line it was found on, so the
/// CLI can print a location-identifying message and exit non-zero before any
/// search starts (spec §7 "input parse error").
#[derive(Debug)]
pub struct ParseError {
    pub kind: &'static str,
    pub line: usize,
    pub text: String,
}

impl ParseError {
    pub fn new(kind: &'static str, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}: {:?}", self.kind, self.line, self.text)
    }
}

impl std::error::Error for ParseError {}
