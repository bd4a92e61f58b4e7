//! Report rendering
//!
//! The text report reproduces the classic console layout: a header, a blank
//! line, one word per line, two blank lines, then the identifier section.

use super::result::PipelineResult;
use crate::config::constants::report::{IDENTIFIER_HEADER, RESERVED_HEADER};
use crate::config::OutputFormat;
use crate::tree::BalancedOrderedSet;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One value per line, ascending, nothing else
pub fn write_set<W: Write>(
    out: &mut W,
    set: &BalancedOrderedSet<String>,
) -> Result<(), OutputError> {
    for word in set {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

pub fn write_text_report<W: Write>(
    out: &mut W,
    reserved_words: &BalancedOrderedSet<String>,
    identifiers: &BalancedOrderedSet<String>,
) -> Result<(), OutputError> {
    write!(out, "{}\n\n", RESERVED_HEADER)?;
    write_set(out, reserved_words)?;
    write!(out, "\n\n")?;
    write!(out, "{}\n\n", IDENTIFIER_HEADER)?;
    write_set(out, identifiers)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    reserved_words: &'a BalancedOrderedSet<String>,
    identifiers: &'a BalancedOrderedSet<String>,
}

/// `{"reserved_words": [...], "identifiers": [...]}` followed by a newline
pub fn write_json_report<W: Write>(
    out: &mut W,
    reserved_words: &BalancedOrderedSet<String>,
    identifiers: &BalancedOrderedSet<String>,
) -> Result<(), OutputError> {
    let report = JsonReport {
        reserved_words,
        identifiers,
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    result: &PipelineResult,
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => {
            write_text_report(out, &result.reserved_words, &result.identifiers)?
        }
        OutputFormat::Json => {
            write_json_report(out, &result.reserved_words, &result.identifiers)?
        }
    }
    out.flush()?;
    Ok(())
}

/// Scan statistics printed by `--stats`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub strategy: String,
    pub vocabulary_size: usize,
    pub files_scanned: usize,
    pub files_missing: usize,
    pub tokens_seen: usize,
    pub reserved_tokens: usize,
    pub identifier_tokens: usize,
    pub distinct_reserved: usize,
    pub distinct_identifiers: usize,
    pub reserved_rebuilds: usize,
    pub identifier_rebuilds: usize,
    pub duration_ms: f64,
}

impl From<&PipelineResult> for ReportSummary {
    fn from(result: &PipelineResult) -> Self {
        let metrics = &result.metrics;
        Self {
            strategy: result.strategy.to_string(),
            vocabulary_size: result.vocabulary_size,
            files_scanned: result.files_scanned.len(),
            files_missing: result.files_missing.len(),
            tokens_seen: metrics.tokens_seen,
            reserved_tokens: metrics.reserved_tokens,
            identifier_tokens: metrics.identifier_tokens,
            distinct_reserved: metrics.distinct_reserved,
            distinct_identifiers: metrics.distinct_identifiers,
            reserved_rebuilds: metrics.reserved_rebuilds,
            identifier_rebuilds: metrics.identifier_rebuilds,
            duration_ms: result.processing_duration.as_secs_f64() * 1000.0,
        }
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan summary:")?;
        writeln!(f, "  Rebalance strategy: {}", self.strategy)?;
        writeln!(f, "  Vocabulary size: {}", self.vocabulary_size)?;
        writeln!(
            f,
            "  Files scanned: {} ({} missing)",
            self.files_scanned, self.files_missing
        )?;
        writeln!(
            f,
            "  Tokens: {} ({} reserved, {} identifier)",
            self.tokens_seen, self.reserved_tokens, self.identifier_tokens
        )?;
        writeln!(
            f,
            "  Distinct: {} reserved words, {} identifiers",
            self.distinct_reserved, self.distinct_identifiers
        )?;
        writeln!(
            f,
            "  Rebuilds: {} reserved, {} identifier",
            self.reserved_rebuilds, self.identifier_rebuilds
        )?;
        write!(f, "  Duration: {:.2} ms", self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BalancedOrderedSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_report_layout() {
        let mut out = Vec::new();
        write_text_report(&mut out, &set(&["return", "int"]), &set(&["x", "5"])).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Reserved words found:\n\nint\nreturn\n\n\nUser defined identifiers found:\n\n5\nx\n"
        );
    }

    #[test]
    fn test_text_report_with_empty_sets() {
        let mut out = Vec::new();
        write_text_report(&mut out, &set(&[]), &set(&[])).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Reserved words found:\n\n\n\nUser defined identifiers found:\n\n"
        );
    }

    #[test]
    fn test_write_set_alone() {
        let mut out = Vec::new();
        write_set(&mut out, &set(&["b", "a"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_json_report(&mut out, &set(&["if"]), &set(&["y", "x"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["reserved_words"], serde_json::json!(["if"]));
        assert_eq!(value["identifiers"], serde_json::json!(["x", "y"]));
    }
}
