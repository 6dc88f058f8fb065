//! Page parser for history input.
//!
//! Input is either one JSON array of pages (`[[entry, ...], [entry, ...]]`) or
//! JSONL with one page (a JSON array of entries) per line. Decoding is
//! graceful: an undecodable page or entry is reported and skipped so the rest
//! of the history still shows.

use crate::model::{ParseError, RawEntry};
use serde_json::Value;
use tracing::warn;

/// Pages decoded from an input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPages {
    /// Pages in input order.
    pub pages: Vec<Vec<RawEntry>>,
    /// Pages or entries that could not be decoded.
    pub errors: Vec<ParseError>,
}

/// Parse a single page (a JSON array of entries).
///
/// Entries that fail to decode are dropped and returned alongside the page.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` if `raw` is not a JSON array.
pub fn parse_page(raw: &str, page: usize) -> Result<(Vec<RawEntry>, Vec<ParseError>), ParseError> {
    let values: Vec<Value> = serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
        page,
        message: e.to_string(),
    })?;
    Ok(decode_entries(values, page))
}

fn decode_entries(values: Vec<Value>, page: usize) -> (Vec<RawEntry>, Vec<ParseError>) {
    let mut entries = Vec::with_capacity(values.len());
    let mut errors = Vec::new();

    for (position, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                let err = ParseError::InvalidEntry {
                    page,
                    position,
                    message: e.to_string(),
                };
                warn!(error = %err, "Dropping undecodable entry");
                errors.push(err);
            }
        }
    }

    (entries, errors)
}

/// Parse a whole input document into pages.
///
/// A document that is a JSON array of arrays is read as a list of pages.
/// Anything else is read as JSONL, one page per non-blank line.
pub fn parse_pages(input: &str) -> ParsedPages {
    if let Ok(pages) = serde_json::from_str::<Vec<Vec<Value>>>(input) {
        return pages
            .into_iter()
            .enumerate()
            .fold(ParsedPages::default(), |mut acc, (i, values)| {
                let (entries, errors) = decode_entries(values, i + 1);
                acc.pages.push(entries);
                acc.errors.extend(errors);
                acc
            });
    }

    let mut parsed = ParsedPages::default();
    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_page(line, i + 1) {
            Ok((entries, errors)) => {
                parsed.pages.push(entries);
                parsed.errors.extend(errors);
            }
            Err(err) => {
                warn!(error = %err, "Skipping undecodable page");
                parsed.errors.push(err);
            }
        }
    }
    parsed
}
