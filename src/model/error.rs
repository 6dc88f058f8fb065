//! Error types for the history timeline.
//!
//! This module defines the error taxonomy using `thiserror` for structured error handling.
//! Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the command-line shell
//!   - [`InputError`] - Page file/stdin reading failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//! - [`ParseError`] - A page or entry that is not valid JSON for the schema
//! - [`TimelineError`] - A single raw entry that cannot become a row
//! - [`FoldError`] - A fold toggle aimed at a row that cannot fold
//!
//! # Error Recovery Strategy
//!
//! Entry-level errors are **non-fatal**: the offending entry is skipped, rows appended
//! before it stay in place, and the condition is reported back to the caller as a
//! warning. Undecodable pages are skipped the same way. Input, config and logging
//! errors are fatal and propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error encompassing all fatal failure modes of the shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read pages from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Writing rendered rows to stdout failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading pages from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified page file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use history_timeline::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// No file path was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A page that could not be decoded into raw entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The page is not valid JSON, or not an array of entry objects.
    ///
    /// `page` is 1-based, matching the line number in JSONL input.
    #[error("Invalid JSON in page {page}: {message}")]
    InvalidJson {
        /// 1-based page number.
        page: usize,
        /// Decoder message.
        message: String,
    },

    /// One entry of an otherwise valid page has fields of the wrong type
    /// (bad timestamp, empty id, ...). Only that entry is dropped.
    #[error("Invalid entry {position} in page {page}: {message}")]
    InvalidEntry {
        /// 1-based page number.
        page: usize,
        /// 0-based index within the page.
        position: usize,
        /// Decoder message.
        message: String,
    },
}

/// Which defining fields a malformed raw entry carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// Both `version` and `rolledUpVersions` were present.
    Both,
    /// Neither `version` nor `rolledUpVersions` was present.
    Neither,
}

impl std::fmt::Display for EntryShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryShape::Both => f.write_str("both version and rolledUpVersions present"),
            EntryShape::Neither => f.write_str("neither version nor rolledUpVersions present"),
        }
    }
}

/// A raw entry that cannot be turned into a row.
///
/// `position` is the entry's 0-based index within the page it arrived in.
/// Both variants are per-entry and recoverable: the entry is skipped and the
/// rest of the page is still processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    /// The entry carried neither or both of its defining fields.
    #[error("Malformed entry at position {position}: {shape}")]
    MalformedEntry {
        /// Index within the page.
        position: usize,
        /// What was wrong with it.
        shape: EntryShape,
    },

    /// A rolled-up group with no commits; it would have no anchor date.
    #[error("Empty rolled-up group at position {position}")]
    EmptyRolledUpGroup {
        /// Index within the page.
        position: usize,
    },
}

impl TimelineError {
    /// Position of the offending entry within its page.
    pub fn position(&self) -> usize {
        match self {
            TimelineError::MalformedEntry { position, .. }
            | TimelineError::EmptyRolledUpGroup { position } => *position,
        }
    }
}

/// A fold toggle that cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    /// No row exists at the index.
    #[error("Row {index} out of bounds (len: {len})")]
    OutOfBounds {
        /// Requested row.
        index: usize,
        /// Rows in the timeline.
        len: usize,
    },

    /// The row exists but is not a folded group.
    #[error("Row {index} is not a folded commit group")]
    NotFoldable {
        /// Requested row.
        index: usize,
    },
}
