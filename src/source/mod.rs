//! Page input sources.
//!
//! Pages are read once, in full, from a file path or from piped stdin.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where pages are read from. Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A pages file on disk.
    File(PathBuf),
    /// Pages piped into stdin.
    Stdin,
}

impl InputSource {
    /// Read the whole source into a string.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file vanished since detection,
    /// `InputError::Io` for other I/O errors.
    pub fn read_to_string(&self) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().lock().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => InputError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io(err),
    })
}

/// Detect the input source.
///
/// # Logic:
/// 1. If a file path is provided: use it (it must exist)
/// 2. If stdin is piped: use stdin
/// 3. Else: return `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist and
/// `InputError::NoInput` if no file is given and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if path.exists() => Ok(InputSource::File(path)),
        Some(path) => Err(InputError::FileNotFound { path }),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_file_not_found() {
        let result = detect_input_source(Some(PathBuf::from("/nonexistent/pages.jsonl")));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn existing_file_is_read_in_full() {
        let path = std::env::temp_dir().join("history_timeline_source_test.jsonl");
        fs::write(&path, "[]\n[]\n").expect("write fixture");

        let source = detect_input_source(Some(path.clone())).expect("file exists");
        assert_eq!(source, InputSource::File(path.clone()));
        assert_eq!(source.read_to_string().expect("readable"), "[]\n[]\n");

        fs::remove_file(path).ok();
    }

    #[test]
    fn file_removed_after_detection_reports_not_found() {
        let path = PathBuf::from("/nonexistent/removed.jsonl");
        let source = InputSource::File(path.clone());
        match source.read_to_string() {
            Err(InputError::FileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }
}
