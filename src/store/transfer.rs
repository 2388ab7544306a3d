//! Quote import and export
//!
//! Files use the same JSON array shape as the persisted collection.

use crate::storage::{get_data_dir, StorageError};
use crate::types::Quote;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the exported file
pub const EXPORT_FILE_NAME: &str = "quotes.json";

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON array of quotes")]
    NotAnArray,
    #[error("Quote #{} needs a non-empty text and category", .index + 1)]
    InvalidRecord { index: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Serialize quotes as pretty-printed JSON
pub fn export_json(quotes: &[Quote]) -> Result<String, TransferError> {
    Ok(serde_json::to_string_pretty(quotes)?)
}

/// Write `quotes.json` into `dir` and return its path
pub fn export_to_file(quotes: &[Quote], dir: &Path) -> Result<PathBuf, TransferError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, export_json(quotes)?)?;

    tracing::info!("Exported {} quotes to {}", quotes.len(), path.display());
    Ok(path)
}

/// Downloads folder, or the data directory when there is none
pub fn default_export_dir() -> Result<PathBuf, TransferError> {
    if let Some(download_dir) = directories::UserDirs::new()
        .as_ref()
        .and_then(|dirs| dirs.download_dir())
    {
        return Ok(download_dir.to_path_buf());
    }
    Ok(get_data_dir()?)
}

/// Parse and validate the contents of an import file
///
/// The whole file is rejected if any record is unusable.
pub fn parse_import(json: &str) -> Result<Vec<Quote>, TransferError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(TransferError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let quote: Quote = serde_json::from_value(item)
                .map_err(|_| TransferError::InvalidRecord { index })?;
            if quote.text.trim().is_empty() || quote.category.trim().is_empty() {
                return Err(TransferError::InvalidRecord { index });
            }
            Ok(quote)
        })
        .collect()
}

/// Read and validate an import file
pub fn import_file(path: &Path) -> Result<Vec<Quote>, TransferError> {
    let json = fs::read_to_string(path)?;
    parse_import(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import_file() {
        let dir = TempDir::new().unwrap();
        let quotes = vec![
            Quote::new("Stay hungry", "Motivation"),
            Quote::new("Keep going", "General"),
        ];

        let path = export_to_file(&quotes, &dir.path().join("out")).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  {"));
        assert_eq!(import_file(&path).unwrap(), quotes);
    }

    #[test]
    fn test_parse_import_keeps_duplicates() {
        let json = r#"[
            {"text": "a", "category": "X"},
            {"text": "a", "category": "X"}
        ]"#;
        assert_eq!(parse_import(json).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_import_rejects_non_array() {
        assert!(matches!(
            parse_import(r#"{"text": "a", "category": "X"}"#),
            Err(TransferError::NotAnArray)
        ));
        assert!(matches!(parse_import("not json"), Err(TransferError::Json(_))));
    }

    #[test]
    fn test_parse_import_rejects_bad_records() {
        let missing = r#"[{"text": "a", "category": "X"}, {"text": "b"}]"#;
        assert!(matches!(
            parse_import(missing),
            Err(TransferError::InvalidRecord { index: 1 })
        ));

        let blank = r#"[{"text": " ", "category": "X"}]"#;
        let err = parse_import(blank).unwrap_err();
        assert!(matches!(err, TransferError::InvalidRecord { index: 0 }));
        assert_eq!(err.to_string(), "Quote #1 needs a non-empty text and category");
    }

    #[test]
    fn test_parse_import_empty_array() {
        assert!(parse_import("[]").unwrap().is_empty());
    }
}
