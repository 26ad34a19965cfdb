//! Record input files

use pluggable_domain::{CsvReader, DomainError, Record};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RecordLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported input file '{0}' (expected .json or .csv)")]
    UnsupportedExtension(PathBuf),

    #[error("Invalid JSON records: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] DomainError),
}

/// Parse records from text; `extension` is `json` or `csv`
pub fn parse_records(contents: &str, extension: &str) -> Result<Vec<Record>, RecordLoadError> {
    match extension.to_lowercase().as_str() {
        "json" => Ok(serde_json::from_str(contents)?),
        "csv" => Ok(CsvReader.parse(contents)?),
        other => Err(RecordLoadError::UnsupportedExtension(PathBuf::from(format!(
            "*.{}",
            other
        )))),
    }
}

/// Load records from a file, choosing the parser by extension
pub fn load_records(path: &Path) -> Result<Vec<Record>, RecordLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| RecordLoadError::UnsupportedExtension(path.to_path_buf()))?;

    let contents = fs::read_to_string(path).map_err(|source| RecordLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&contents, extension)?;
    debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluggable_domain::FieldValue;

    #[test]
    fn test_parse_json_records() {
        let records = parse_records(r#"[{"name": "A", "value": 100}]"#, "json").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("value"), Some(&FieldValue::Integer(100)));
    }

    #[test]
    fn test_parse_csv_records() {
        let records = parse_records("name,value\nA,100\nB,2.5\n", "CSV").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("value"), Some(&FieldValue::Float(2.5)));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            parse_records("", "xml"),
            Err(RecordLoadError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.json");
        fs::write(&path, r#"[{"name": "A", "value": 1}, {"name": "B", "value": 2}]"#).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, RecordLoadError::Io { .. }));
    }
}
