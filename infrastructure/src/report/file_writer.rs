//! Writes rendered reports to disk

use pluggable_domain::ReportFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportWriteError {
    #[error("Invalid report name '{0}': must be a plain file name")]
    InvalidName(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `<stem>.<extension>` files into one output directory
#[derive(Debug, Clone)]
pub struct ReportFileWriter {
    output_dir: PathBuf,
}

impl ReportFileWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Target path for a report named `stem` rendered by `formatter`
    pub fn path_for(
        &self,
        stem: &str,
        formatter: &dyn ReportFormatter,
    ) -> Result<PathBuf, ReportWriteError> {
        let is_plain = !stem.is_empty()
            && Path::new(stem).file_name().and_then(|n| n.to_str()) == Some(stem)
            && stem != "..";
        if !is_plain {
            return Err(ReportWriteError::InvalidName(stem.to_string()));
        }
        Ok(self
            .output_dir
            .join(format!("{}.{}", stem, formatter.extension())))
    }

    /// Write the rendered report, creating the output directory if needed
    pub fn write(
        &self,
        stem: &str,
        formatter: &dyn ReportFormatter,
        contents: &str,
    ) -> Result<PathBuf, ReportWriteError> {
        let path = self.path_for(stem, formatter)?;
        let io_error = |source| ReportWriteError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.output_dir).map_err(io_error)?;
        fs::write(&path, contents).map_err(io_error)?;

        info!(path = %path.display(), format = formatter.name(), bytes = contents.len(), "Report written");
        Ok(path)
    }
}
