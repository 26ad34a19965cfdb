//! JSON report

use crate::core::error::DomainError;
use crate::report::formatter::{ReportFormatter, Table};
use crate::report::record::Record;

/// Pretty-printed JSON array of objects with field order preserved.
///
/// Records are shape-checked like the other tabular formats before
/// serialization. An empty record set renders as `[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn format(&self, records: &[Record]) -> Result<String, DomainError> {
        Table::from_records(records)?;
        serde_json::to_string_pretty(records)
            .map_err(|e| DomainError::MalformedInput(e.to_string()))
    }
}
