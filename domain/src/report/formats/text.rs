//! Plain text report layout

use crate::core::error::DomainError;
use crate::report::formatter::{ReportFormatter, required};
use crate::report::record::Record;

const HEADER: &str = "===== REPORT =====";
const FOOTER: &str = "==================";

/// Fixed header / row / footer layout, one `- {name}: ${value}` line per record.
///
/// Requires `name` and `value` on every record; other fields are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn format(&self, records: &[Record]) -> Result<String, DomainError> {
        let mut report = String::new();
        report.push_str(HEADER);
        report.push('\n');
        for (index, record) in records.iter().enumerate() {
            let name = required(record, index, "name")?;
            let value = required(record, index, "value")?;
            report.push_str(&format!("- {}: ${}\n", name, value));
        }
        report.push_str(FOOTER);
        report.push('\n');
        Ok(report)
    }
}
