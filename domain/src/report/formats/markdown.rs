//! Markdown table report

use crate::core::error::DomainError;
use crate::report::formatter::{ReportFormatter, Table};
use crate::report::record::Record;

const EMPTY_DOCUMENT: &str = "No data";

/// GitHub-flavoured Markdown table; `|` inside cells is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn format(&self, records: &[Record]) -> Result<String, DomainError> {
        let table = Table::from_records(records)?;
        if table.is_empty() {
            return Ok(EMPTY_DOCUMENT.to_string());
        }

        let mut report = row(table.columns().iter().map(|c| escape(c)));
        report.push_str(&row(table.columns().iter().map(|_| "---".to_string())));
        for values in table.rows() {
            report.push_str(&row(values.iter().map(|v| escape(&v.to_string()))));
        }
        Ok(report)
    }
}

fn row(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |\n", cells.collect::<Vec<_>>().join(" | "))
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}
