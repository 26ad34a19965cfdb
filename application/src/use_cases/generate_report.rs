//! Generate Report use case
//!
//! Renders records with whichever [`ReportFormatter`] the caller injected.

use pluggable_domain::{DomainError, Record, ReportFormatter, StrategySlot};
use std::sync::Arc;
use tracing::debug;

/// Report generator that works with any formatter
///
/// Holds one formatter supplied by the caller and never inspects which one
/// it is. Formatter errors are returned unchanged.
#[derive(Clone)]
pub struct GenerateReportUseCase {
    formatter: StrategySlot<dyn ReportFormatter>,
}

impl GenerateReportUseCase {
    pub fn new(formatter: Arc<dyn ReportFormatter>) -> Self {
        Self {
            formatter: StrategySlot::new(formatter),
        }
    }

    /// Render `records` with the current formatter
    pub fn generate(&self, records: &[Record]) -> Result<String, DomainError> {
        let formatter = self.formatter.current();
        debug!(
            formatter = formatter.name(),
            records = records.len(),
            "Generating report"
        );
        formatter.format(records)
    }

    /// Swap the formatter used by subsequent calls, returning the old one
    pub fn set_formatter(&mut self, formatter: Arc<dyn ReportFormatter>) -> Arc<dyn ReportFormatter> {
        debug!(formatter = formatter.name(), "Formatter replaced");
        self.formatter.replace(formatter)
    }

    pub fn formatter(&self) -> &dyn ReportFormatter {
        self.formatter.current()
    }
}
