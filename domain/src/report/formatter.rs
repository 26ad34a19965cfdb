//! Report formatter contract

use super::record::{FieldValue, Record};
use crate::core::error::DomainError;

/// Renders an ordered set of records into a text document.
///
/// Any type implementing this trait can be handed to the report generator;
/// the generator never looks at which formatter it holds.
///
/// Policy shared by every formatter:
/// - an empty record set is never an error and renders the format's empty
///   document
/// - a record missing a field the layout needs fails with
///   [`DomainError::MissingField`]
pub trait ReportFormatter: Send + Sync {
    /// Registry key for this formatter (e.g. `"csv"`)
    fn name(&self) -> &'static str;

    /// File extension for rendered output, without the dot
    fn extension(&self) -> &'static str;

    /// Render the records
    fn format(&self, records: &[Record]) -> Result<String, DomainError>;
}

/// Column layout shared by the tabular formatters.
///
/// Column order comes from the first record. Every later record must carry
/// exactly the same set of fields.
#[derive(Debug)]
pub struct Table<'a> {
    columns: Vec<&'a str>,
    rows: Vec<Vec<&'a FieldValue>>,
}

impl<'a> Table<'a> {
    pub fn from_records(records: &'a [Record]) -> Result<Self, DomainError> {
        let columns: Vec<&str> = match records.first() {
            Some(first) => first.field_names().collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if let Some(extra) = record.field_names().find(|name| !columns.contains(name)) {
                return Err(DomainError::UnexpectedField {
                    record: index,
                    field: extra.to_string(),
                });
            }
            let row = columns
                .iter()
                .map(|column| {
                    record.get(column).ok_or_else(|| DomainError::MissingField {
                        record: index,
                        field: column.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[&'a str] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<&'a FieldValue>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Fetch a required field, failing with the record's position
pub(crate) fn required<'a>(
    record: &'a Record,
    index: usize,
    field: &str,
) -> Result<&'a FieldValue, DomainError> {
    record.get(field).ok_or_else(|| DomainError::MissingField {
        record: index,
        field: field.to_string(),
    })
}
