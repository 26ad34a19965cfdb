//! CSV formatter and the matching reader

use crate::core::error::DomainError;
use crate::report::formatter::{ReportFormatter, Table};
use crate::report::record::{FieldValue, Record};

/// Comma-separated values with a header line.
///
/// Cells containing a comma, a double quote, or a line break are quoted and
/// inner quotes are doubled. An empty record set renders as an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn format(&self, records: &[Record]) -> Result<String, DomainError> {
        let table = Table::from_records(records)?;
        if table.is_empty() {
            return Ok(String::new());
        }

        let mut report = join_line(table.columns().iter().map(|c| escape(c)));
        for row in table.rows() {
            report.push_str(&join_line(row.iter().map(|v| escape(&v.to_string()))));
        }
        Ok(report)
    }
}

fn join_line(cells: impl Iterator<Item = String>) -> String {
    let mut line = cells.collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Parses CSV produced by [`CsvFormatter`] back into records.
///
/// The first line is the header. Cell values are typed with
/// [`FieldValue::infer`], so CSV is only lossless for values whose text form
/// infers back to the same type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReader;

impl CsvReader {
    pub fn parse(&self, input: &str) -> Result<Vec<Record>, DomainError> {
        let mut lines = split_rows(input)?.into_iter();
        let header = match lines.next() {
            Some(header) => header,
            None => return Ok(Vec::new()),
        };

        for (i, name) in header.iter().enumerate() {
            if header[..i].contains(name) {
                return Err(DomainError::MalformedInput(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
        }

        lines
            .enumerate()
            .map(|(index, cells)| {
                if cells.len() != header.len() {
                    return Err(DomainError::MalformedInput(format!(
                        "row {} has {} cells, expected {}",
                        index,
                        cells.len(),
                        header.len()
                    )));
                }
                Ok(header
                    .iter()
                    .zip(cells)
                    .map(|(name, cell)| (name.clone(), FieldValue::infer(&cell)))
                    .collect::<Record>())
            })
            .collect()
    }
}

/// Split input into rows of unquoted cells
fn split_rows(input: &str) -> Result<Vec<Vec<String>>, DomainError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut row_started = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        row_started = true;
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
            continue;
        }
        match c {
            '"' if cell.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
                row_started = false;
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err(DomainError::MalformedInput(
            "unterminated quoted cell".to_string(),
        ));
    }
    if row_started {
        row.push(cell);
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Record> {
        vec![
            Record::new().with("name", "Product A").with("value", 100),
            Record::new().with("name", "Product B").with("value", 200),
        ]
    }

    #[test]
    fn test_csv_header_then_rows_in_order() {
        let report = CsvFormatter.format(&products()).unwrap();
        assert_eq!(report, "name,value\nProduct A,100\nProduct B,200\n");
    }

    #[test]
    fn test_csv_empty_is_empty_string() {
        assert_eq!(CsvFormatter.format(&[]).unwrap(), "");
    }

    #[test]
    fn test_csv_quotes_special_cells() {
        let records = vec![Record::new().with("name", "Smith, \"Jo\"").with("note", "a\nb")];
        let report = CsvFormatter.format(&records).unwrap();
        assert_eq!(report, "name,note\n\"Smith, \"\"Jo\"\"\",\"a\nb\"\n");
    }

    #[test]
    fn test_csv_missing_field_in_later_record() {
        let records = vec![
            Record::new().with("name", "A").with("value", 1),
            Record::new().with("name", "B"),
        ];
        assert!(CsvFormatter.format(&records).unwrap_err().is_shape_violation());
    }

    #[test]
    fn test_round_trip_single_record() {
        let records = vec![Record::new().with("name", "A").with("value", 100)];
        let text = CsvFormatter.format(&records).unwrap();
        assert_eq!(CsvReader.parse(&text).unwrap(), records);
    }

    #[test]
    fn test_round_trip_quoted_cells() {
        let records = vec![
            Record::new().with("name", "Smith, \"Jo\"").with("ratio", 0.5).with("ok", true),
            Record::new().with("name", "line\nbreak").with("ratio", 2.0).with("ok", false),
        ];
        let text = CsvFormatter.format(&records).unwrap();
        assert_eq!(CsvReader.parse(&text).unwrap(), records);
    }

    #[test]
    fn test_reader_handles_crlf_and_missing_trailing_newline() {
        let records = CsvReader.parse("id,status\r\n1,active\r\n2,inactive").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("id"), Some(&FieldValue::Integer(2)));
        assert_eq!(records[1].get("status"), Some(&FieldValue::Text("inactive".into())));
    }

    #[test]
    fn test_reader_rejects_ragged_rows() {
        let err = CsvReader.parse("a,b\n1,2,3\n").unwrap_err();
        assert_eq!(
            err,
            DomainError::MalformedInput("row 0 has 3 cells, expected 2".into())
        );
    }

    #[test]
    fn test_reader_rejects_unterminated_quote() {
        assert!(CsvReader.parse("a\n\"open\n").is_err());
    }

    #[test]
    fn test_reader_empty_input() {
        assert!(CsvReader.parse("").unwrap().is_empty());
    }
}
