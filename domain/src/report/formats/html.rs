//! HTML table report

use crate::core::error::DomainError;
use crate::report::formatter::{ReportFormatter, Table};
use crate::report::record::Record;

const EMPTY_DOCUMENT: &str = "<html><body><p>No data</p></body></html>";

/// Minimal HTML document with one `<table>`; header and cell text is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl ReportFormatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    fn format(&self, records: &[Record]) -> Result<String, DomainError> {
        let table = Table::from_records(records)?;
        if table.is_empty() {
            return Ok(EMPTY_DOCUMENT.to_string());
        }

        let mut report = String::from("<html><body><table>\n<tr>");
        for column in table.columns() {
            report.push_str(&format!("<th>{}</th>", escape(column)));
        }
        report.push_str("</tr>\n");

        for row in table.rows() {
            report.push_str("<tr>");
            for value in row {
                report.push_str(&format!("<td>{}</td>", escape(&value.to_string())));
            }
            report.push_str("</tr>\n");
        }

        report.push_str("</table></body></html>\n");
        Ok(report)
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_table() {
        let records = vec![
            Record::new().with("name", "Product A").with("value", 100),
            Record::new().with("name", "Product B").with("value", 200),
        ];
        let report = HtmlFormatter.format(&records).unwrap();
        assert_eq!(
            report,
            "<html><body><table>\n\
             <tr><th>name</th><th>value</th></tr>\n\
             <tr><td>Product A</td><td>100</td></tr>\n\
             <tr><td>Product B</td><td>200</td></tr>\n\
             </table></body></html>\n"
        );
    }

    #[test]
    fn test_html_escapes_markup() {
        let records = vec![Record::new().with("name", "<b>A & B</b>")];
        let report = HtmlFormatter.format(&records).unwrap();
        assert!(report.contains("<td>&lt;b&gt;A &amp; B&lt;/b&gt;</td>"));
    }

    #[test]
    fn test_html_empty_document() {
        assert_eq!(
            HtmlFormatter.format(&[]).unwrap(),
            "<html><body><p>No data</p></body></html>"
        );
    }
}
