//! Built-in report formatters.
//!
//! | Key        | Formatter             | Empty input                                  |
//! |------------|-----------------------|----------------------------------------------|
//! | `text`     | [`TextFormatter`]     | header and footer only                       |
//! | `csv`      | [`CsvFormatter`]      | empty string                                 |
//! | `html`     | [`HtmlFormatter`]     | `<html><body><p>No data</p></body></html>`   |
//! | `markdown` | [`MarkdownFormatter`] | `No data`                                    |
//! | `json`     | [`JsonFormatter`]     | `[]`                                         |

mod csv;
mod html;
mod json;
mod markdown;
mod text;

pub use csv::{CsvFormatter, CsvReader};
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use crate::report::formatter::ReportFormatter;
use crate::strategy::StrategyRegistry;
use std::sync::Arc;

/// Registry pre-populated with every built-in formatter
pub fn builtin_formatters() -> StrategyRegistry<dyn ReportFormatter> {
    StrategyRegistry::<dyn ReportFormatter>::new("report format")
        .register("text", Arc::new(TextFormatter))
        .register("csv", Arc::new(CsvFormatter))
        .register("html", Arc::new(HtmlFormatter))
        .register("markdown", Arc::new(MarkdownFormatter))
        .register("json", Arc::new(JsonFormatter))
}
