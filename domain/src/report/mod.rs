//! Report formatting domain
//!
//! A report is an ordered set of [`Record`]s rendered by a
//! [`ReportFormatter`]. Formatters are interchangeable strategies; new ones
//! plug in by implementing the trait and registering under a key.
//!
//! ```text
//! records ──► ReportFormatter::format ──► text
//!                 ▲
//!     text | csv | html | markdown | json | <your formatter>
//! ```

pub mod formats;
pub mod formatter;
pub mod record;

pub use formats::builtin_formatters;
pub use formatter::{ReportFormatter, Table};
pub use record::{FieldValue, Record};
