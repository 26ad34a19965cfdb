//! Report file I/O
//!
//! - [`load_records`] reads records from a `.json` or `.csv` file
//! - [`ReportFileWriter`] writes rendered reports into an output directory

mod file_writer;
mod input;

pub use file_writer::{ReportFileWriter, ReportWriteError};
pub use input::{RecordLoadError, load_records, parse_records};
