//! Infrastructure layer for pluggable
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod notifications;
pub mod payment;
pub mod persistence;
pub mod report;

// Re-export commonly used types
pub use config::{
    AmountSetting, ConfigLoader, ConfigSource, ConfigValidationError, FileConfig,
    FileNotificationsConfig, FileOutputConfig, FilePaymentConfig, FileReportConfig,
};
pub use notifications::{
    DRY_RUN_CHANNEL, EmailNotifier, RecordingNotifier, SentMessage, SmsNotifier, build_notifier,
    builtin_notifiers, includes_dry_run,
};
pub use payment::SimulatedPaymentGateway;
pub use persistence::InMemoryUserRepository;
pub use report::{RecordLoadError, ReportFileWriter, ReportWriteError, load_records};
