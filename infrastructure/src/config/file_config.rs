//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Variant keys stay plain strings here; they are resolved against the
//! strategy registries when the CLI wires things up.

use pluggable_application::PaymentParams;
use pluggable_domain::{Money, MoneyParseError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("payment.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("notifications.channels cannot be empty")]
    NoChannels,

    #[error("report.format cannot be empty")]
    EmptyFormat,

    #[error("payment.max_amount '{value}' is invalid: {source}")]
    InvalidMaxAmount {
        value: String,
        #[source]
        source: MoneyParseError,
    },

    #[error("payment.max_amount must be positive")]
    NonPositiveMaxAmount,
}

/// Raw report configuration from TOML (`[report]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// Formatter key (e.g. "csv")
    pub format: String,
    /// Directory for `report --out`
    pub output_dir: PathBuf,
}

impl Default for FileReportConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Raw notification configuration from TOML (`[notifications]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationsConfig {
    /// Channel keys, delivered in this order
    pub channels: Vec<String>,
}

impl Default for FileNotificationsConfig {
    fn default() -> Self {
        Self {
            channels: vec!["email".to_string()],
        }
    }
}

/// An amount written either as a string or as a bare number
///
/// Environment variables and TOML floats arrive as numbers; both are
/// rendered back to decimal text and parsed as [`Money`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountSetting {
    Text(String),
    Number(f64),
}

impl AmountSetting {
    fn as_text(&self) -> String {
        match self {
            AmountSetting::Text(s) => s.trim().to_string(),
            AmountSetting::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for AmountSetting {
    fn from(s: &str) -> Self {
        AmountSetting::Text(s.to_string())
    }
}

/// Raw payment configuration from TOML (`[payment]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePaymentConfig {
    pub debug_mode: bool,
    pub max_retry: u32,
    pub timeout_seconds: u64,
    /// Decimal amount, e.g. "10000.00" or 10000
    pub max_amount: AmountSetting,
}

impl Default for FilePaymentConfig {
    fn default() -> Self {
        let params = PaymentParams::default();
        Self {
            debug_mode: params.debug_mode,
            max_retry: params.max_retry,
            timeout_seconds: params.timeout.as_secs(),
            max_amount: AmountSetting::Text(params.max_amount.to_string()),
        }
    }
}

impl FilePaymentConfig {
    fn parse_max_amount(&self) -> Result<Money, ConfigValidationError> {
        let raw = self.max_amount.as_text();
        let amount: Money = raw
            .parse()
            .map_err(|source| ConfigValidationError::InvalidMaxAmount { value: raw.clone(), source })?;
        if !amount.is_positive() {
            return Err(ConfigValidationError::NonPositiveMaxAmount);
        }
        Ok(amount)
    }

    /// Convert to application-level payment parameters
    pub fn to_params(&self) -> Result<PaymentParams, ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(PaymentParams::default()
            .with_debug_mode(self.debug_mode)
            .with_max_retry(self.max_retry)
            .with_timeout(Duration::from_secs(self.timeout_seconds))
            .with_max_amount(self.parse_max_amount()?))
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub report: FileReportConfig,
    pub notifications: FileNotificationsConfig,
    pub payment: FilePaymentConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.report.format.trim().is_empty() {
            return Err(ConfigValidationError::EmptyFormat);
        }

        if self.notifications.channels.is_empty() {
            return Err(ConfigValidationError::NoChannels);
        }

        self.payment.to_params().map(|_| ())
    }
}
