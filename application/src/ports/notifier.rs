//! Notification port
//!
//! Defines the interface for delivering a message to a recipient over some
//! channel. Use cases depend only on this trait; transports live in the
//! infrastructure layer.

use thiserror::Error;

/// Errors a notification channel can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("{channel} rejected message to {recipient}: {reason}")]
    Rejected {
        channel: String,
        recipient: String,
        reason: String,
    },

    #[error("{channel} delivery failed: {reason}")]
    Delivery { channel: String, reason: String },
}

impl NotificationError {
    /// The channel that produced the error
    pub fn channel(&self) -> &str {
        match self {
            NotificationError::Rejected { channel, .. } => channel,
            NotificationError::Delivery { channel, .. } => channel,
        }
    }
}

/// Sends a notification through one channel
///
/// Implementations: email, SMS, in-memory outbox, and the
/// [`CompositeNotifier`](super::composite_notifier::CompositeNotifier).
pub trait Notifier: Send + Sync {
    /// Channel name for logging and registry lookup (e.g. `"email"`)
    fn channel(&self) -> &str;

    /// Deliver `message` with `subject` to `recipient`
    fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), NotificationError>;
}

/// Notifier that accepts and drops every message
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn channel(&self) -> &str {
        "none"
    }

    fn send(&self, _recipient: &str, _subject: &str, _message: &str) -> Result<(), NotificationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_channel() {
        let err = NotificationError::Delivery {
            channel: "sms".into(),
            reason: "gateway down".into(),
        };
        assert_eq!(err.channel(), "sms");
        assert_eq!(err.to_string(), "sms delivery failed: gateway down");
    }

    #[test]
    fn test_no_notifier_accepts_everything() {
        assert!(NoNotifier.send("a@b.c", "s", "m").is_ok());
        assert_eq!(NoNotifier.channel(), "none");
    }
}
