//! In-memory notifier
//!
//! Keeps every send in an outbox instead of delivering it. Used for dry runs
//! and as a test double.

use pluggable_application::{NotificationError, Notifier};
use std::sync::Mutex;

/// One message captured by a [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub recipient: String,
    pub subject: String,
    pub message: String,
}

pub struct RecordingNotifier {
    channel: String,
    outbox: Mutex<Vec<SentMessage>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::with_channel("memory")
    }

    /// Record under a custom channel name
    pub fn with_channel(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Copy of everything sent so far, oldest first
    pub fn sent(&self) -> Vec<SentMessage> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.clear();
        }
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), NotificationError> {
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|_| NotificationError::Delivery {
                channel: self.channel.clone(),
                reason: "outbox poisoned".to_string(),
            })?;
        outbox.push(SentMessage {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.send("a@x.io", "One", "first").unwrap();
        notifier.send("b@x.io", "Two", "second").unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].recipient, "a@x.io");
        assert_eq!(sent[1].subject, "Two");
        assert_eq!(notifier.channel(), "memory");
    }

    #[test]
    fn test_clear() {
        let notifier = RecordingNotifier::with_channel("audit");
        notifier.send("a", "b", "c").unwrap();
        notifier.clear();
        assert!(notifier.sent().is_empty());
        assert_eq!(notifier.channel(), "audit");
    }
}
