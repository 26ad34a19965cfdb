//! Console transports for notifications
//!
//! [`EmailNotifier`] and [`SmsNotifier`] render a message block to an output
//! sink (stdout by default). The sink sits behind a `Mutex`, so a notifier
//! can be shared across threads.

use pluggable_application::{NotificationError, Notifier};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::debug;

/// Longest message an SMS can carry, in characters
pub const SMS_MAX_CHARS: usize = 160;

type Sink = Mutex<Box<dyn Write + Send>>;

fn write_block(sink: &Sink, channel: &str, block: &str) -> Result<(), NotificationError> {
    let delivery_error = |reason: String| NotificationError::Delivery {
        channel: channel.to_string(),
        reason,
    };

    let mut writer = sink
        .lock()
        .map_err(|_| delivery_error("output sink poisoned".to_string()))?;
    writer
        .write_all(block.as_bytes())
        .map_err(|e| delivery_error(e.to_string()))?;
    writer.flush().map_err(|e| delivery_error(e.to_string()))
}

/// Email notifier
pub struct EmailNotifier {
    sink: Sink,
}

impl EmailNotifier {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Notifier for EmailNotifier {
    fn channel(&self) -> &str {
        "email"
    }

    fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), NotificationError> {
        debug!(recipient, subject, "Sending email");
        let block = format!(
            "[EMAIL] EMAIL to {}\n   Subject: {}\n   Message: {}\n",
            recipient, subject, message
        );
        write_block(&self.sink, self.channel(), &block)
    }
}

/// SMS notifier
///
/// The subject is not part of an SMS and is dropped.
pub struct SmsNotifier {
    sink: Sink,
}

impl SmsNotifier {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Notifier for SmsNotifier {
    fn channel(&self) -> &str {
        "sms"
    }

    fn send(&self, recipient: &str, _subject: &str, message: &str) -> Result<(), NotificationError> {
        let length = message.chars().count();
        if length > SMS_MAX_CHARS {
            return Err(NotificationError::Rejected {
                channel: self.channel().to_string(),
                recipient: recipient.to_string(),
                reason: format!(
                    "message is {} characters, limit is {}",
                    length, SMS_MAX_CHARS
                ),
            });
        }

        debug!(recipient, length, "Sending SMS");
        let block = format!("[SMS] SMS to {}\n   Message: {}\n", recipient, message);
        write_block(&self.sink, self.channel(), &block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer whose contents stay readable after being handed to a notifier
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_email_block() {
        let buffer = SharedBuffer::default();
        let notifier = EmailNotifier::new(buffer.clone());

        notifier
            .send("user@example.com", "Order 12345 Confirmed", "Thank you for your order!")
            .unwrap();

        assert_eq!(
            buffer.contents(),
            "[EMAIL] EMAIL to user@example.com\n   Subject: Order 12345 Confirmed\n   Message: Thank you for your order!\n"
        );
    }

    #[test]
    fn test_sms_block_drops_subject() {
        let buffer = SharedBuffer::default();
        let notifier = SmsNotifier::new(buffer.clone());

        notifier.send("+15550100", "ignored", "Your code is 1234").unwrap();

        assert_eq!(
            buffer.contents(),
            "[SMS] SMS to +15550100\n   Message: Your code is 1234\n"
        );
    }

    #[test]
    fn test_sms_rejects_long_message() {
        let buffer = SharedBuffer::default();
        let notifier = SmsNotifier::new(buffer.clone());

        let limit = "x".repeat(SMS_MAX_CHARS);
        assert!(notifier.send("+1", "", &limit).is_ok());

        let err = notifier.send("+1", "", &format!("{}y", limit)).unwrap_err();
        assert!(matches!(err, NotificationError::Rejected { .. }));
        assert_eq!(err.channel(), "sms");
        assert!(!buffer.contents().contains('y'));
    }

    #[test]
    fn test_write_failure_is_delivery_error() {
        let notifier = EmailNotifier::new(BrokenPipe);
        let err = notifier.send("a@b.c", "s", "m").unwrap_err();
        assert!(matches!(err, NotificationError::Delivery { .. }));
        assert_eq!(err.channel(), "email");
    }
}
