//! Composite notifier delegating to multiple notifiers.
//!
//! Used to fan out one notification to several channels (e.g. email and
//! SMS) while the caller still holds a single [`Notifier`].

use super::notifier::{NotificationError, Notifier};
use std::sync::Arc;
use tracing::{debug, warn};

/// A notifier that delegates to multiple inner notifiers.
///
/// ```text
/// ProcessOrderUseCase.process_order(..) ──► CompositeNotifier::send
///                                                 |
///                     +---------------------------+---------------------------+
///                     |                                                       |
///             EmailNotifier (1st)                                     SmsNotifier (2nd)
/// ```
///
/// Delegates run in construction order, each exactly once. The first
/// failure stops the fan-out and is returned unchanged; earlier sends are
/// not rolled back.
#[derive(Clone, Default)]
pub struct CompositeNotifier {
    delegates: Vec<Arc<dyn Notifier>>,
}

impl CompositeNotifier {
    pub fn new(delegates: Vec<Arc<dyn Notifier>>) -> Self {
        Self { delegates }
    }

    /// Append a delegate (builder style)
    pub fn with(mut self, delegate: Arc<dyn Notifier>) -> Self {
        self.delegates.push(delegate);
        self
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }
}

impl Notifier for CompositeNotifier {
    fn channel(&self) -> &str {
        "composite"
    }

    fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), NotificationError> {
        for (index, delegate) in self.delegates.iter().enumerate() {
            debug!(channel = delegate.channel(), index, "Delegating notification");
            if let Err(e) = delegate.send(recipient, subject, message) {
                warn!(
                    channel = delegate.channel(),
                    index,
                    error = %e,
                    "Notification fan-out stopped"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    type CallLog = Arc<Mutex<Vec<(String, String, String, String)>>>;

    /// Records (channel, recipient, subject, message) into a shared log
    struct RecordingNotifier {
        name: &'static str,
        log: CallLog,
        fail: bool,
    }

    impl RecordingNotifier {
        fn new(name: &'static str, log: &CallLog) -> Arc<Self> {
            Arc::new(Self {
                name,
                log: Arc::clone(log),
                fail: false,
            })
        }

        fn failing(name: &'static str, log: &CallLog) -> Arc<Self> {
            Arc::new(Self {
                name,
                log: Arc::clone(log),
                fail: true,
            })
        }
    }

    impl Notifier for RecordingNotifier {
        fn channel(&self) -> &str {
            self.name
        }

        fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), NotificationError> {
            self.log.lock().unwrap().push((
                self.name.to_string(),
                recipient.to_string(),
                subject.to_string(),
                message.to_string(),
            ));
            if self.fail {
                return Err(NotificationError::Delivery {
                    channel: self.name.to_string(),
                    reason: "offline".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_composite_delegates_in_construction_order() {
        let log = CallLog::default();
        let composite = CompositeNotifier::new(vec![
            RecordingNotifier::new("a", &log),
            RecordingNotifier::new("b", &log),
        ]);

        composite.send("user@example.com", "Hi", "Body").unwrap();

        let calls = log.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "a");
        assert_eq!(calls[1].0, "b");
        for call in calls.iter() {
            assert_eq!((&call.1[..], &call.2[..], &call.3[..]), ("user@example.com", "Hi", "Body"));
        }
    }

    #[test]
    fn test_composite_stops_at_first_failure() {
        let log = CallLog::default();
        let composite = CompositeNotifier::new(vec![
            RecordingNotifier::new("a", &log),
            RecordingNotifier::failing("b", &log),
            RecordingNotifier::new("c", &log),
        ]);

        let err = composite.send("x@y.z", "s", "m").unwrap_err();

        assert_eq!(
            err,
            NotificationError::Delivery {
                channel: "b".into(),
                reason: "offline".into()
            }
        );
        let channels: Vec<_> = log.lock().unwrap().iter().map(|c| c.0.clone()).collect();
        assert_eq!(channels, vec!["a", "b"]);
    }

    #[test]
    fn test_nested_composites() {
        let log = CallLog::default();
        let inner = CompositeNotifier::new(vec![RecordingNotifier::new("inner", &log)]);
        let outer = CompositeNotifier::default()
            .with(RecordingNotifier::new("first", &log))
            .with(Arc::new(inner));

        outer.send("r", "s", "m").unwrap();

        let channels: Vec<_> = log.lock().unwrap().iter().map(|c| c.0.clone()).collect();
        assert_eq!(channels, vec!["first", "inner"]);
        assert_eq!(outer.len(), 2);
    }

    #[test]
    fn test_empty_composite_is_noop() {
        assert!(CompositeNotifier::default().send("r", "s", "m").is_ok());
    }
}
