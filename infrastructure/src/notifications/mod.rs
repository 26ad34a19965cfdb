//! Notification adapters
//!
//! Channel keys: `email`, `sms`, `memory`. Several keys combine into a
//! [`CompositeNotifier`] that delivers in the listed order.

mod console;
mod recording;

pub use console::{EmailNotifier, SMS_MAX_CHARS, SmsNotifier};
pub use recording::{RecordingNotifier, SentMessage};

use pluggable_application::{CompositeNotifier, Notifier};
use pluggable_domain::{DomainError, StrategyRegistry};
use std::sync::Arc;
use tracing::debug;

/// Channel whose sends are recorded in memory and never delivered
pub const DRY_RUN_CHANNEL: &str = "memory";

/// Registry of the built-in notification channels writing to stdout
pub fn builtin_notifiers() -> StrategyRegistry<dyn Notifier> {
    StrategyRegistry::<dyn Notifier>::new("notification channel")
        .register("email", Arc::new(EmailNotifier::stdout()))
        .register("sms", Arc::new(SmsNotifier::stdout()))
        .register(DRY_RUN_CHANNEL, Arc::new(RecordingNotifier::new()))
}

/// Whether any of `channels` only records instead of delivering
pub fn includes_dry_run(channels: &[String]) -> bool {
    channels
        .iter()
        .any(|key| key.trim().eq_ignore_ascii_case(DRY_RUN_CHANNEL))
}

/// Build one notifier from a list of channel keys
///
/// A single key yields that channel's notifier directly; several keys yield
/// a composite. Unknown keys fail before anything is built.
pub fn build_notifier(
    registry: &StrategyRegistry<dyn Notifier>,
    channels: &[String],
) -> Result<Arc<dyn Notifier>, DomainError> {
    let mut delegates = channels
        .iter()
        .map(|key| registry.resolve(key))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(channels = ?channels, "Building notifier");
    match delegates.len() {
        0 => Err(DomainError::MalformedInput(
            "no notification channels given".to_string(),
        )),
        1 => Ok(delegates.remove(0)),
        _ => Ok(Arc::new(CompositeNotifier::new(delegates))),
    }
}
