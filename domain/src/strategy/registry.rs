//! Strategy Registry
//!
//! The [`StrategyRegistry`] maps variant keys to shared strategy instances
//! of one contract family. It is the factory-style lookup used when a
//! variant is selected by name (CLI flag, config file) rather than
//! constructed directly.
//!
//! # Usage
//!
//! ```
//! use pluggable_domain::{ReportFormatter, StrategyRegistry};
//! use pluggable_domain::report::formats::{CsvFormatter, TextFormatter};
//! use std::sync::Arc;
//!
//! let registry = StrategyRegistry::<dyn ReportFormatter>::new("report format")
//!     .register("text", Arc::new(TextFormatter))
//!     .register("csv", Arc::new(CsvFormatter));
//!
//! assert!(registry.resolve("CSV").is_ok());
//! assert!(registry.resolve("pdf").is_err());
//! ```
//!
//! # Key Resolution
//!
//! - Keys are matched case-insensitively and ignoring surrounding whitespace
//! - Registration order is preserved by [`StrategyRegistry::keys`]
//! - Registering an existing key replaces that entry in place

use crate::core::error::DomainError;
use std::fmt;
use std::sync::Arc;

/// Ordered key → strategy map for one contract family
pub struct StrategyRegistry<S: ?Sized> {
    /// Human-readable family name used in error messages
    family: &'static str,
    /// Registered entries in registration order (keys are normalized)
    entries: Vec<(String, Arc<S>)>,
}

impl<S: ?Sized> StrategyRegistry<S> {
    /// Create an empty registry for the given contract family
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            entries: Vec::new(),
        }
    }

    /// Register a strategy under `key` (builder style)
    pub fn register(mut self, key: impl AsRef<str>, strategy: Arc<S>) -> Self {
        self.insert(key, strategy);
        self
    }

    /// Register a strategy under `key`, returning the entry it replaced
    pub fn insert(&mut self, key: impl AsRef<str>, strategy: Arc<S>) -> Option<Arc<S>> {
        let key = normalize(key.as_ref());
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, strategy)),
            None => {
                self.entries.push((key, strategy));
                None
            }
        }
    }

    /// Look up the strategy registered under `key`
    ///
    /// Fails with [`DomainError::UnsupportedVariant`] listing every known
    /// key when nothing is registered under it.
    pub fn resolve(&self, key: &str) -> Result<Arc<S>, DomainError> {
        let normalized = normalize(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == normalized)
            .map(|(_, s)| Arc::clone(s))
            .ok_or_else(|| DomainError::UnsupportedVariant {
                family: self.family,
                key: key.to_string(),
                available: self.keys().map(str::to_string).collect(),
            })
    }

    /// Whether a strategy is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        let normalized = normalize(key);
        self.entries.iter().any(|(k, _)| *k == normalized)
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The contract family name
    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: ?Sized> fmt::Debug for StrategyRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("family", &self.family)
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
