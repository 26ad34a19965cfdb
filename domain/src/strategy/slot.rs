//! Strategy slot held by an orchestrator

use std::fmt;
use std::sync::Arc;

/// Holds exactly one externally supplied strategy.
///
/// The slot never constructs a strategy itself. The held strategy changes
/// only through [`StrategySlot::replace`], which requires `&mut self`, so a
/// replacement can never race with an in-flight call on the same slot.
pub struct StrategySlot<S: ?Sized> {
    current: Arc<S>,
}

impl<S: ?Sized> StrategySlot<S> {
    pub fn new(strategy: Arc<S>) -> Self {
        Self { current: strategy }
    }

    /// The strategy that subsequent calls will use
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Shared handle to the current strategy
    pub fn shared(&self) -> Arc<S> {
        Arc::clone(&self.current)
    }

    /// Swap in a new strategy, returning the one it replaces
    pub fn replace(&mut self, strategy: Arc<S>) -> Arc<S> {
        std::mem::replace(&mut self.current, strategy)
    }
}

impl<S: ?Sized> Clone for StrategySlot<S> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

impl<S: ?Sized> fmt::Debug for StrategySlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategySlot").finish_non_exhaustive()
    }
}
