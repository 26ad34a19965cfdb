//! Generic strategy plumbing shared by every contract family.
//!
//! - [`StrategyRegistry`]: look up a variant by key
//! - [`StrategySlot`]: the single replaceable strategy an orchestrator holds

pub mod registry;
pub mod slot;

pub use registry::StrategyRegistry;
pub use slot::StrategySlot;
