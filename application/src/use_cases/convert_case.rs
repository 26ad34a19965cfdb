//! Convert Case use case

use pluggable_domain::{CaseTransform, StrategySlot};
use std::sync::Arc;

/// Applies an injected [`CaseTransform`] to text
#[derive(Clone)]
pub struct ConvertCaseUseCase {
    transform: StrategySlot<dyn CaseTransform>,
}

impl ConvertCaseUseCase {
    pub fn new(transform: Arc<dyn CaseTransform>) -> Self {
        Self {
            transform: StrategySlot::new(transform),
        }
    }

    pub fn convert(&self, text: &str) -> String {
        self.transform.current().apply(text)
    }

    /// Convert each line independently, preserving line order
    pub fn convert_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        lines.into_iter().map(|line| self.convert(line)).collect()
    }

    pub fn set_transform(&mut self, transform: Arc<dyn CaseTransform>) -> Arc<dyn CaseTransform> {
        self.transform.replace(transform)
    }
}
