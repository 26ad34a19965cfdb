//! Calculator-with-history use case

use chrono::{DateTime, Utc};
use pluggable_domain::{Calculator, CalculatorError};
use tracing::debug;

/// One successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub expression: String,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

/// Calculator that records every successful calculation
#[derive(Debug, Default)]
pub struct CalculatorWithHistoryUseCase {
    calculator: Calculator,
    history: Vec<CalculationRecord>,
}

impl CalculatorWithHistoryUseCase {
    pub fn new(calculator: Calculator) -> Self {
        Self {
            calculator,
            history: Vec::new(),
        }
    }

    /// Evaluate `expr`; failures leave the history untouched
    pub fn calculate(&mut self, expr: &str) -> Result<CalculationRecord, CalculatorError> {
        let result = self.calculator.calculate(expr)?;
        let record = CalculationRecord {
            expression: expr.to_string(),
            result,
            timestamp: Utc::now(),
        };
        debug!(expression = expr, result, "Calculated");
        self.history.push(record.clone());
        Ok(record)
    }

    /// A copy of the history, oldest first
    pub fn history(&self) -> Vec<CalculationRecord> {
        self.history.clone()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
