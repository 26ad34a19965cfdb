//! Case transform strategies

use crate::core::error::DomainError;
use crate::strategy::StrategyRegistry;
use std::sync::Arc;

/// Rewrites the letter case of a piece of text.
///
/// Transforms are total: every input string has an output.
pub trait CaseTransform: Send + Sync {
    /// Registry key for this transform (e.g. `"upper"`)
    fn name(&self) -> &'static str;

    fn apply(&self, text: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCase;

impl CaseTransform for UpperCase {
    fn name(&self) -> &'static str {
        "upper"
    }

    fn apply(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCase;

impl CaseTransform for LowerCase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleCase;

impl CaseTransform for TitleCase {
    fn name(&self) -> &'static str {
        "title"
    }

    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_word = false;
        for c in text.chars() {
            if c.is_alphabetic() {
                if in_word {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                in_word = true;
            } else {
                out.push(c);
                in_word = false;
            }
        }
        out
    }
}

/// Registry pre-populated with every built-in case transform
pub fn builtin_case_transforms() -> StrategyRegistry<dyn CaseTransform> {
    StrategyRegistry::<dyn CaseTransform>::new("case")
        .register("upper", Arc::new(UpperCase))
        .register("lower", Arc::new(LowerCase))
        .register("title", Arc::new(TitleCase))
}

/// Apply the built-in transform registered under `case_type`
///
/// The lookup ignores case; an unknown key fails with
/// [`DomainError::UnsupportedVariant`].
pub fn change_case(text: &str, case_type: &str) -> Result<String, DomainError> {
    let transform = builtin_case_transforms().resolve(case_type)?;
    Ok(transform.apply(text))
}
