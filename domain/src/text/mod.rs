//! Text transforms and helpers

pub mod case;
pub mod utils;

pub use case::{CaseTransform, LowerCase, TitleCase, UpperCase, builtin_case_transforms, change_case};
pub use utils::{greet_user, reverse_string, truncate_text};
