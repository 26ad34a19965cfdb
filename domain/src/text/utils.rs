//! Small text helpers.
//!
//! All lengths count Unicode scalar values, not bytes.

/// Names longer than this are cut and given an ellipsis in greetings
pub const MAX_GREETING_NAME: usize = 20;

/// Greet a user; an empty name becomes `Guest`.
pub fn greet_user(name: &str, time_of_day: &str) -> String {
    let name = if name.is_empty() {
        "Guest".to_string()
    } else {
        truncate_text(name, MAX_GREETING_NAME, "...")
    };
    format!("Hello, {}! Good {}!", name, time_of_day)
}

pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}

/// Cut `text` to `max_length` characters and append `suffix` when it is longer
pub fn truncate_text(text: &str, max_length: usize, suffix: &str) -> String {
    match text.char_indices().nth(max_length) {
        Some((end, _)) => format!("{}{}", &text[..end], suffix),
        None => text.to_string(),
    }
}
