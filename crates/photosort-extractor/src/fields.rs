//! Tolerant per-field accessors
//!
//! Each accessor scans the raw text for one field declaration and collapses
//! every failure mode - field absent, value malformed, pattern unusable - to
//! the caller's default. Accessors are fully independent: the target field
//! may appear anywhere in the text, in any order, and one malformed field
//! never affects the recovery of another.
//!
//! The search is delimiter-bounded, not grammar-aware. A value containing
//! its own terminating delimiter (an embedded closing quote or bracket) will
//! be cut short; downstream consumers depend on this lenient behavior, so it
//! is kept as-is rather than upgraded to strict JSON parsing.

use regex::Regex;

/// Recover a string field: `"name": "value"`
pub(crate) fn string_field(text: &str, name: &str, default: &str) -> String {
    string_value(text, name).unwrap_or_else(|| default.to_string())
}

fn string_value(text: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(r#""{}"\s*:\s*"([^"]+)""#, name)).ok()?;
    Some(re.captures(text)?.get(1)?.as_str().to_string())
}

/// Recover a list field: `"name": [ ... ]`
///
/// The bracketed content is split on commas; each element is trimmed,
/// stripped of surrounding quote characters, and trimmed again. Elements
/// that end up empty are discarded.
pub(crate) fn list_field(text: &str, name: &str) -> Vec<String> {
    list_value(text, name).unwrap_or_default()
}

fn list_value(text: &str, name: &str) -> Option<Vec<String>> {
    let re = Regex::new(&format!(r#""{}"\s*:\s*\[([^\]]+)\]"#, name)).ok()?;
    let inner = re.captures(text)?.get(1)?.as_str();

    let items = inner
        .split(',')
        .map(|item| {
            item.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .trim()
                .to_string()
        })
        .filter(|item| !item.is_empty())
        .collect();

    Some(items)
}

/// Recover a boolean field: `"name": true|false`
pub(crate) fn bool_field(text: &str, name: &str, default: bool) -> bool {
    bool_value(text, name).unwrap_or(default)
}

fn bool_value(text: &str, name: &str) -> Option<bool> {
    let re = Regex::new(&format!(r#""{}"\s*:\s*(true|false)"#, name)).ok()?;
    Some(re.captures(text)?.get(1)?.as_str() == "true")
}

/// Recover an integer field: `"name": <digits>`
///
/// Non-integer numeric text takes the leading-integer interpretation; a
/// value whose digits overflow i64 falls back to the default.
pub(crate) fn number_field(text: &str, name: &str, default: i64) -> i64 {
    number_value(text, name).unwrap_or(default)
}

fn number_value(text: &str, name: &str) -> Option<i64> {
    let re = Regex::new(&format!(r#""{}"\s*:\s*(\d+)"#, name)).ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
