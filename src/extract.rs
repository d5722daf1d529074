/// ID and keyword extraction from free-text input
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Pixiv IDs are runs of 6 to 12 decimal digits. ASCII classes and word
/// boundaries: an ID glued to Latin text ("abc123456") is not an ID, but
/// one glued to CJK text ("東方123456") is.
fn id_pattern() -> &'static Regex {
    static ID_PATTERN: OnceLock<Regex> = OnceLock::new();
    ID_PATTERN.get_or_init(|| Regex::new(r"(?-u)\b\d{6,12}\b").unwrap())
}

/// Extract candidate identifiers or keywords from raw input.
///
/// Two strategies:
/// 1. Collect every 6-12 digit run in the text, deduplicated in match
///    order. If any exist, they are the whole answer.
/// 2. Only when no digit run exists anywhere: split into lines, trim,
///    keep non-empty lines as keywords. Purely numeric lines whose
///    length falls outside 6..=12 are dropped.
///
/// The digit path is exclusive: a single 6-12 digit run anywhere in the
/// input means keyword-looking lines elsewhere are ignored.
pub fn extract(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for m in id_pattern().find_iter(text) {
        if seen.insert(m.as_str()) {
            ids.push(m.as_str().to_string());
        }
    }
    if !ids.is_empty() {
        return ids;
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_out_of_range_numeric(line))
        .map(str::to_string)
        .collect()
}

/// A line that is all digits but too short or too long to be an ID.
fn is_out_of_range_numeric(line: &str) -> bool {
    line.chars().all(|c| c.is_ascii_digit()) && !(6..=12).contains(&line.len())
}
