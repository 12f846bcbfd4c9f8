// Text cleanup and hashtag extraction
// Author: kelexine (https://github.com/kelexine)

use regex::Regex;
use std::sync::OnceLock;

/// Lazily initialized hashtag regex (ASCII word characters only)
static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_hashtag_regex() -> &'static Regex {
    HASHTAG_REGEX.get_or_init(|| Regex::new(r"#[A-Za-z0-9_]+").expect("Invalid regex pattern"))
}

/// Replace em-dashes and spaced en-dashes with line breaks.
///
/// Must run before any section parsing. Applying it twice changes nothing.
pub fn normalize_dashes(text: &str) -> String {
    text.replace('\u{2014}', "\n").replace(" \u{2013} ", "\n")
}

/// Every `#tag` token, left to right, duplicates kept.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    get_hashtag_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
