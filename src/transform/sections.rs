// Image prompt / caption section parsing
// Author: kelexine (https://github.com/kelexine)

use regex::Regex;
use std::sync::OnceLock;

/// Visible caption delimiter (matched case-sensitively).
pub const CAPTION_MARKER: &str = "[CAPTION]";

/// `[IMAGE_PROMPT] ... [CAPTION]`, any case, across lines
static STRICT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Loose label such as `Image Prompt:` or `IMAGE_PROMPT -`
static LOOSE_LABEL_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_strict_regex() -> &'static Regex {
    STRICT_REGEX.get_or_init(|| {
        Regex::new(r"(?is)\[IMAGE_PROMPT\](.*?)\[CAPTION\]").expect("Invalid regex pattern")
    })
}

fn get_loose_label_regex() -> &'static Regex {
    LOOSE_LABEL_REGEX.get_or_init(|| {
        Regex::new(r"(?i)(?:IMAGE_PROMPT|IMAGE PROMPT|Image Prompt)[\s:\-]+")
            .expect("Invalid regex pattern")
    })
}

/// Text between the strict delimiters, untrimmed.
fn strict_section(text: &str) -> Option<&str> {
    get_strict_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text after a loose label, up to the first blank line, the first line
/// starting with "caption" (any case), or the end of the text.
fn loose_section(text: &str) -> Option<&str> {
    let label = get_loose_label_regex().find(text)?;
    let rest = &text[label.end()..];

    let end = rest
        .match_indices('\n')
        .map(|(i, _)| i)
        .find(|&i| {
            let after = &rest[i + 1..];
            after.starts_with('\n')
                || after
                    .get(..7)
                    .is_some_and(|word| word.eq_ignore_ascii_case("caption"))
        })
        .unwrap_or(rest.len());

    Some(&rest[..end])
}

/// Locate the image generation prompt inside model output.
///
/// The strict delimiter pair wins; the loose label match is only tried
/// when it is absent. The result is trimmed and stripped of `**`
/// emphasis. `None` means nothing usable was found.
pub fn locate_image_prompt(text: &str) -> Option<String> {
    let raw = match strict_section(text) {
        Some(section) => section,
        None => loose_section(text)?,
    };

    let prompt = raw.trim().replace("**", "");
    let prompt = prompt.trim();
    if prompt.is_empty() {
        None
    } else {
        Some(prompt.to_string())
    }
}

/// Trimmed text between the first `[CAPTION]` and the next one (or the
/// end of the text), if the marker is present.
pub fn caption_after_marker(text: &str) -> Option<&str> {
    text.split(CAPTION_MARKER).nth(1).map(str::trim)
}
