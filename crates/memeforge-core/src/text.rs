//! Description display cleanup and download filename synthesis.

use crate::consts::{FILENAME_BODY_MAX_CHARS, FILENAME_TAG, IMAGE_FILE_EXTENSION};

/// Strip the leading marker phrase from a raw description for display.
///
/// The marker is matched case-insensitively as "square", optional
/// whitespace, "image" (so "SquareImage" and "Square  image" both match),
/// an optional `.`/`,`/`:` terminator, and any following whitespace. Text
/// without the marker is returned trimmed, so the function is idempotent.
pub fn display_description(raw: &str) -> String {
    let trimmed = raw.trim();
    match strip_marker(trimmed) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

fn strip_marker(text: &str) -> Option<&str> {
    let rest = strip_word_ci(text, "square")?;
    let rest = strip_word_ci(rest.trim_start(), "image")?;
    Some(rest.strip_prefix(['.', ',', ':']).unwrap_or(rest))
}

/// Strip an ASCII `word` prefix case-insensitively. `get` guards against
/// slicing inside a multi-byte character.
fn strip_word_ci<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let head = text.get(..word.len())?;
    head.eq_ignore_ascii_case(word).then(|| &text[word.len()..])
}

/// Filename for a saved meme image.
///
/// With a description: lowercase, keep only `[a-z0-9\s-]`, collapse
/// whitespace runs to single hyphens, truncate the cleaned body to
/// [`FILENAME_BODY_MAX_CHARS`] chars, and prefix the product tag. Without
/// one (or if cleaning leaves nothing), fall back to `<tag>-<index+1>`.
pub fn download_filename(index: usize, description: Option<&str>) -> String {
    let body = description
        .map(clean_filename_body)
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| (index + 1).to_string());
    format!("{FILENAME_TAG}-{body}.{IMAGE_FILE_EXTENSION}")
}

fn clean_filename_body(description: &str) -> String {
    let kept: String = description
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join("-");
    collapsed.chars().take(FILENAME_BODY_MAX_CHARS).collect()
}
