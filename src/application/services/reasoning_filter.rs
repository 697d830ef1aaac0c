use regex::Regex;
use std::sync::LazyLock;

const OPEN_TAG: &str = "<think>";
const CLOSE_TAG: &str = "</think>";

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").unwrap());

/// Removes model reasoning wrapped in `<think>...</think>` and trims the rest.
///
/// Unbalanced markers are handled too: text before a dangling `</think>` and
/// text after a dangling `<think>` are both treated as reasoning.
pub fn strip_reasoning_markup(raw: &str) -> String {
    let without_blocks = THINK_BLOCK.replace_all(raw, "");
    let mut text: &str = &without_blocks;

    if let Some(idx) = text.rfind(CLOSE_TAG) {
        text = &text[idx + CLOSE_TAG.len()..];
    }
    if let Some(idx) = text.find(OPEN_TAG) {
        text = &text[..idx];
    }

    text.trim().to_string()
}
