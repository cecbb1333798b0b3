use std::sync::LazyLock;

use regex::Regex;

/// Non-breaking space code points: NBSP, figure space, narrow NBSP.
const NON_BREAKING_SPACES: &[char] = &['\u{00A0}', '\u{2007}', '\u{202F}'];

static RE_HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

static RE_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Canonical form used by every heuristic downstream.
///
/// Steps, in order:
/// 1. non-breaking spaces → ordinary spaces
/// 2. runs of spaces/tabs → one space (newlines untouched)
/// 3. runs of 3+ newlines → exactly two
/// 4. trim the whole string
pub fn normalize(text: &str) -> String {
    let text = text.replace(NON_BREAKING_SPACES, " ");
    let text = RE_HORIZONTAL_WS.replace_all(&text, " ");
    let text = RE_BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}
