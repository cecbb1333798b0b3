use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::ContactInfo;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// Deliberately loose: "+1 (555) 123-4567", "555-123-4567", "07700 900123" all match,
// and so can long digit runs such as date ranges.
static RE_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-() ]{7,}\d").unwrap());

static RE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+|www\.[^\s)]+").unwrap());

/// Words that mark the first line as a document title or heading rather than a name.
const NAME_REJECT_WORDS: &[&str] = &["resume", "curriculum", "summary", "experience"];

/// Pulls a name guess, email, phone number and links out of normalized text.
/// Every field is empty when nothing matches.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: guess_name(text),
        email: first_match(&RE_EMAIL, text),
        phone: first_match(&RE_PHONE, text),
        links: extract_links(text),
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for m in RE_URL.find_iter(text) {
        if !links.iter().any(|l| l == m.as_str()) {
            links.push(m.as_str().to_string());
        }
    }
    links
}

/// First non-blank line, unless it looks like a title ("Resume of ...", "Professional Summary").
fn guess_name(text: &str) -> String {
    let Some(first) = text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return String::new();
    };

    let lower = first.to_lowercase();
    if NAME_REJECT_WORDS.iter().any(|w| lower.contains(w)) {
        return String::new();
    }
    first.to_string()
}
