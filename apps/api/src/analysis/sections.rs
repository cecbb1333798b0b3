//! Heading-based section segmentation.
//!
//! A heading is a line that, trimmed, is exactly one known synonym with an
//! optional trailing colon. Everything between one heading line and the next
//! is that section's body.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::analysis::models::{SectionKey, SectionMap};

/// Heading synonyms per canonical key, matched case-insensitively.
/// Order is the resolution order for a matched heading line.
const SECTION_SYNONYMS: &[(SectionKey, &[&str])] = &[
    (SectionKey::Summary, &["summary", "profile", "objective"]),
    (
        SectionKey::Experience,
        &["experience", "work experience", "employment history"],
    ),
    (SectionKey::Education, &["education"]),
    (
        SectionKey::Skills,
        &["skills", "technical skills", "tech skills"],
    ),
    (SectionKey::Projects, &["projects", "personal projects"]),
    (
        SectionKey::Certifications,
        &["certifications", "licenses", "certs"],
    ),
];

struct HeadingPatterns {
    /// Union of every synonym, anchored to a whole line.
    any: Regex,
    /// Anchored per-key patterns used to resolve which key a union match belongs to.
    by_key: Vec<(SectionKey, Regex)>,
}

static HEADINGS: LazyLock<HeadingPatterns> = LazyLock::new(|| {
    let all: Vec<&str> = SECTION_SYNONYMS
        .iter()
        .flat_map(|(_, synonyms)| synonyms.iter().copied())
        .collect();
    let any = Regex::new(&format!(
        r"(?im)^[^\S\n]*(?:{})[^\S\n]*:?[^\S\n]*$",
        alternation(&all)
    ))
    .unwrap();

    let by_key = SECTION_SYNONYMS
        .iter()
        .map(|(key, synonyms)| {
            let pattern = Regex::new(&format!(r"(?i)^(?:{})$", alternation(synonyms))).unwrap();
            (*key, pattern)
        })
        .collect();

    HeadingPatterns { any, by_key }
});

fn alternation(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Heading {
    key: SectionKey,
    /// Byte offset where the heading line starts.
    start: usize,
    /// Byte offset just past the heading text.
    end: usize,
}

/// Maps a heading line to its canonical key.
fn resolve_heading(line: &str) -> Option<SectionKey> {
    let label = line.trim().trim_end_matches(':').trim_end();
    HEADINGS
        .by_key
        .iter()
        .find(|(_, pattern)| pattern.is_match(label))
        .map(|(key, _)| *key)
}

/// All heading lines in document order.
fn find_headings(text: &str) -> Vec<Heading> {
    HEADINGS
        .any
        .find_iter(text)
        .filter_map(|m| {
            resolve_heading(m.as_str()).map(|key| Heading {
                key,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Partitions normalized text into section bodies keyed by canonical name.
///
/// Returns an empty map when no heading is found; falling back to the whole
/// text is the caller's decision. When two headings resolve to the same key
/// the later body replaces the earlier one (last write wins, no merging).
pub fn segment_sections(text: &str) -> SectionMap {
    let headings = find_headings(text);
    let mut sections = SectionMap::new();

    for (i, heading) in headings.iter().enumerate() {
        let body_end = headings.get(i + 1).map_or(text.len(), |next| next.start);
        let body = text[heading.end..body_end].trim().to_string();
        sections.insert(heading.key, body);
    }

    debug!(
        headings = headings.len(),
        sections = sections.len(),
        "Sections segmented"
    );
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sections() {
        let sections = segment_sections("Summary\nDid things.\n\nExperience\nDid more things.");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[&SectionKey::Summary], "Did things.");
        assert_eq!(sections[&SectionKey::Experience], "Did more things.");
    }

    #[test]
    fn test_no_headings_returns_empty_map() {
        let sections = segment_sections("John Doe\nI have lots of experience with Rust.");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_empty_text_returns_empty_map() {
        assert!(segment_sections("").is_empty());
    }

    #[test]
    fn test_synonym_mid_sentence_is_not_a_heading() {
        let text = "Profile\nMy skills include Rust.\nEducation is important to me.";
        let sections = segment_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[&SectionKey::Summary],
            "My skills include Rust.\nEducation is important to me."
        );
    }

    #[test]
    fn test_synonyms_resolve_to_canonical_keys() {
        let text = "Objective\na\nWork Experience\nb\nEmployment History\nc\nTech Skills\nd\n\
                    Personal Projects\ne\nLicenses\nf";
        let sections = segment_sections(text);
        assert_eq!(sections[&SectionKey::Summary], "a");
        assert_eq!(sections[&SectionKey::Experience], "c");
        assert_eq!(sections[&SectionKey::Skills], "d");
        assert_eq!(sections[&SectionKey::Projects], "e");
        assert_eq!(sections[&SectionKey::Certifications], "f");
        assert!(!sections.contains_key(&SectionKey::Education));
    }

    #[test]
    fn test_heading_is_case_insensitive_with_colon_and_padding() {
        let text = "  EDUCATION :\nBSc Computer Science\nskills:\nRust, Go";
        let sections = segment_sections(text);
        assert_eq!(sections[&SectionKey::Education], "BSc Computer Science");
        assert_eq!(sections[&SectionKey::Skills], "Rust, Go");
    }

    #[test]
    fn test_duplicate_heading_last_write_wins() {
        let text = "Skills\nPython, SQL\nExperience\nAcme Corp\nTechnical Skills\nRust, Go";
        let sections = segment_sections(text);
        assert_eq!(sections[&SectionKey::Skills], "Rust, Go");
        assert!(!sections[&SectionKey::Skills].contains("Python"));
        assert_eq!(sections[&SectionKey::Experience], "Acme Corp");
    }

    #[test]
    fn test_same_heading_twice_keeps_second_body_only() {
        let text = "Skills\nfirst body\n\nSkills\nsecond body";
        let sections = segment_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[&SectionKey::Skills], "second body");
    }

    #[test]
    fn test_heading_with_nothing_under_it_is_present_but_empty() {
        let sections = segment_sections("Projects\nEducation\nMIT");
        assert_eq!(sections.get(&SectionKey::Projects).map(String::as_str), Some(""));
        assert_eq!(sections[&SectionKey::Education], "MIT");
    }

    #[test]
    fn test_text_before_first_heading_is_ignored() {
        let text = "Jane Smith\njane@example.com\n\nExperience\nAcme";
        let sections = segment_sections(text);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[&SectionKey::Experience], "Acme");
    }

    #[test]
    fn test_crlf_heading_lines() {
        let sections = segment_sections("Summary\r\nBuilds things.\r\nSkills:\r\nRust");
        assert_eq!(sections[&SectionKey::Summary], "Builds things.");
        assert_eq!(sections[&SectionKey::Skills], "Rust");
    }

    #[test]
    fn test_heading_padded_with_unicode_whitespace() {
        let text = crate::analysis::normalize::normalize(
            "Intro\n\u{2003}Skills\u{2003}\nRust\n\u{000B}Education\u{2009}:\nMIT",
        );
        let sections = segment_sections(&text);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[&SectionKey::Skills], "Rust");
        assert_eq!(sections[&SectionKey::Education], "MIT");
    }

    #[test]
    fn test_partial_heading_words_are_not_headings() {
        let sections = segment_sections("Skillset\nRust\nCertified Experience\nAcme");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_resolve_heading() {
        assert_eq!(resolve_heading("Tech Skills:"), Some(SectionKey::Skills));
        assert_eq!(resolve_heading("  certs "), Some(SectionKey::Certifications));
        assert_eq!(resolve_heading("Hobbies"), None);
    }
}
