//! Whole-word skill matching against a static vocabulary.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Built-in vocabulary: languages, data/ML libraries, web frameworks, cloud and devops.
///
/// The 22 entries are fixed; skill lists and scores reported to clients depend
/// on exactly this set, so additions belong in a caller-supplied vocabulary.
pub const DEFAULT_SKILLS: &[&str] = &[
    // languages
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "sql",
    // data
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    // web
    "react",
    "angular",
    "flask",
    "django",
    "fastapi",
    // cloud and devops
    "aws",
    "gcp",
    "azure",
    "docker",
    "kubernetes",
    "git",
];

static DEFAULT_PATTERNS: LazyLock<Vec<(String, Regex)>> = LazyLock::new(|| {
    DEFAULT_SKILLS
        .iter()
        .filter_map(|skill| compile_term(skill))
        .collect()
});

/// Compiles one vocabulary entry into a case-insensitive whole-phrase pattern.
///
/// The literal is escaped first and the boundary is "no word character on
/// either side" rather than `\b`, so entries ending in symbols (`c++`) still
/// match before a space while `sql` never matches inside `postgresql`.
fn compile_term(term: &str) -> Option<(String, Regex)> {
    let canonical = term.trim().to_lowercase();
    if canonical.is_empty() {
        return None;
    }
    let pattern = format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(&canonical));
    match Regex::new(&pattern) {
        Ok(re) => Some((canonical, re)),
        Err(e) => {
            warn!(term = %canonical, error = %e, "Skipping vocabulary entry");
            None
        }
    }
}

/// Returns the vocabulary entries found in `text`, lowercase, deduplicated and sorted.
///
/// `None` or an empty vocabulary selects [`DEFAULT_SKILLS`].
pub fn match_skills<S: AsRef<str>>(text: &str, vocabulary: Option<&[S]>) -> Vec<String> {
    let mut found: Vec<String> = match vocabulary {
        Some(terms) if !terms.is_empty() => terms
            .iter()
            .filter_map(|t| compile_term(t.as_ref()))
            .filter(|(_, re)| re.is_match(text))
            .map(|(skill, _)| skill)
            .collect(),
        _ => DEFAULT_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(skill, _)| skill.clone())
            .collect(),
    };

    found.sort();
    found.dedup();
    found
}
