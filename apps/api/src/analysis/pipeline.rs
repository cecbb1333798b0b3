use std::collections::BTreeMap;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::contact::extract_contact;
use crate::analysis::models::{ResumeAnalysis, SectionKey, SectionMap};
use crate::analysis::normalize::normalize;
use crate::analysis::pdf::{extract_text_from_pdf, DocumentParseError};
use crate::analysis::scoring::score_resume;
use crate::analysis::sections::segment_sections;
use crate::analysis::skills::match_skills;

/// Characters stripped from both ends of a display line.
const BULLET_CHARS: &[char] = &['•', '-', '*', '·', ' ', '\t'];

/// Extracts, normalizes and analyzes one PDF résumé.
pub fn analyze_document(
    document: &[u8],
    vocabulary: Option<&[String]>,
) -> Result<ResumeAnalysis, DocumentParseError> {
    let raw = extract_text_from_pdf(document)?;
    Ok(analyze_text(&raw, vocabulary))
}

/// Runs the text half of the pipeline. Total: missing data yields empty fields.
///
/// When no heading is recognized the whole normalized text becomes the summary.
pub fn analyze_text(raw: &str, vocabulary: Option<&[String]>) -> ResumeAnalysis {
    let text = normalize(raw);

    let contact = extract_contact(&text);
    let mut sections = segment_sections(&text);
    let skills = match_skills(&text, vocabulary);

    let headings_detected = !sections.is_empty();
    if !headings_detected {
        sections.insert(SectionKey::Summary, text.clone());
    }

    let score = score_resume(&sections, &skills);
    let section_items = itemize(&sections);

    let analysis = ResumeAnalysis {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        contact,
        sections,
        headings_detected,
        section_items,
        skills,
        score,
        character_count: text.chars().count(),
    };

    info!(
        analysis_id = %analysis.analysis_id,
        sections = analysis.sections.len(),
        headings_detected,
        skills = analysis.skills.len(),
        score = analysis.score.score,
        "Resume analyzed"
    );
    analysis
}

/// Splits a section body into display lines with bullet glyphs removed.
pub fn bullet_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| line.trim_matches(BULLET_CHARS))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn itemize(sections: &SectionMap) -> BTreeMap<SectionKey, Vec<String>> {
    sections
        .iter()
        .map(|(key, body)| (*key, bullet_lines(body)))
        .collect()
}
