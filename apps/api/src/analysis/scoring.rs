use crate::analysis::models::{ScoreResult, SectionKey, SectionMap};

/// Sections worth one point each when present with content.
const REQUIRED_SECTIONS: &[SectionKey] = &[
    SectionKey::Summary,
    SectionKey::Experience,
    SectionKey::Education,
    SectionKey::Skills,
];

/// Detected skills needed for the final point.
pub const MIN_SKILLS: usize = 5;

/// Completeness score 0 – 5: one point per required section with content,
/// one for at least [`MIN_SKILLS`] detected skills. Every missed point adds a reason.
pub fn score_resume(sections: &SectionMap, skills: &[String]) -> ScoreResult {
    let mut score = 0_u8;
    let mut reasons = Vec::new();

    for key in REQUIRED_SECTIONS {
        if has_content(sections, *key) {
            score += 1;
        } else {
            reasons.push(format!("Missing or empty {} section.", key.title()));
        }
    }

    if skills.len() >= MIN_SKILLS {
        score += 1;
    } else {
        reasons.push("Add more concrete technical skills.".to_string());
    }

    ScoreResult { score, reasons }
}

fn has_content(sections: &SectionMap, key: SectionKey) -> bool {
    sections.get(&key).is_some_and(|body| !body.trim().is_empty())
}
