use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical section names. Heading synonyms all resolve to one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
        }
    }

    /// Display title used in user-facing messages ("Experience").
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::Summary => "Summary",
            SectionKey::Experience => "Experience",
            SectionKey::Education => "Education",
            SectionKey::Skills => "Skills",
            SectionKey::Projects => "Projects",
            SectionKey::Certifications => "Certifications",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section bodies keyed by canonical name.
/// A missing key means no heading was found; an empty value means the heading
/// was found with nothing under it.
pub type SectionMap = BTreeMap<SectionKey, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Unique, in order of first appearance.
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0 – 5
    pub score: u8,
    pub reasons: Vec<String>,
}

/// Full report returned to the presentation layer for one uploaded résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub contact: ContactInfo,
    pub sections: SectionMap,
    /// False when no heading was recognized and the whole text was used as the summary.
    pub headings_detected: bool,
    pub section_items: BTreeMap<SectionKey, Vec<String>>,
    pub skills: Vec<String>,
    pub score: ScoreResult,
    pub character_count: usize,
}
