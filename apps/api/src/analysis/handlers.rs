//! Axum route handlers for the Analysis API.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::ResumeAnalysis;
use crate::analysis::pipeline::{analyze_document, analyze_text};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    /// Custom vocabulary; the built-in skill list is used when absent or empty.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/analyze
///
/// Multipart upload: a required `resume` file part holding the PDF and an
/// optional `skills` text part (comma or newline separated) overriding the
/// built-in vocabulary. The document is analyzed and discarded.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut document: Option<Bytes> = None;
    let mut vocabulary: Option<Vec<String>> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed_multipart)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                document = Some(field.bytes().await.map_err(malformed_multipart)?);
            }
            Some("skills") => {
                let raw = field.text().await.map_err(malformed_multipart)?;
                vocabulary = Some(parse_vocabulary(&raw));
            }
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("Missing 'resume' file part".to_string()))?;
    if document.is_empty() {
        return Err(AppError::Validation("resume file is empty".to_string()));
    }
    let vocabulary = check_vocabulary(vocabulary, state.config.max_vocabulary_terms)?;

    info!(
        bytes = document.len(),
        custom_vocabulary = vocabulary.is_some(),
        "Analyzing uploaded resume"
    );

    // PDF parsing is CPU-bound; keep it off the async workers.
    let analysis = tokio::task::spawn_blocking(move || {
        analyze_document(&document, vocabulary.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))??;

    Ok(Json(analysis))
}

/// POST /api/v1/resumes/analyze-text
///
/// Runs the same pipeline on already-extracted text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let vocabulary = check_vocabulary(request.skills, state.config.max_vocabulary_terms)?;

    let text = request.text;
    let analysis = tokio::task::spawn_blocking(move || analyze_text(&text, vocabulary.as_deref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))?;

    Ok(Json(analysis))
}

fn malformed_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {e}"))
}

/// Splits a free-form vocabulary on commas and newlines, dropping blanks.
fn parse_vocabulary(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_vocabulary(
    vocabulary: Option<Vec<String>>,
    max_terms: usize,
) -> Result<Option<Vec<String>>, AppError> {
    match vocabulary {
        Some(terms) if terms.len() > max_terms => Err(AppError::Validation(format!(
            "skills vocabulary has {} terms; the limit is {max_terms}",
            terms.len()
        ))),
        other => Ok(other),
    }
}
