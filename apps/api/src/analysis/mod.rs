// Résumé analysis pipeline.
// Implements: PDF text extraction, normalization, section segmentation,
// contact extraction, skill matching and completeness scoring.
// Every step is a pure function over its input; handlers run the pipeline
// inside tokio::task::spawn_blocking.

pub mod contact;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod pdf;
pub mod pipeline;
pub mod scoring;
pub mod sections;
pub mod skills;
#[cfg(test)]
pub mod test_support;

