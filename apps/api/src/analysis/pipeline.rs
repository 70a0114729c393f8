//! Pipeline Orchestrator — sequences validate → extract → normalize → score
//! and maps every failure onto the caller-facing error taxonomy.
//!
//! Each run is independent and stateless; nothing is retained across
//! invocations and nothing is retried.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::extract::extract_text;
use crate::analysis::normalize::normalize_text;
use crate::analysis::scorer::{AnalysisResult, MatchScorer};
use crate::errors::AppError;

/// Extracted-and-normalized text shorter than this is rejected before any
/// scoring call is made. Guards against near-empty or garbage extractions.
pub const MIN_CONTENT_CHARS: usize = 50;

/// One uploaded resume file. Request-scoped; never persisted here.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Bytes,
    /// Declared MIME type, as sent by the client.
    pub content_type: String,
    pub file_name: Option<String>,
}

/// Raw pipeline input as assembled from the multipart request.
#[derive(Debug, Default)]
pub struct AnalysisInput {
    pub file: Option<UploadedFile>,
    pub job_description: Option<String>,
}

/// Successful pipeline output: the normalized resume text plus the scorer's
/// structured assessment.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub text: String,
    pub analysis: AnalysisResult,
}

/// Runs the full analysis pipeline for one request.
///
/// Order is fixed: input validation, then the configured-scorer check (before
/// any extraction work is spent), then extract, normalize, the minimum
/// content gate, and finally the single scoring call.
pub async fn run_pipeline(
    scorer: Option<&dyn MatchScorer>,
    input: AnalysisInput,
) -> Result<AnalysisResponse, AppError> {
    let file = input
        .file
        .ok_or_else(|| AppError::MissingInput("a resume file is required".to_string()))?;
    let job_description = input
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::MissingInput("a job description is required".to_string()))?;

    let scorer = scorer.ok_or(AppError::ServiceUnconfigured)?;

    info!(
        "Analyzing resume upload {:?} ({} bytes, {})",
        file.file_name.as_deref().unwrap_or("unnamed"),
        file.data.len(),
        file.content_type
    );

    let extracted = extract_text(&file.data, &file.content_type)?;
    let text = normalize_text(&extracted);

    let content_chars = text.chars().count();
    if content_chars < MIN_CONTENT_CHARS {
        return Err(AppError::InsufficientContent {
            got: content_chars,
            min: MIN_CONTENT_CHARS,
        });
    }

    let analysis = scorer.score(&text, &job_description).await?;

    Ok(AnalysisResponse { text, analysis })
}
