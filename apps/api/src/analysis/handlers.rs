//! Axum route handlers for the ATS analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::analysis::pipeline::{run_pipeline, AnalysisInput, AnalysisResponse, UploadedFile};
use crate::errors::AppError;
use crate::state::AppState;

const FILE_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// POST /api/v1/ats/analyze
///
/// Multipart form: one file part (`resume`) and one text field
/// (`job_description`). Returns the normalized resume text and the match
/// analysis, or a taxonomy error per field/format/scoring failure.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let input = collect_input(multipart).await?;
    let response = run_pipeline(state.scorer.as_deref(), input).await?;
    Ok(Json(response))
}

/// Drains the multipart stream into the pipeline's input struct. Unknown
/// fields are ignored; presence validation happens in the pipeline.
async fn collect_input(mut multipart: Multipart) -> Result<AnalysisInput, AppError> {
    let mut input = AnalysisInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart request: {e}")))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let file_name = field.file_name().map(String::from);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("could not read resume file: {e}")))?;
                input.file = Some(UploadedFile {
                    data,
                    content_type,
                    file_name,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("could not read job description: {e}"))
                })?;
                input.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(input)
}
