//! Match Scorer — produces a match assessment between resume text and a job
//! description via the external LLM service.
//!
//! The trait seam exists so the orchestrator and its tests never depend on
//! the network: `AppState` carries `Option<Arc<dyn MatchScorer>>`, and tests
//! swap in stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::prompts::{ATS_MATCH_PROMPT_TEMPLATE, ATS_MATCH_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};

/// Resume text submitted to the scorer is capped at this many characters.
/// Lossy, prefix-preserving truncation; bounds request size and cost.
pub const MAX_RESUME_CHARS: usize = 6000;
/// Job description cap, same semantics as the resume cap.
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 3000;

/// Structured match assessment returned by the scorer.
///
/// Keyword lists keep the scorer's insertion order; no deduplication is
/// applied beyond what the scorer returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// 0–100.
    pub score: u8,
    /// 3–5 entries expected, not enforced.
    pub suggestions: Vec<String>,
}

/// The match scorer seam. One invocation makes at most one outbound call and
/// retains no state between calls.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError>;
}

/// Scorer backed by the Anthropic Messages API.
pub struct LlmMatchScorer {
    llm: LlmClient,
}

impl LlmMatchScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        let resume = truncate_chars(resume_text, MAX_RESUME_CHARS);
        let jd = truncate_chars(job_description, MAX_JOB_DESCRIPTION_CHARS);

        debug!(
            "Scoring resume ({} chars) against job description ({} chars)",
            resume.chars().count(),
            jd.chars().count()
        );

        let prompt = ATS_MATCH_PROMPT_TEMPLATE
            .replace("{resume_text}", resume)
            .replace("{job_description}", jd);

        let result: AnalysisResult = self
            .llm
            .call_json(&prompt, ATS_MATCH_SYSTEM)
            .await
            .map_err(map_llm_error)?;

        validate_result(result)
    }
}

/// Maps LLM transport and decoding failures onto the scoring error taxonomy.
fn map_llm_error(err: LlmError) -> AppError {
    match err {
        LlmError::Http(e) => AppError::ScoringUnavailable(e.to_string()),
        LlmError::Api { status, message } => {
            AppError::ScoringUnavailable(format!("status {status}: {message}"))
        }
        LlmError::EmptyContent => AppError::ScoringEmptyResponse,
        LlmError::Parse(e) => AppError::ScoringMalformedResponse(e.to_string()),
    }
}

/// Rejects results whose score falls outside 0–100.
fn validate_result(result: AnalysisResult) -> Result<AnalysisResult, AppError> {
    if result.score > 100 {
        return Err(AppError::ScoringMalformedResponse(format!(
            "score {} is out of range",
            result.score
        )));
    }
    Ok(result)
}

/// Keeps the first `max` characters of `s`. Char-boundary safe, so multibyte
/// input can never be split mid code point.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_input_untouched() {
        assert_eq!(truncate_chars("short resume", MAX_RESUME_CHARS), "short resume");
    }

    #[test]
    fn test_truncate_resume_keeps_exactly_first_6000_chars() {
        let long = "a".repeat(MAX_RESUME_CHARS + 500);
        let truncated = truncate_chars(&long, MAX_RESUME_CHARS);
        assert_eq!(truncated.chars().count(), MAX_RESUME_CHARS);
        assert_eq!(truncated, &long[..MAX_RESUME_CHARS]);
    }

    #[test]
    fn test_truncate_job_description_at_3000_chars() {
        let long = "b".repeat(MAX_JOB_DESCRIPTION_CHARS * 2);
        let truncated = truncate_chars(&long, MAX_JOB_DESCRIPTION_CHARS);
        assert_eq!(truncated.chars().count(), MAX_JOB_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_truncate_is_char_boundary_safe() {
        let s = "héllo wörld";
        let truncated = truncate_chars(s, 2);
        assert_eq!(truncated, "hé");
    }

    #[test]
    fn test_truncate_at_exact_length_is_identity() {
        let s = "x".repeat(MAX_RESUME_CHARS);
        assert_eq!(truncate_chars(&s, MAX_RESUME_CHARS), s.as_str());
    }

    #[test]
    fn test_analysis_result_parses_camel_case_wire_shape() {
        let json = r#"{
            "matchedKeywords": ["Go", "Kubernetes"],
            "missingKeywords": ["Terraform"],
            "score": 72,
            "suggestions": ["Add Terraform", "Quantify impact", "Lead with Go"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.matched_keywords, vec!["Go", "Kubernetes"]);
        assert_eq!(result.missing_keywords, vec!["Terraform"]);
        assert_eq!(result.score, 72);
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn test_non_json_payload_is_malformed() {
        let err = serde_json::from_str::<AnalysisResult>("I cannot help with that").unwrap_err();
        let mapped = map_llm_error(LlmError::Parse(err));
        assert!(matches!(mapped, AppError::ScoringMalformedResponse(_)));
    }

    #[test]
    fn test_empty_content_maps_to_empty_response() {
        assert!(matches!(
            map_llm_error(LlmError::EmptyContent),
            AppError::ScoringEmptyResponse
        ));
    }

    #[test]
    fn test_api_error_maps_to_unavailable_with_status() {
        let mapped = map_llm_error(LlmError::Api {
            status: 529,
            message: "overloaded".to_string(),
        });
        match mapped {
            AppError::ScoringUnavailable(msg) => {
                assert!(msg.contains("529"));
                assert!(msg.contains("overloaded"));
            }
            other => panic!("expected ScoringUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_score_is_malformed() {
        let result = AnalysisResult {
            matched_keywords: vec![],
            missing_keywords: vec![],
            score: 150,
            suggestions: vec![],
        };
        assert!(matches!(
            validate_result(result),
            Err(AppError::ScoringMalformedResponse(_))
        ));
    }

    #[test]
    fn test_score_100_is_valid() {
        let result = AnalysisResult {
            matched_keywords: vec!["Rust".to_string()],
            missing_keywords: vec![],
            score: 100,
            suggestions: vec!["Keep it up".to_string()],
        };
        assert!(validate_result(result).is_ok());
    }

    #[test]
    fn test_prompt_template_substitution_slots_exist() {
        assert!(ATS_MATCH_PROMPT_TEMPLATE.contains("{resume_text}"));
        assert!(ATS_MATCH_PROMPT_TEMPLATE.contains("{job_description}"));
    }
}
