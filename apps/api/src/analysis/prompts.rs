// LLM prompt constants for the ATS match scorer.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt for ATS match scoring — enforces JSON-only output.
pub const ATS_MATCH_SYSTEM: &str =
    "You are an expert ATS (Applicant Tracking System) analyst. \
    Compare a resume against a job description and report keyword coverage. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// ATS match prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending. The instruction text is fixed per call; caller input is
/// only ever substituted into the two document slots.
pub const ATS_MATCH_PROMPT_TEMPLATE: &str = r#"Compare the following resume against the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchedKeywords": ["Go", "Kubernetes"],
  "missingKeywords": ["Terraform"],
  "score": 72,
  "suggestions": [
    "Add a bullet quantifying your Kubernetes work",
    "Mention Terraform if you have used it",
    "Lead with the technologies named in the job title"
  ]
}

Rules:
- "matchedKeywords": skills, tools, and qualifications that appear in BOTH the job description and the resume.
- "missingKeywords": skills, tools, and qualifications the job description asks for that the resume does not mention.
- "score": integer 0-100 estimating how well the resume matches the job description.
- "suggestions": 3 to 5 concrete, actionable improvements to the resume for this job.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;
