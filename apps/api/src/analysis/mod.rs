//! Resume ATS analysis — extract text from an uploaded resume, normalize it,
//! and score it against a job description via the LLM scorer.
//!
//! The pipeline is a fixed linear sequence (validate → extract → normalize →
//! score) with no state shared across requests.

pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod scorer;
