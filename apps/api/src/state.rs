use std::sync::Arc;

use crate::analysis::scorer::MatchScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable match scorer. `None` means the scoring credential is absent
    /// and every analyze request fails before extraction.
    pub scorer: Option<Arc<dyn MatchScorer>>,
    #[allow(dead_code)]
    pub config: Config,
}
