use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Holds the read-only skill catalog and the inference hook. Nothing in it
    /// is mutated after startup, so concurrent requests share it freely.
    pub analyzer: ResumeAnalyzer,
}
