use std::sync::Arc;

use crate::config::Config;
use crate::fields::FieldExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Email/phone patterns, compiled once at startup.
    pub fields: Arc<FieldExtractor>,
}
