//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Everything in here is either immutable or an
//! atomic counter; no request ever waits on another.

use std::sync::Arc;

use nigel_core::{PrimeSumEngine, Validator};

use crate::config::AppConfig;
use crate::middleware::metrics::ApiMetrics;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Validator configured with `config.max_n`.
    pub validator: Validator,
    pub engine: PrimeSumEngine,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// State with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State built from a validated configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            validator: Validator::new(config.max_n),
            engine: PrimeSumEngine::new(),
            metrics: ApiMetrics::new(),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_uses_configured_ceiling() {
        let state = AppState::with_config(AppConfig {
            max_n: 42,
            ..AppConfig::default()
        });
        assert_eq!(state.validator.max_n(), 42);
        assert_eq!(state.config.max_n, 42);
    }

    #[test]
    fn clones_share_metrics() {
        let state = AppState::new();
        let clone = state.clone();
        clone.metrics.record(axum::http::StatusCode::OK);
        assert_eq!(state.metrics.requests(), 1);
    }
}
