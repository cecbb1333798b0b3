use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; every analysis is request-local.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
