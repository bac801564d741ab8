//! Application state shared by all request handlers.

use std::sync::Arc;

use shopfront_core::storage::ProductRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request. The repository is built once at startup and
/// reused by every request served by this process.
#[derive(Clone)]
pub struct AppState {
    /// Product storage backend.
    pub product_repo: Arc<dyn ProductRepository>,
    /// Number of products written by a seed request.
    pub seed_count: usize,
}

impl AppState {
    /// Creates a new AppState with the given repository and configuration.
    pub fn new(product_repo: Arc<dyn ProductRepository>, config: &Config) -> Self {
        Self {
            product_repo,
            seed_count: config.seed_count,
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory storage with default configuration.
    fn default() -> Self {
        Self::new(
            Arc::new(crate::storage::InMemoryRepository::new()),
            &Config::default(),
        )
    }
}
