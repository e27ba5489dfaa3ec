/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - Clone is expected to be cheap (Arc-backed members)
 */
use std::sync::Arc;

use crate::repos::memory_repo::MemoryStore;
use crate::services::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub memories: Arc<dyn MemoryStore>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(memories: Arc<dyn MemoryStore>, auth: Arc<AuthService>) -> Self {
        Self { memories, auth }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
