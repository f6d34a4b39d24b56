//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::scheduler::SolverConfig;
use crate::services::GenerationLocks;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn FullRepository>,
    /// Step budget and slot grid used by generation runs
    pub solver: SolverConfig,
    /// Per-term locks serializing generation runs
    pub generation_locks: GenerationLocks,
}

impl AppState {
    /// Create a new application state with the given repository and the
    /// standard solver configuration.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            solver: SolverConfig::default(),
            generation_locks: GenerationLocks::new(),
        }
    }

    /// Replace the solver configuration.
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}
