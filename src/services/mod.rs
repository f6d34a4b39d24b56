//! Service layer for business logic and orchestration.
//!
//! This module contains services that sit beside the database operations.
//! Services coordinate long-running work and implement cross-cutting
//! behavior that does not belong to a single repository.

pub mod generation;

pub use generation::{GenerationLocks, GenerationPermit};
