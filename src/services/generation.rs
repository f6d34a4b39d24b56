//! Per-term serialization of timetable generation.
//!
//! Two generation runs for the same term would race on the draft table
//! (clear, solve, insert). This module hands out one async mutex per term,
//! created on demand, so runs for the same term queue up while runs for
//! different terms proceed in parallel.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::Semester;

/// Guard held for the duration of one generation run.
pub type GenerationPermit = tokio::sync::OwnedMutexGuard<()>;

/// Lock table with one async mutex per (semester, year).
#[derive(Clone)]
pub struct GenerationLocks {
    locks: Arc<Mutex<HashMap<(Semester, u16), Arc<tokio::sync::Mutex<()>>>>>,
}

impl GenerationLocks {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self {
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Wait for exclusive access to one term's generation.
    ///
    /// The outer lock guards only the map lookup and is released before the
    /// await, so a long-running generation never blocks other terms.
    pub async fn acquire(&self, semester: Semester, year: u16) -> GenerationPermit {
        let term_lock = {
            let mut locks = self.locks.lock();
            locks
                .entry((semester, year))
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
                .clone()
        };
        term_lock.lock_owned().await
    }
}

impl Default for GenerationLocks {
    fn default() -> Self {
        Self::new()
    }
}
