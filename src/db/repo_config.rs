//! Repository configuration file support.
//!
//! This module provides utilities for reading repository and solver
//! configuration from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use crate::models::{DayOfWeek, TimeOfDay};
use crate::scheduler::{SlotCatalog, SolverConfig, DEFAULT_MAX_STEPS, STANDARD_BLOCK_MINUTES};

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub solver: SolverSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Solver settings controlling the search budget and the weekly slot grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSettings {
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
    #[serde(default = "default_days")]
    pub days: Vec<String>,
    #[serde(default = "default_day_starts")]
    pub day_starts: Vec<String>,
    #[serde(default = "default_block_minutes")]
    pub block_minutes: u16,
}

fn default_max_steps() -> u64 {
    DEFAULT_MAX_STEPS
}

fn default_days() -> Vec<String> {
    vec![
        "Monday".to_string(),
        "Tuesday".to_string(),
        "Wednesday".to_string(),
        "Thursday".to_string(),
        "Friday".to_string(),
        "Saturday".to_string(),
    ]
}

fn default_day_starts() -> Vec<String> {
    vec![
        "09:00".to_string(),
        "11:00".to_string(),
        "14:00".to_string(),
        "16:00".to_string(),
    ]
}

fn default_block_minutes() -> u16 {
    STANDARD_BLOCK_MINUTES
}

// Missing [solver] section must behave like a section with no keys, so the
// hand-written Default reuses the field defaults.
impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            days: default_days(),
            day_starts: default_day_starts(),
            block_minutes: default_block_minutes(),
        }
    }
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `scheduler.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if found and parsed successfully
    /// * `Err(RepositoryError)` if no config file found or parse error
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("scheduler.toml"),
            PathBuf::from("config/scheduler.toml"),
            PathBuf::from("../scheduler.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No scheduler.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Build the solver configuration from the `[solver]` settings.
    ///
    /// # Returns
    /// * `Ok(SolverConfig)` if the day names and start times parse
    /// * `Err(RepositoryError)` on an empty grid or an unparseable entry
    pub fn to_solver_config(&self) -> Result<SolverConfig, RepositoryError> {
        if self.solver.days.is_empty() {
            return Err(RepositoryError::configuration(
                "Solver grid requires at least one day in 'solver.days'",
            ));
        }
        if self.solver.day_starts.is_empty() {
            return Err(RepositoryError::configuration(
                "Solver grid requires at least one start in 'solver.day_starts'",
            ));
        }
        if self.solver.block_minutes == 0 {
            return Err(RepositoryError::configuration(
                "'solver.block_minutes' must be positive",
            ));
        }

        let days = self
            .solver
            .days
            .iter()
            .map(|d| DayOfWeek::from_str(d))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                RepositoryError::configuration(format!("Invalid 'solver.days' entry: {}", e))
            })?;

        let day_starts = self
            .solver
            .day_starts
            .iter()
            .map(|t| TimeOfDay::from_str(t))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                RepositoryError::configuration(format!("Invalid 'solver.day_starts' entry: {}", e))
            })?;

        Ok(SolverConfig {
            max_steps: self.solver.max_steps,
            catalog: SlotCatalog::from_grid(&days, &day_starts, self.solver.block_minutes),
        })
    }
}
