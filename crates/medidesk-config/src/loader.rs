//! Loading and checking a `DeskConfig`.
//!
//! Parsing failures and inconsistent reference lists are both reported as
//! `DeskError::ConfigError`, before any screen is built.

use std::{collections::HashSet, path::Path};

use tracing::{debug, info};

use medidesk_contracts::error::{DeskError, DeskResult};

use crate::schema::DeskConfig;

impl DeskConfig {
    /// Parse `s` as TOML and check the reference lists.
    pub fn from_toml_str(s: &str) -> DeskResult<Self> {
        let config: DeskConfig = toml::from_str(s).map_err(|e| DeskError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.check()?;

        debug!(
            doctors = config.doctors.len(),
            services = config.services.len(),
            time_slots = config.scheduling.time_slots.len(),
            backend = ?config.storage.backend,
            "config parsed"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> DeskResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DeskError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Reject reference lists a selector could not present unambiguously.
    fn check(&self) -> DeskResult<()> {
        let mut seen = HashSet::new();
        for doctor in &self.doctors {
            if doctor.id.as_str().is_empty() {
                return Err(DeskError::ConfigError {
                    reason: format!("doctor '{}' has an empty id", doctor.name),
                });
            }
            if !seen.insert(doctor.id.as_str()) {
                return Err(DeskError::ConfigError {
                    reason: format!("duplicate doctor id '{}'", doctor.id),
                });
            }
        }

        if self.services.iter().any(|s| s.trim().is_empty()) {
            return Err(DeskError::ConfigError {
                reason: "services must not contain blank entries".to_string(),
            });
        }
        if self.scheduling.time_slots.iter().any(|s| s.trim().is_empty()) {
            return Err(DeskError::ConfigError {
                reason: "scheduling.time_slots must not contain blank entries".to_string(),
            });
        }
        Ok(())
    }
}
