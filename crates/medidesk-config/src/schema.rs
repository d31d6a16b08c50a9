//! Configuration schema.
//!
//! A `DeskConfig` is deserialized from TOML. Every section is optional; an
//! empty document yields the in-memory backend with empty reference lists
//! and the `"Unknown Doctor"` fallback label.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use medidesk_contracts::doctor::DoctorRef;
use medidesk_core::reference::{ReferenceData, UNKNOWN_DOCTOR};

/// Where the console keeps its collections.
///
/// Example in TOML:
/// ```toml
/// [storage]
/// backend = "json"
/// data_dir = "var/medidesk"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    /// Seeded mock data, lost on exit.
    #[default]
    Memory,
    /// One JSON file per collection under `data_dir`.
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Only read by the `json` backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Recorded as the doctor name when a submitted id is not in `doctors`.
    #[serde(default = "default_unknown_doctor_label")]
    pub unknown_doctor_label: String,

    /// Slot labels offered by the time picker, in display order.
    #[serde(default)]
    pub time_slots: Vec<String>,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            unknown_doctor_label: default_unknown_doctor_label(),
            time_slots: Vec::new(),
        }
    }
}

fn default_unknown_doctor_label() -> String {
    UNKNOWN_DOCTOR.to_string()
}

/// The top-level structure deserialized from a TOML config file.
///
/// Example:
/// ```toml
/// services = ["General Checkup", "Vaccination"]
///
/// [scheduling]
/// time_slots = ["09:00 AM", "09:30 AM"]
///
/// [[doctors]]
/// id = "d1"
/// name = "Dr. John Smith"
/// department = "Cardiology"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Services offered by the service selector.
    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub scheduling: SchedulingConfig,

    /// Doctors offered by the doctor selector. Order is display order.
    #[serde(default)]
    pub doctors: Vec<DoctorRef>,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl DeskConfig {
    /// The reference lists the appointment desk resolves selections against.
    pub fn reference_data(&self) -> ReferenceData {
        ReferenceData {
            doctors: self.doctors.clone(),
            services: self.services.clone(),
            time_slots: self.scheduling.time_slots.clone(),
            unknown_doctor_label: self.scheduling.unknown_doctor_label.clone(),
        }
    }
}
