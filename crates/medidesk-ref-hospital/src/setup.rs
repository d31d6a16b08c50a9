//! Assembling a `Hospital` from configuration.

use tracing::info;

use medidesk_config::{DeskConfig, StorageBackend, StorageConfig};
use medidesk_contracts::{error::DeskResult, record::Record};
use medidesk_core::{traits::Repository, AppointmentDesk, Hospital};
use medidesk_store::{InMemoryRepository, JsonFileRepository};

use crate::mock_data::{
    mock_appointments, mock_bills, mock_doctors, mock_patients, mock_prescriptions,
};

/// The configuration shipped with the reference hospital.
pub const DEFAULT_CONFIG: &str = include_str!("../config/hospital.toml");

/// Parse [`DEFAULT_CONFIG`].
pub fn default_config() -> DeskResult<DeskConfig> {
    DeskConfig::from_toml_str(DEFAULT_CONFIG)
}

/// Open every collection on the configured backend, seeded with the mock
/// records, and wire the appointment desk to the configured reference lists.
pub fn build_hospital(config: &DeskConfig) -> DeskResult<Hospital> {
    let storage = &config.storage;
    let hospital = Hospital {
        desk: AppointmentDesk::new(open(storage, mock_appointments())?, config.reference_data()),
        patients: open(storage, mock_patients())?,
        doctors: open(storage, mock_doctors())?,
        bills: open(storage, mock_bills())?,
        prescriptions: open(storage, mock_prescriptions())?,
    };

    info!(
        backend = ?storage.backend,
        data_dir = %storage.data_dir.display(),
        "hospital ready"
    );
    Ok(hospital)
}

/// The default configuration on the in-memory backend.
pub fn seeded_hospital() -> DeskResult<Hospital> {
    let mut config = default_config()?;
    config.storage.backend = StorageBackend::Memory;
    build_hospital(&config)
}

fn open<T: Record>(storage: &StorageConfig, seed: Vec<T>) -> DeskResult<Box<dyn Repository<T>>> {
    Ok(match storage.backend {
        StorageBackend::Memory => Box::new(InMemoryRepository::seeded(seed)),
        StorageBackend::Json => Box::new(JsonFileRepository::open(&storage.data_dir, seed)?),
    })
}
