//! # medidesk-config
//!
//! TOML configuration for the MediDesk console.
//!
//! ## Overview
//!
//! A [`DeskConfig`] carries everything that varies between deployments of
//! the console:
//!
//! - the reference doctor list and service list behind the form selectors,
//! - the time-slot catalogue and the unknown-doctor fallback label,
//! - the storage backend (`memory` or `json`) and its data directory.
//!
//! Configuration is loaded once at startup with
//! [`DeskConfig::from_toml_str`] or [`DeskConfig::from_file`]. Malformed
//! TOML, duplicate doctor ids, and blank list entries are all reported as
//! `DeskError::ConfigError`.

pub mod loader;
pub mod schema;

pub use schema::{DeskConfig, SchedulingConfig, StorageBackend, StorageConfig};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use medidesk_contracts::{error::DeskError, ids::DoctorId};

    use super::{DeskConfig, StorageBackend};

    const FULL: &str = r#"
        services = ["General Checkup", "Vaccination"]

        [scheduling]
        unknown_doctor_label = "Unassigned"
        time_slots = ["09:00 AM", "09:30 AM", "01:00 PM"]

        [[doctors]]
        id = "d1"
        name = "Dr. John Smith"
        department = "Cardiology"

        [[doctors]]
        id = "d2"
        name = "Dr. Sarah Johnson"
        department = "Neurology"

        [storage]
        backend = "json"
        data_dir = "var/medidesk"
    "#;

    fn expect_config_error(result: Result<DeskConfig, DeskError>, needle: &str) {
        match result {
            Err(DeskError::ConfigError { reason }) => {
                assert!(reason.contains(needle), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 1. full document ──────────────────────────────────────────────────────

    #[test]
    fn test_full_document_parses() {
        let config = DeskConfig::from_toml_str(FULL).unwrap();

        assert_eq!(config.services, vec!["General Checkup", "Vaccination"]);
        assert_eq!(config.scheduling.unknown_doctor_label, "Unassigned");
        assert_eq!(config.scheduling.time_slots.len(), 3);
        assert_eq!(config.doctors.len(), 2);
        assert_eq!(config.doctors[1].id, DoctorId::new("d2"));
        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(config.storage.data_dir, PathBuf::from("var/medidesk"));
    }

    // ── 2. defaults ───────────────────────────────────────────────────────────

    /// An empty document is valid: memory backend, no reference lists, and
    /// the standard fallback label.
    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DeskConfig::from_toml_str("").unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.scheduling.unknown_doctor_label, "Unknown Doctor");
        assert!(config.doctors.is_empty());
        assert!(config.services.is_empty());
    }

    #[test]
    fn test_partial_storage_section_keeps_default_dir() {
        let config = DeskConfig::from_toml_str("[storage]\nbackend = \"json\"\n").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
    }

    // ── 3. reference data ─────────────────────────────────────────────────────

    #[test]
    fn test_reference_data_resolves_doctor_names() {
        let reference = DeskConfig::from_toml_str(FULL).unwrap().reference_data();

        assert_eq!(reference.doctor_name(&DoctorId::new("d1")), "Dr. John Smith");
        assert_eq!(reference.doctor_name(&DoctorId::new("d9")), "Unassigned");
        assert_eq!(reference.time_slots[2], "01:00 PM");
        assert_eq!(reference.services.len(), 2);
    }

    // ── 4. rejected documents ─────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        expect_config_error(
            DeskConfig::from_toml_str("this is not valid toml ][[["),
            "failed to parse config TOML",
        );
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        expect_config_error(
            DeskConfig::from_toml_str("[storage]\nbackend = \"postgres\"\n"),
            "failed to parse config TOML",
        );
    }

    #[test]
    fn test_duplicate_doctor_id_is_rejected() {
        let toml = r#"
            [[doctors]]
            id = "d1"
            name = "Dr. John Smith"
            department = "Cardiology"

            [[doctors]]
            id = "d1"
            name = "Dr. Emily Davis"
            department = "Orthopedics"
        "#;
        expect_config_error(DeskConfig::from_toml_str(toml), "duplicate doctor id 'd1'");
    }

    #[test]
    fn test_blank_service_is_rejected() {
        expect_config_error(
            DeskConfig::from_toml_str("services = [\"Vaccination\", \"  \"]\n"),
            "services must not contain blank entries",
        );
    }

    #[test]
    fn test_blank_time_slot_is_rejected() {
        expect_config_error(
            DeskConfig::from_toml_str("[scheduling]\ntime_slots = [\"\"]\n"),
            "time_slots",
        );
    }

    // ── 5. files ──────────────────────────────────────────────────────────────

    #[test]
    fn test_from_file_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medidesk.toml");
        std::fs::write(&path, FULL).unwrap();

        let config = DeskConfig::from_file(&path).unwrap();
        assert_eq!(config.doctors.len(), 2);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        expect_config_error(
            DeskConfig::from_file(Path::new("/nonexistent/medidesk.toml")),
            "failed to read config file",
        );
    }
}
