//! # medidesk-store
//!
//! Storage backends for the MediDesk console.
//!
//! ## Overview
//!
//! Both types implement [`Repository`](medidesk_core::traits::Repository)
//! and are interchangeable behind `Box<dyn Repository<T>>`:
//!
//! - [`InMemoryRepository`]: the mock-data backend. Shared, ordered, lost on
//!   exit.
//! - [`JsonFileRepository`]: one JSON array per collection in a data
//!   directory, rewritten after every mutation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medidesk_store::{InMemoryRepository, JsonFileRepository};
//!
//! let memory = InMemoryRepository::seeded(mock_appointments());
//! let on_disk = JsonFileRepository::open(Path::new("data"), mock_appointments())?;
//! ```

pub mod json;
pub mod memory;

pub use json::JsonFileRepository;
pub use memory::InMemoryRepository;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use medidesk_contracts::{
        appointment::{Appointment, AppointmentStatus},
        error::DeskError,
        ids::{AppointmentId, DoctorId, PatientId},
    };
    use medidesk_core::traits::Repository;

    use super::{InMemoryRepository, JsonFileRepository};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a minimal appointment with a distinguishable patient name.
    fn make_appointment(id: &str, patient: &str) -> Appointment {
        Appointment {
            id: AppointmentId::new(id),
            patient_id: PatientId::new("P001"),
            patient_name: patient.to_string(),
            doctor_id: DoctorId::new("d1"),
            doctor_name: "Dr. John Smith".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            time: "09:00 AM".to_string(),
            duration: 30,
            service: "General Checkup".to_string(),
            notes: String::new(),
            status: AppointmentStatus::Scheduled,
            created_at: Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap(),
        }
    }

    fn seed() -> Vec<Appointment> {
        vec![
            make_appointment("A1", "first"),
            make_appointment("A2", "second"),
            make_appointment("A3", "third"),
        ]
    }

    fn names(records: &[Appointment]) -> Vec<&str> {
        records.iter().map(|a| a.patient_name.as_str()).collect()
    }

    // ── In-memory ─────────────────────────────────────────────────────────────

    /// Clones share one collection: a write through one is seen by the other.
    #[test]
    fn test_clones_share_records() {
        let repo = InMemoryRepository::seeded(seed());
        let view = repo.clone();

        repo.insert(make_appointment("A4", "fourth")).unwrap();

        assert_eq!(view.len().unwrap(), 4);
        assert_eq!(view.get("A4").unwrap().unwrap().patient_name, "fourth");
    }

    /// Replacing keeps every other record and the original order.
    #[test]
    fn test_replace_in_place() {
        let repo = InMemoryRepository::seeded(seed());

        let previous = repo.replace(make_appointment("A2", "changed")).unwrap();
        assert_eq!(previous.patient_name, "second");

        let all = repo.all().unwrap();
        assert_eq!(names(&all), vec!["first", "changed", "third"]);
    }

    #[test]
    fn test_replace_unknown_is_not_found() {
        let repo = InMemoryRepository::seeded(seed());

        match repo.replace(make_appointment("A9", "ghost")) {
            Err(DeskError::NotFound { kind, id }) => {
                assert_eq!(kind, "appointment");
                assert_eq!(id, "A9");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(names(&repo.all().unwrap()), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_repository() {
        let repo: InMemoryRepository<Appointment> = InMemoryRepository::new();
        assert!(repo.is_empty().unwrap());
        assert!(repo.get("A1").unwrap().is_none());
    }

    // ── JSON file ─────────────────────────────────────────────────────────────

    /// First open writes the seed; a second open reads it back.
    #[test]
    fn test_json_seeds_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let repo = JsonFileRepository::open(dir.path(), seed()).unwrap();
        assert!(repo.path().ends_with("appointments.json"));
        assert!(repo.path().exists());

        let reopened: JsonFileRepository<Appointment> =
            JsonFileRepository::open(dir.path(), vec![]).unwrap();
        assert_eq!(reopened.all().unwrap(), seed());
    }

    /// Inserts and replacements survive reopening the directory.
    #[test]
    fn test_json_persists_mutations() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = JsonFileRepository::open(dir.path(), seed()).unwrap();
            repo.insert(make_appointment("A4", "fourth")).unwrap();
            repo.replace(make_appointment("A1", "renamed")).unwrap();
        }

        let reopened: JsonFileRepository<Appointment> =
            JsonFileRepository::open(dir.path(), vec![]).unwrap();
        assert_eq!(
            names(&reopened.all().unwrap()),
            vec!["renamed", "second", "third", "fourth"]
        );
    }

    /// A failed replace leaves both the file and the memory copy untouched.
    #[test]
    fn test_json_failed_replace_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path(), seed()).unwrap();

        assert!(repo.replace(make_appointment("A9", "ghost")).is_err());

        let reopened: JsonFileRepository<Appointment> =
            JsonFileRepository::open(dir.path(), vec![]).unwrap();
        assert_eq!(reopened.all().unwrap(), seed());
        assert_eq!(repo.all().unwrap(), seed());
    }

    #[test]
    fn test_json_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("appointments.json"), "{ not json").unwrap();

        match JsonFileRepository::<Appointment>::open(dir.path(), seed()) {
            Err(DeskError::StorageFailed { reason }) => {
                assert!(reason.contains("failed to parse"), "unexpected reason: {reason}");
            }
            Err(other) => panic!("expected StorageFailed, got {:?}", other),
            Ok(_) => panic!("corrupt file must not open"),
        }
    }

    #[test]
    fn test_json_creates_nested_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("hospital").join("data");

        let repo = JsonFileRepository::open(&nested, seed()).unwrap();
        assert_eq!(repo.len().unwrap(), 3);
        assert!(nested.join("appointments.json").exists());
    }
}
