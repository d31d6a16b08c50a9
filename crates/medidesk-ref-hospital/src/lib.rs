//! # medidesk-ref-hospital
//!
//! Reference hospital for the MediDesk console.
//!
//! Bundles a fictional dataset (patients, doctors, appointments, bills,
//! prescriptions) with the default configuration, and builds a ready
//! `Hospital` on whichever storage backend the configuration selects:
//!
//! - `memory`: the mock records, fresh on every run.
//! - `json`: the mock records written to the data directory on first use,
//!   then whatever the files hold.
//!
//! ```rust,ignore
//! let config = medidesk_ref_hospital::default_config()?;
//! let hospital = medidesk_ref_hospital::build_hospital(&config)?;
//! ```

pub mod mock_data;
pub mod setup;

pub use setup::{build_hospital, default_config, seeded_hospital, DEFAULT_CONFIG};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use medidesk_config::StorageBackend;
    use medidesk_contracts::{
        appointment::AppointmentStatus,
        form::AppointmentForm,
        ids::{AppointmentId, PatientId},
    };
    use medidesk_core::filter::{
        departments, AppointmentFilter, AppointmentTab, BillFilter, CategoryFilter,
        PrescriptionFilter,
    };

    use super::{build_hospital, default_config, mock_data, seeded_hospital};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form() -> AppointmentForm {
        AppointmentForm {
            patient_name: "Emily Chen".to_string(),
            patient_id: Some(PatientId::new("P005")),
            doctor_id: "d3".to_string(),
            service: "Vaccination".to_string(),
            date: Some(date(2026, 10, 20)),
            time: "10:00 AM".to_string(),
            duration: None,
            notes: None,
        }
    }

    // ── Default configuration ─────────────────────────────────────────────────

    #[test]
    fn test_default_config_parses() {
        let config = default_config().unwrap();

        assert_eq!(config.doctors.len(), 4);
        assert_eq!(config.services.len(), 5);
        assert_eq!(config.scheduling.time_slots.len(), 13);
        assert_eq!(config.scheduling.time_slots[0], "09:00 AM");
        assert_eq!(config.scheduling.time_slots[12], "04:00 PM");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    /// Every seeded staff member is selectable in the appointment form.
    #[test]
    fn test_seeded_doctors_match_reference_list() {
        let reference = default_config().unwrap().reference_data();

        for doctor in mock_data::mock_doctors() {
            let entry = reference.doctor(&doctor.id).unwrap();
            assert_eq!(entry.name, doctor.name);
            assert_eq!(entry.department, doctor.department);
        }
    }

    // ── Seeded hospital ───────────────────────────────────────────────────────

    #[test]
    fn test_smith_scheduled_over_seed() {
        let hospital = seeded_hospital().unwrap();
        let filter = AppointmentFilter::new("smith", CategoryFilter::Only(AppointmentStatus::Scheduled));

        let found = hospital.desk.list(&filter, AppointmentTab::All).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, AppointmentId::new("APT001"));
    }

    #[test]
    fn test_schedule_then_list_upcoming() {
        let hospital = seeded_hospital().unwrap();

        let created = hospital.desk.schedule(&form()).unwrap();
        assert_eq!(created.doctor_name, "Dr. Michael Brown");
        assert_eq!(created.duration, 30);

        let upcoming = hospital
            .desk
            .list(&AppointmentFilter::default(), AppointmentTab::Upcoming)
            .unwrap();
        assert_eq!(upcoming.len(), 3);
        assert_eq!(upcoming.last().unwrap().id, created.id);
    }

    #[test]
    fn test_dashboard_stats_over_seed() {
        let hospital = seeded_hospital().unwrap();
        let stats = hospital.stats(date(2026, 10, 19)).unwrap();

        assert_eq!(stats.total_patients, 5);
        assert_eq!(stats.active_doctors, 3);
        assert_eq!(stats.total_appointments, 5);
        assert_eq!(stats.appointments_on_day, 1);
        assert_eq!(stats.outstanding_bills, 2);
        // Only INV-1001 is paid.
        assert_eq!(stats.total_revenue, 248.4);

        let today = hospital.appointments_on(date(2026, 10, 19)).unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id.as_str(), "APT001");
    }

    #[test]
    fn test_records_and_bills_filters_over_seed() {
        let hospital = seeded_hospital().unwrap();

        let jane = PrescriptionFilter::new("", CategoryFilter::Only(PatientId::new("P002")));
        let records = hospital.prescriptions(&jane).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].diagnosis, "Chronic migraine");

        let invoices = hospital.bills(&BillFilter::new("inv-100", CategoryFilter::All)).unwrap();
        assert_eq!(invoices.len(), 3);

        let doctors = hospital.doctors.all().unwrap();
        assert_eq!(
            departments(&doctors),
            vec!["Cardiology", "Neurology", "Orthopedics", "Pediatrics"]
        );
    }

    // ── JSON backend ──────────────────────────────────────────────────────────

    /// A cancellation made through one hospital is visible to the next one
    /// opened on the same data directory.
    #[test]
    fn test_json_backend_persists_across_builds() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = default_config().unwrap();
        config.storage.backend = StorageBackend::Json;
        config.storage.data_dir = dir.path().to_path_buf();

        {
            let hospital = build_hospital(&config).unwrap();
            hospital.desk.cancel(&AppointmentId::new("APT001")).unwrap();
        }

        for file in ["appointments", "patients", "doctors", "bills", "prescriptions"] {
            assert!(dir.path().join(format!("{file}.json")).exists(), "{file}.json missing");
        }

        let reopened = build_hospital(&config).unwrap();
        let apt = reopened.desk.get(&AppointmentId::new("APT001")).unwrap().unwrap();
        assert_eq!(apt.status, AppointmentStatus::Cancelled);
    }
}
