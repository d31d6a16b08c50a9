//! # medidesk-contracts
//!
//! Shared record types, statuses, and errors for the MediDesk hospital
//! console.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod appointment;
pub mod billing;
pub mod doctor;
pub mod error;
pub mod form;
pub mod ids;
pub mod patient;
pub mod prescription;
pub mod record;

#[cfg(test)]
mod tests {
    use super::*;
    use appointment::AppointmentStatus;
    use billing::{BillCategory, BillItem, PaymentMethod, PaymentStatus};
    use doctor::DoctorStatus;
    use error::DeskError;
    use form::{FormErrors, FormField};
    use ids::AppointmentId;

    // ── Status enums ─────────────────────────────────────────────────────────

    #[test]
    fn no_show_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(json, "\"no-show\"");

        let decoded: AppointmentStatus = serde_json::from_str("\"no-show\"").unwrap();
        assert_eq!(decoded, AppointmentStatus::NoShow);
    }

    #[test]
    fn on_leave_parses_from_display_text() {
        let parsed: DoctorStatus = DoctorStatus::OnLeave.to_string().parse().unwrap();
        assert_eq!(parsed, DoctorStatus::OnLeave);
    }

    #[test]
    fn status_parsing_ignores_case_and_padding() {
        let parsed: PaymentStatus = "  Overdue ".parse().unwrap();
        assert_eq!(parsed, PaymentStatus::Overdue);
    }

    #[test]
    fn unknown_status_is_an_invalid_value() {
        let err = "rescheduled".parse::<AppointmentStatus>().unwrap_err();
        match err {
            DeskError::InvalidValue { field, value } => {
                assert_eq!(field, "appointment status");
                assert_eq!(value, "rescheduled");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn bank_transfer_keeps_its_space() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank transfer\"");
    }

    // ── Bill items ───────────────────────────────────────────────────────────

    #[test]
    fn bill_item_amount_is_quantity_times_unit_price() {
        let item = BillItem::new("1", "Blood panel", 3, 45.5, BillCategory::Lab);
        assert_eq!(item.amount, 136.5);
    }

    // ── Identifiers ──────────────────────────────────────────────────────────

    #[test]
    fn generated_ids_are_unique() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| AppointmentId::generate().0).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&AppointmentId::new("APT001")).unwrap();
        assert_eq!(json, "\"APT001\"");
    }

    // ── Form errors ──────────────────────────────────────────────────────────

    #[test]
    fn form_errors_display_in_field_order() {
        let mut errors = FormErrors::default();
        errors.insert(FormField::Time, "Please select a time");
        errors.insert(FormField::PatientName, "Patient name is required");

        assert_eq!(
            errors.to_string(),
            "patient name: Patient name is required; time: Please select a time"
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Doctor), None);
    }

    // ── DeskError display messages ───────────────────────────────────────────

    #[test]
    fn error_not_found_display() {
        let err = DeskError::NotFound {
            kind: "appointment",
            id: "APT404".to_string(),
        };
        assert_eq!(err.to_string(), "appointment 'APT404' not found");
    }

    #[test]
    fn error_validation_display() {
        let mut errors = FormErrors::default();
        errors.insert(FormField::Service, "Please select a service");
        let msg = DeskError::Validation(errors).to_string();
        assert!(msg.contains("form validation failed"));
        assert!(msg.contains("Please select a service"));
    }

    #[test]
    fn error_date_unavailable_display() {
        let err = DeskError::DateUnavailable {
            date: chrono::NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
        };
        assert!(err.to_string().contains("2026-10-17"));
    }

    #[test]
    fn error_storage_failed_display() {
        let err = DeskError::StorageFailed {
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("storage failed"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn error_config_error_display() {
        let err = DeskError::ConfigError {
            reason: "missing doctors table".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
