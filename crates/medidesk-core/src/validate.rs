//! Appointment form validation.
//!
//! The same rules back the new-appointment page and the edit dialog. All
//! failing fields are reported together so each one can show its inline
//! message.

use chrono::NaiveDate;
use tracing::debug;

use medidesk_contracts::{
    form::{AppointmentForm, FormErrors, FormField},
    ids::{DoctorId, PatientId},
};

/// Visit length used when the form leaves duration blank.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Minimum patient name length, in characters.
pub const MIN_PATIENT_NAME_CHARS: usize = 2;

/// A form that passed validation: every required field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidAppointment {
    pub patient_name: String,
    pub patient_id: Option<PatientId>,
    pub doctor_id: DoctorId,
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    pub notes: String,
}

/// Check `form` and either return its validated contents or the per-field
/// errors.
pub fn validate_appointment(form: &AppointmentForm) -> Result<ValidAppointment, FormErrors> {
    let mut errors = FormErrors::default();

    if form.patient_name.chars().count() < MIN_PATIENT_NAME_CHARS {
        errors.insert(FormField::PatientName, "Patient name is required");
    }
    if form.doctor_id.is_empty() {
        errors.insert(FormField::Doctor, "Please select a doctor");
    }
    if form.service.is_empty() {
        errors.insert(FormField::Service, "Please select a service");
    }
    if form.date.is_none() {
        errors.insert(FormField::Date, "Please select a date");
    }
    if form.time.is_empty() {
        errors.insert(FormField::Time, "Please select a time");
    }

    let date = match form.date {
        Some(date) if errors.is_empty() => date,
        _ => {
            debug!(failed = errors.len(), "appointment form rejected");
            return Err(errors);
        }
    };

    Ok(ValidAppointment {
        patient_name: form.patient_name.clone(),
        patient_id: form.patient_id.clone(),
        doctor_id: form.doctor(),
        service: form.service.clone(),
        date,
        time: form.time.clone(),
        duration: form.duration.unwrap_or(DEFAULT_DURATION_MINUTES),
        notes: form.notes.clone().unwrap_or_default(),
    })
}
