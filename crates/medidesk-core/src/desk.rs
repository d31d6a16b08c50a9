//! The appointment desk: the mutation handler behind the new-appointment
//! page and the edit dialog.
//!
//! Every write follows the same order:
//!
//!   Form → Validate → Resolve doctor → Build record → Repository write
//!
//! A form that fails validation never reaches the repository, so a rejected
//! submission cannot add or modify a record.

use chrono::Utc;
use tracing::{debug, info, warn};

use medidesk_contracts::{
    appointment::{Appointment, AppointmentStatus},
    error::{DeskError, DeskResult},
    form::AppointmentForm,
    ids::{AppointmentId, PatientId},
    record::Record,
};

use crate::{
    filter::{AppointmentFilter, AppointmentTab},
    reference::ReferenceData,
    traits::Repository,
    validate::{validate_appointment, ValidAppointment},
};

/// Owns the appointment repository and the reference lists used to resolve
/// form selections.
pub struct AppointmentDesk {
    repo: Box<dyn Repository<Appointment>>,
    reference: ReferenceData,
}

impl AppointmentDesk {
    pub fn new(repo: Box<dyn Repository<Appointment>>, reference: ReferenceData) -> Self {
        Self { repo, reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Every appointment, in stored order.
    pub fn all(&self) -> DeskResult<Vec<Appointment>> {
        self.repo.all()
    }

    pub fn get(&self, id: &AppointmentId) -> DeskResult<Option<Appointment>> {
        self.repo.get(id.as_str())
    }

    /// Appointments passing `filter` and then `tab`, in stored order.
    pub fn list(&self, filter: &AppointmentFilter, tab: AppointmentTab) -> DeskResult<Vec<Appointment>> {
        let mut matched = filter.retain(self.repo.all()?);
        matched.retain(|a| tab.includes(a));
        Ok(matched)
    }

    /// Creation flow: validate, resolve the doctor, stamp, and append.
    ///
    /// The new record is `scheduled` and gets a freshly generated id.
    pub fn schedule(&self, form: &AppointmentForm) -> DeskResult<Appointment> {
        let valid = validate_appointment(form).map_err(DeskError::Validation)?;
        let doctor_name = self.reference.doctor_name(&valid.doctor_id);

        let appointment = Appointment {
            id: AppointmentId::generate(),
            // Unregistered walk-ins have no patient id; the name is the reference.
            patient_id: valid.patient_id.unwrap_or_else(|| PatientId::new("")),
            patient_name: valid.patient_name,
            doctor_id: valid.doctor_id,
            doctor_name,
            date: valid.date,
            time: valid.time,
            duration: valid.duration,
            service: valid.service,
            notes: valid.notes,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        };

        self.repo.insert(appointment.clone())?;

        info!(
            appointment_id = %appointment.id,
            doctor = %appointment.doctor_name,
            date = %appointment.date,
            time = %appointment.time,
            "appointment scheduled"
        );
        Ok(appointment)
    }

    /// Edit flow: validate, then overwrite the record with the matching id.
    ///
    /// The id, patient id, status, and creation timestamp of the stored
    /// record are kept; every form-backed field is replaced.
    pub fn update(&self, id: &AppointmentId, form: &AppointmentForm) -> DeskResult<Appointment> {
        let valid = validate_appointment(form).map_err(DeskError::Validation)?;

        let existing = self.repo.get(id.as_str())?.ok_or_else(|| {
            warn!(appointment_id = %id, "edit targeted an unknown appointment");
            DeskError::NotFound {
                kind: Appointment::KIND,
                id: id.to_string(),
            }
        })?;

        let updated = self.apply_form(existing, valid);
        self.repo.replace(updated.clone())?;

        info!(
            appointment_id = %updated.id,
            doctor = %updated.doctor_name,
            date = %updated.date,
            time = %updated.time,
            "appointment updated"
        );
        Ok(updated)
    }

    /// Set any status on an appointment. No transition is refused.
    pub fn set_status(&self, id: &AppointmentId, status: AppointmentStatus) -> DeskResult<Appointment> {
        let mut appointment = self.repo.get(id.as_str())?.ok_or_else(|| DeskError::NotFound {
            kind: Appointment::KIND,
            id: id.to_string(),
        })?;

        let previous = appointment.status;
        appointment.status = status;
        self.repo.replace(appointment.clone())?;

        debug!(
            appointment_id = %id,
            from = %previous,
            to = %status,
            "appointment status changed"
        );
        Ok(appointment)
    }

    /// The cancel action from the list's row menu.
    pub fn cancel(&self, id: &AppointmentId) -> DeskResult<Appointment> {
        self.set_status(id, AppointmentStatus::Cancelled)
    }

    /// Pre-fill an edit form from a stored record.
    pub fn edit_form(appointment: &Appointment) -> AppointmentForm {
        AppointmentForm {
            patient_name: appointment.patient_name.clone(),
            patient_id: Some(appointment.patient_id.clone()),
            doctor_id: appointment.doctor_id.to_string(),
            service: appointment.service.clone(),
            date: Some(appointment.date),
            time: appointment.time.clone(),
            duration: Some(appointment.duration),
            notes: Some(appointment.notes.clone()),
        }
    }

    fn apply_form(&self, existing: Appointment, valid: ValidAppointment) -> Appointment {
        let doctor_name = self.reference.doctor_name(&valid.doctor_id);
        Appointment {
            patient_name: valid.patient_name,
            doctor_id: valid.doctor_id,
            doctor_name,
            date: valid.date,
            time: valid.time,
            duration: valid.duration,
            service: valid.service,
            notes: valid.notes,
            ..existing
        }
    }
}
