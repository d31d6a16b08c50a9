//! Reference lists that feed the appointment form's selectors.

use medidesk_contracts::{doctor::DoctorRef, ids::DoctorId};

/// Label recorded when a submitted doctor id is not in the reference list.
pub const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// Doctors, services, and time slots offered by the scheduling form.
///
/// Loaded from configuration at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub doctors: Vec<DoctorRef>,
    pub services: Vec<String>,
    pub time_slots: Vec<String>,
    /// Recorded as the doctor name when the id is not in `doctors`.
    pub unknown_doctor_label: String,
}

impl ReferenceData {
    pub fn doctor(&self, id: &DoctorId) -> Option<&DoctorRef> {
        self.doctors.iter().find(|d| &d.id == id)
    }

    /// Display name for `id`, or the fallback label.
    pub fn doctor_name(&self, id: &DoctorId) -> String {
        self.doctor(id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| self.unknown_doctor_label.clone())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            doctors: Vec::new(),
            services: Vec::new(),
            time_slots: Vec::new(),
            unknown_doctor_label: UNKNOWN_DOCTOR.to_string(),
        }
    }
}
