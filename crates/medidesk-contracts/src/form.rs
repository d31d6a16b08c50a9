//! Form input shapes and field-level validation errors.
//!
//! A form is raw operator input: every field may be blank. Validation lives
//! in `medidesk-core`; this module only defines what a form holds and how
//! its errors are reported back to each field.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{DoctorId, PatientId};

/// Raw input of the appointment form, shared by the new and edit flows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentForm {
    pub patient_name: String,
    pub patient_id: Option<PatientId>,
    /// Empty until a doctor is picked.
    pub doctor_id: String,
    pub service: String,
    pub date: Option<NaiveDate>,
    /// Time slot label, e.g. `"09:30 AM"`. Empty until a slot is picked.
    pub time: String,
    /// Minutes. Falls back to the default duration when absent.
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

impl AppointmentForm {
    /// Doctor id as submitted. Only meaningful once validation passed.
    pub fn doctor(&self) -> DoctorId {
        DoctorId::new(self.doctor_id.clone())
    }
}

/// A form field that can carry an inline error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    PatientName,
    Doctor,
    Service,
    Date,
    Time,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::PatientName => "patient name",
            FormField::Doctor => "doctor",
            FormField::Service => "service",
            FormField::Date => "date",
            FormField::Time => "time",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-field validation messages, ordered the way the form lays fields out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
}

impl FormErrors {
    /// Record `message` against `field`. A later message for the same field
    /// replaces the earlier one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    /// The inline message for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
