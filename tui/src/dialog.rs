//! The appointment form dialog, shared by "new appointment" and "edit".
//!
//! Text fields take typed characters. Doctor, service, and time are
//! selectors cycled with ←/→ over the configured reference lists. The date
//! field is a picker that only ever lands on selectable days.

use chrono::NaiveDate;

use medidesk_contracts::{
    appointment::Appointment,
    form::{AppointmentForm, FormErrors, FormField},
    ids::DoctorId,
};
use medidesk_core::{
    reference::ReferenceData,
    schedule::{is_date_disabled, next_available_date},
    validate::DEFAULT_DURATION_MINUTES,
    AppointmentDesk,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    PatientName,
    Doctor,
    Service,
    Date,
    Time,
    Duration,
    Notes,
}

impl DialogField {
    pub const ALL: [DialogField; 7] = [
        DialogField::PatientName,
        DialogField::Doctor,
        DialogField::Service,
        DialogField::Date,
        DialogField::Time,
        DialogField::Duration,
        DialogField::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DialogField::PatientName => "Patient name",
            DialogField::Doctor => "Doctor",
            DialogField::Service => "Service",
            DialogField::Date => "Date",
            DialogField::Time => "Time",
            DialogField::Duration => "Duration (min)",
            DialogField::Notes => "Notes",
        }
    }

    /// The validated form field this input reports errors for.
    pub fn error_field(self) -> Option<FormField> {
        match self {
            DialogField::PatientName => Some(FormField::PatientName),
            DialogField::Doctor => Some(FormField::Doctor),
            DialogField::Service => Some(FormField::Service),
            DialogField::Date => Some(FormField::Date),
            DialogField::Time => Some(FormField::Time),
            DialogField::Duration | DialogField::Notes => None,
        }
    }

    fn is_selector(self) -> bool {
        matches!(
            self,
            DialogField::Doctor | DialogField::Service | DialogField::Date | DialogField::Time
        )
    }
}

pub struct AppointmentDialog {
    /// The stored record when editing, `None` for a new appointment.
    pub editing: Option<Appointment>,
    pub form: AppointmentForm,
    pub duration_text: String,
    pub focus: DialogField,
    /// Inline messages from the last rejected submission.
    pub errors: FormErrors,
}

impl AppointmentDialog {
    pub fn new_appointment() -> Self {
        Self {
            editing: None,
            form: AppointmentForm::default(),
            duration_text: DEFAULT_DURATION_MINUTES.to_string(),
            focus: DialogField::PatientName,
            errors: FormErrors::default(),
        }
    }

    pub fn edit(appointment: &Appointment) -> Self {
        Self {
            editing: Some(appointment.clone()),
            form: AppointmentDesk::edit_form(appointment),
            duration_text: appointment.duration.to_string(),
            focus: DialogField::PatientName,
            errors: FormErrors::default(),
        }
    }

    pub fn title(&self) -> String {
        match &self.editing {
            Some(a) => format!(" Edit Appointment {} ", a.id),
            None => " New Appointment ".to_string(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus, 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step(self.focus, DialogField::ALL.len() - 1);
    }

    pub fn type_char(&mut self, c: char) {
        match self.focus {
            DialogField::PatientName => self.form.patient_name.push(c),
            DialogField::Notes => self.form.notes.get_or_insert_with(String::new).push(c),
            DialogField::Duration if c.is_ascii_digit() => self.duration_text.push(c),
            _ => {}
        }
    }

    /// Delete a character from a text field, or clear a selector.
    pub fn backspace(&mut self) {
        match self.focus {
            DialogField::PatientName => {
                self.form.patient_name.pop();
            }
            DialogField::Notes => {
                if let Some(notes) = self.form.notes.as_mut() {
                    notes.pop();
                }
            }
            DialogField::Duration => {
                self.duration_text.pop();
            }
            DialogField::Doctor => self.form.doctor_id.clear(),
            DialogField::Service => self.form.service.clear(),
            DialogField::Date => self.form.date = None,
            DialogField::Time => self.form.time.clear(),
        }
    }

    /// Move a selector one option forward or back. Text fields ignore it.
    pub fn cycle(&mut self, forward: bool, reference: &ReferenceData, today: NaiveDate) {
        if !self.focus.is_selector() {
            return;
        }
        match self.focus {
            DialogField::Doctor => {
                let ids: Vec<String> = reference.doctors.iter().map(|d| d.id.to_string()).collect();
                self.form.doctor_id = cycle_choice(&self.form.doctor_id, &ids, forward);
            }
            DialogField::Service => {
                self.form.service = cycle_choice(&self.form.service, &reference.services, forward);
            }
            DialogField::Time => {
                self.form.time = cycle_choice(&self.form.time, &reference.time_slots, forward);
            }
            DialogField::Date => self.form.date = Some(step_date(self.form.date, forward, today)),
            _ => {}
        }
    }

    /// Display text of the doctor selector: `"name - department"`, the raw
    /// id when it is not in the reference list, or empty.
    pub fn doctor_label(&self, reference: &ReferenceData) -> String {
        if self.form.doctor_id.is_empty() {
            return String::new();
        }
        reference
            .doctor(&DoctorId::new(self.form.doctor_id.clone()))
            .map(|d| d.label())
            .unwrap_or_else(|| self.form.doctor_id.clone())
    }

    /// The form as it will be submitted.
    pub fn to_form(&self) -> AppointmentForm {
        AppointmentForm {
            duration: self.duration_text.parse().ok(),
            ..self.form.clone()
        }
    }

    /// Date of the record being edited, if any.
    pub fn stored_date(&self) -> Option<NaiveDate> {
        self.editing.as_ref().map(|a| a.date)
    }

    pub fn error_for(&self, field: DialogField) -> Option<&str> {
        field.error_field().and_then(|f| self.errors.get(f))
    }
}

fn step(field: DialogField, offset: usize) -> DialogField {
    let all = DialogField::ALL;
    let index = all.iter().position(|f| *f == field).unwrap_or(0);
    all[(index + offset) % all.len()]
}

/// Next or previous entry of `options` after `current`, wrapping around.
/// An empty or unknown value starts at the first (or last) option.
fn cycle_choice(current: &str, options: &[String], forward: bool) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let n = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % n,
        Some(i) => (i + n - 1) % n,
        None if forward => 0,
        None => n - 1,
    };
    options[next].clone()
}

/// Move the date picker one selectable day forward or back.
///
/// Weekends are skipped and the picker never goes before `today`. An unset
/// picker opens on the first selectable day.
pub fn step_date(current: Option<NaiveDate>, forward: bool, today: NaiveDate) -> NaiveDate {
    let Some(date) = current else {
        return next_available_date(today, today);
    };

    if forward {
        return match date.succ_opt() {
            Some(next) => next_available_date(next, today),
            None => date,
        };
    }

    let mut candidate = date;
    while let Some(prev) = candidate.pred_opt() {
        if prev < today {
            break;
        }
        if !is_date_disabled(prev, today) {
            return prev;
        }
        candidate = prev;
    }
    date
}
