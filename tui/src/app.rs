//! Console state and key handling.
//!
//! Nothing in this module touches the terminal, so every interaction can be
//! driven from tests with synthetic key events.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use medidesk_contracts::{
    appointment::{Appointment, AppointmentStatus},
    billing::{Bill, PaymentStatus},
    doctor::Doctor,
    error::{DeskError, DeskResult},
    ids::PatientId,
    patient::{Patient, PatientStatus},
    prescription::Prescription,
};
use medidesk_core::{
    filter::{
        departments, AppointmentFilter, AppointmentTab, BillFilter, CategoryFilter, DoctorFilter,
        ListFilter, PatientFilter, PrescriptionFilter,
    },
    schedule::check_submission,
    stats::DashboardStats,
    Hospital,
};

use crate::dialog::AppointmentDialog;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

// ── Views ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Appointments,
    Patients,
    Doctors,
    Billing,
    Records,
    Dashboard,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Appointments,
        View::Patients,
        View::Doctors,
        View::Billing,
        View::Records,
        View::Dashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Appointments => "Appointments",
            View::Patients => "Patients",
            View::Doctors => "Doctors",
            View::Billing => "Billing",
            View::Records => "Records",
            View::Dashboard => "Dashboard",
        }
    }

    /// Plural noun used in footer and empty-state text.
    pub fn noun(self) -> &'static str {
        match self {
            View::Appointments => "appointments",
            View::Patients => "patients",
            View::Doctors => "doctors",
            View::Billing => "bills",
            View::Records => "prescriptions",
            View::Dashboard => "appointments today",
        }
    }

    /// Views with a search box and a category filter.
    pub fn filterable(self) -> bool {
        self != View::Dashboard
    }

    fn offset(self, by: usize) -> View {
        let index = View::ALL.iter().position(|v| *v == self).unwrap_or(0);
        View::ALL[(index + by) % View::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Search,
    Dialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

/// One filtered list, with the size of the collection it came from.
pub struct Listing<T> {
    pub rows: Vec<T>,
    pub total: usize,
}

// ── App state ─────────────────────────────────────────────────────────────────

pub struct App {
    pub hospital: Hospital,
    /// Calendar date the date picker treats as today.
    pub today: NaiveDate,

    pub view: View,
    pub mode: Mode,
    pub tab: AppointmentTab,
    /// Row cursor in the current view.
    pub cursor: usize,

    pub appointment_filter: AppointmentFilter,
    pub patient_filter: PatientFilter,
    pub doctor_filter: DoctorFilter,
    pub bill_filter: BillFilter,
    pub record_filter: PrescriptionFilter,

    pub dialog: Option<AppointmentDialog>,
    pub toast: Option<Toast>,
    pub quit: bool,
}

impl App {
    pub fn new(hospital: Hospital, today: NaiveDate) -> Self {
        Self {
            hospital,
            today,
            view: View::Appointments,
            mode: Mode::Browse,
            tab: AppointmentTab::default(),
            cursor: 0,
            appointment_filter: ListFilter::default(),
            patient_filter: ListFilter::default(),
            doctor_filter: ListFilter::default(),
            bill_filter: ListFilter::default(),
            record_filter: ListFilter::default(),
            dialog: None,
            toast: None,
            quit: false,
        }
    }

    // ── Listings ──────────────────────────────────────────────────────────────

    pub fn appointments(&self) -> DeskResult<Listing<Appointment>> {
        Ok(Listing {
            rows: self.hospital.desk.list(&self.appointment_filter, self.tab)?,
            total: self.hospital.desk.all()?.len(),
        })
    }

    pub fn patients(&self) -> DeskResult<Listing<Patient>> {
        Ok(Listing {
            rows: self.hospital.patients(&self.patient_filter)?,
            total: self.hospital.patients.len()?,
        })
    }

    pub fn doctors(&self) -> DeskResult<Listing<Doctor>> {
        Ok(Listing {
            rows: self.hospital.doctors(&self.doctor_filter)?,
            total: self.hospital.doctors.len()?,
        })
    }

    pub fn bills(&self) -> DeskResult<Listing<Bill>> {
        Ok(Listing {
            rows: self.hospital.bills(&self.bill_filter)?,
            total: self.hospital.bills.len()?,
        })
    }

    pub fn prescriptions(&self) -> DeskResult<Listing<Prescription>> {
        Ok(Listing {
            rows: self.hospital.prescriptions(&self.record_filter)?,
            total: self.hospital.prescriptions.len()?,
        })
    }

    fn row_count(&self) -> DeskResult<usize> {
        Ok(match self.view {
            View::Appointments => self.appointments()?.rows.len(),
            View::Patients => self.patients()?.rows.len(),
            View::Doctors => self.doctors()?.rows.len(),
            View::Billing => self.bills()?.rows.len(),
            View::Records => self.prescriptions()?.rows.len(),
            View::Dashboard => self.todays_appointments()?.len(),
        })
    }

    pub fn todays_appointments(&self) -> DeskResult<Vec<Appointment>> {
        self.hospital.appointments_on(self.today)
    }

    pub fn stats(&self) -> DeskResult<DashboardStats> {
        self.hospital.stats(self.today)
    }

    /// The appointment under the cursor, if the appointments view is showing.
    pub fn selected_appointment(&self) -> DeskResult<Option<Appointment>> {
        if self.view != View::Appointments {
            return Ok(None);
        }
        Ok(self.appointments()?.rows.into_iter().nth(self.cursor))
    }

    /// Search text of the current view.
    pub fn search(&self) -> &str {
        match self.view {
            View::Appointments => &self.appointment_filter.search,
            View::Patients => &self.patient_filter.search,
            View::Doctors => &self.doctor_filter.search,
            View::Billing => &self.bill_filter.search,
            View::Records => &self.record_filter.search,
            View::Dashboard => "",
        }
    }

    fn search_mut(&mut self) -> Option<&mut String> {
        match self.view {
            View::Appointments => Some(&mut self.appointment_filter.search),
            View::Patients => Some(&mut self.patient_filter.search),
            View::Doctors => Some(&mut self.doctor_filter.search),
            View::Billing => Some(&mut self.bill_filter.search),
            View::Records => Some(&mut self.record_filter.search),
            View::Dashboard => None,
        }
    }

    /// Category filter of the current view, as display text.
    pub fn category_label(&self) -> String {
        match self.view {
            View::Appointments => self.appointment_filter.category.to_string(),
            View::Patients => self.patient_filter.category.to_string(),
            View::Doctors => self.doctor_filter.category.to_string(),
            View::Billing => self.bill_filter.category.to_string(),
            View::Records => self.record_filter.category.to_string(),
            View::Dashboard => String::new(),
        }
    }

    // ── Toasts ────────────────────────────────────────────────────────────────

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible for `TOAST_TTL`.
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.shown_at.elapsed() >= TOAST_TTL) {
            self.toast = None;
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Dialog => self.handle_dialog_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,

            KeyCode::Right => self.switch_view(self.view.offset(1)),
            KeyCode::Left => self.switch_view(self.view.offset(View::ALL.len() - 1)),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.switch_view(View::ALL[index]);
            }

            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),

            KeyCode::Char('/') if self.view.filterable() => self.mode = Mode::Search,
            KeyCode::Char('f') if self.view.filterable() => {
                self.cycle_filter();
                self.cursor = 0;
            }
            KeyCode::Tab if self.view == View::Appointments => {
                let tabs = AppointmentTab::ALL;
                let index = tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
                self.tab = tabs[(index + 1) % tabs.len()];
                self.cursor = 0;
            }

            KeyCode::Char('n') if self.view == View::Appointments => {
                self.dialog = Some(AppointmentDialog::new_appointment());
                self.mode = Mode::Dialog;
            }
            KeyCode::Char('e') if self.view == View::Appointments => self.open_edit(),
            KeyCode::Char('x') if self.view == View::Appointments => self.cancel_selected(),

            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                if let Some(search) = self.search_mut() {
                    search.clear();
                }
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                if let Some(search) = self.search_mut() {
                    search.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(search) = self.search_mut() {
                    search.push(c);
                }
            }
            _ => {}
        }
        self.cursor = 0;
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let today = self.today;
        let Some(dialog) = self.dialog.as_mut() else {
            self.mode = Mode::Browse;
            return;
        };

        match key.code {
            KeyCode::Esc => self.close_dialog(),
            KeyCode::Enter => self.submit_dialog(),
            KeyCode::Tab | KeyCode::Down => dialog.focus_next(),
            KeyCode::BackTab | KeyCode::Up => dialog.focus_prev(),
            KeyCode::Right => dialog.cycle(true, self.hospital.desk.reference(), today),
            KeyCode::Left => dialog.cycle(false, self.hospital.desk.reference(), today),
            KeyCode::Backspace => dialog.backspace(),
            KeyCode::Char(c) => dialog.type_char(c),
            _ => {}
        }
    }

    // ── Actions ───────────────────────────────────────────────────────────────

    fn switch_view(&mut self, view: View) {
        self.view = view;
        self.cursor = 0;
    }

    /// Pull the cursor back onto the last row after the listing shrank.
    fn clamp_cursor(&mut self) {
        let rows = self.row_count().unwrap_or(0);
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    fn move_cursor(&mut self, down: bool) {
        let rows = self.row_count().unwrap_or(0);
        if rows == 0 {
            self.cursor = 0;
        } else if down {
            self.cursor = (self.cursor + 1).min(rows - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    /// Advance the current view's category filter: `all`, then each value
    /// in turn, then back to `all`.
    fn cycle_filter(&mut self) {
        match self.view {
            View::Appointments => {
                let next = next_category(&self.appointment_filter.category, &AppointmentStatus::ALL);
                self.appointment_filter.category = next;
            }
            View::Patients => {
                let next = next_category(&self.patient_filter.category, &PatientStatus::ALL);
                self.patient_filter.category = next;
            }
            View::Doctors => {
                let options = self.hospital.doctors.all().map(|d| departments(&d));
                match options {
                    Ok(options) => {
                        self.doctor_filter.category =
                            next_category(&self.doctor_filter.category, &options)
                    }
                    Err(e) => self.notify(ToastKind::Error, e.to_string()),
                }
            }
            View::Billing => {
                let next = next_category(&self.bill_filter.category, &PaymentStatus::ALL);
                self.bill_filter.category = next;
            }
            View::Records => {
                let options: DeskResult<Vec<PatientId>> = self
                    .hospital
                    .patients
                    .all()
                    .map(|patients| patients.into_iter().map(|p| p.id).collect());
                match options {
                    Ok(options) => {
                        self.record_filter.category =
                            next_category(&self.record_filter.category, &options)
                    }
                    Err(e) => self.notify(ToastKind::Error, e.to_string()),
                }
            }
            View::Dashboard => {}
        }
    }

    fn open_edit(&mut self) {
        match self.selected_appointment() {
            Ok(Some(appointment)) => {
                self.dialog = Some(AppointmentDialog::edit(&appointment));
                self.mode = Mode::Dialog;
            }
            Ok(None) => self.notify(ToastKind::Error, "No appointment selected"),
            Err(e) => self.notify(ToastKind::Error, e.to_string()),
        }
    }

    fn cancel_selected(&mut self) {
        let result = self.selected_appointment().and_then(|selected| match selected {
            Some(a) => self.hospital.desk.cancel(&a.id).map(Some),
            None => Ok(None),
        });
        match result {
            Ok(Some(a)) => self.notify(
                ToastKind::Success,
                format!("Appointment for {} cancelled", a.patient_name),
            ),
            Ok(None) => self.notify(ToastKind::Error, "No appointment selected"),
            Err(e) => self.notify(ToastKind::Error, e.to_string()),
        }
        self.clamp_cursor();
    }

    fn close_dialog(&mut self) {
        self.dialog = None;
        self.mode = Mode::Browse;
        self.clamp_cursor();
    }

    /// Validate and save the dialog. A rejected form stays open with its
    /// inline messages; a saved one closes with a success toast.
    fn submit_dialog(&mut self) {
        let Some(dialog) = self.dialog.as_ref() else {
            return;
        };
        let form = dialog.to_form();
        let editing = dialog.editing.as_ref().map(|a| a.id.clone());

        let result = check_submission(&form, dialog.stored_date(), self.today).and_then(|()| {
            match &editing {
                Some(id) => self.hospital.desk.update(id, &form),
                None => self.hospital.desk.schedule(&form),
            }
        });

        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match result {
            Ok(appointment) => {
                let verb = if editing.is_some() { "updated" } else { "scheduled" };
                self.close_dialog();
                self.notify(
                    ToastKind::Success,
                    format!(
                        "Appointment {} for {} on {} at {}",
                        verb, appointment.patient_name, appointment.date, appointment.time
                    ),
                );
            }
            Err(DeskError::Validation(errors)) => {
                dialog.errors = errors;
                self.notify(ToastKind::Error, "Please correct the highlighted fields");
            }
            Err(e) => {
                dialog.errors = Default::default();
                self.notify(ToastKind::Error, e.to_string());
            }
        }
    }
}

/// `all` → first option → ... → last option → `all`.
fn next_category<C: Clone + PartialEq>(current: &CategoryFilter<C>, options: &[C]) -> CategoryFilter<C> {
    let next_index = match current {
        CategoryFilter::All => 0,
        CategoryFilter::Only(value) => match options.iter().position(|o| o == value) {
            Some(i) => i + 1,
            None => options.len(),
        },
    };
    match options.get(next_index) {
        Some(value) => CategoryFilter::Only(value.clone()),
        None => CategoryFilter::All,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use medidesk_contracts::{form::FormField, ids::AppointmentId};
    use medidesk_ref_hospital::seeded_hospital;

    use super::*;
    use crate::dialog::DialogField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Sunday 2026-10-18.
    fn app() -> App {
        App::new(seeded_hospital().unwrap(), NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    #[test]
    fn test_search_narrows_appointments() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, AppointmentTab::All);

        app.handle_key(key(KeyCode::Char('/')));
        type_text(&mut app, "smith");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Browse);

        // John Smith, Jane Smith, and Ahmed Khan (seen by Dr. John Smith).
        assert_eq!(app.appointments().unwrap().rows.len(), 3);

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(
            app.appointment_filter.category,
            CategoryFilter::Only(AppointmentStatus::Scheduled)
        );
        let rows = app.appointments().unwrap().rows;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].patient_name, "John Smith");
    }

    #[test]
    fn test_escape_clears_search() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('/')));
        type_text(&mut app, "zzz");
        assert_eq!(app.search(), "zzz");
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.search(), "");
    }

    #[test]
    fn test_filter_cycles_back_to_all() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.view, View::Patients);

        app.handle_key(key(KeyCode::Char('f')));
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.patient_filter.category, CategoryFilter::Only(PatientStatus::Inactive));
        assert_eq!(app.patients().unwrap().rows.len(), 1);

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.patient_filter.category, CategoryFilter::All);
    }

    #[test]
    fn test_doctor_filter_uses_departments() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('3')));
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.category_label(), "Cardiology");
        assert_eq!(app.doctors().unwrap().rows.len(), 1);
    }

    #[test]
    fn test_empty_new_form_shows_every_error_and_stays_open() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.mode, Mode::Dialog);

        app.handle_key(key(KeyCode::Enter));

        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.errors.len(), 5);
        assert_eq!(dialog.errors.get(FormField::Date), Some("Please select a date"));
        assert_eq!(app.hospital.desk.all().unwrap().len(), 5);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_new_appointment_through_dialog() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')));
        type_text(&mut app, "Jane Doe");

        // Doctor, service, date, time: first option of each.
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.dialog.as_ref().unwrap().focus, DialogField::Time);
        app.handle_key(key(KeyCode::Enter));

        assert!(app.dialog.is_none());
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);

        let created = app.hospital.desk.all().unwrap().pop().unwrap();
        assert_eq!(created.patient_name, "Jane Doe");
        assert_eq!(created.doctor_name, "Dr. John Smith");
        assert_eq!(created.service, "General Checkup");
        assert_eq!(created.date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(created.time, "09:00 AM");
        assert_eq!(created.duration, 30);
        assert_eq!(created.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_edit_keeps_past_date_and_status() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, AppointmentTab::Completed);

        // APT002 is completed and dated before today.
        app.handle_key(key(KeyCode::Char('e')));
        let dialog = app.dialog.as_mut().unwrap();
        assert_eq!(dialog.editing.as_ref().unwrap().id, AppointmentId::new("APT002"));
        dialog.focus = DialogField::Notes;
        type_text(&mut app, " again");
        app.handle_key(key(KeyCode::Enter));

        assert!(app.dialog.is_none(), "unchanged past date must not block the edit");
        let stored = app.hospital.desk.get(&AppointmentId::new("APT002")).unwrap().unwrap();
        assert_eq!(stored.notes, "Review migraine diary again");
        assert_eq!(stored.status, AppointmentStatus::Completed);
        assert_eq!(stored.duration, 45);
    }

    #[test]
    fn test_cancel_selected_appointment() {
        let mut app = app();
        // Upcoming tab: APT001 then APT003.
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('x')));

        let stored = app.hospital.desk.get(&AppointmentId::new("APT003")).unwrap().unwrap();
        assert_eq!(stored.status, AppointmentStatus::Cancelled);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
        assert_eq!(app.appointments().unwrap().rows.len(), 1);
    }

    #[test]
    fn test_cursor_follows_a_cancelled_last_row() {
        let mut app = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected_appointment().unwrap().unwrap().id, AppointmentId::new("APT001"));

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
        assert!(app.appointments().unwrap().rows.is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_weekend_date_does_not_hide_field_errors() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')));
        // Saturday.
        app.dialog.as_mut().unwrap().form.date = NaiveDate::from_ymd_opt(2026, 10, 24);
        app.handle_key(key(KeyCode::Enter));

        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.errors.len(), 4);
        assert_eq!(dialog.errors.get(FormField::PatientName), Some("Patient name is required"));
        assert_eq!(dialog.errors.get(FormField::Date), None);
    }

    #[test]
    fn test_complete_form_on_weekend_stays_open() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('n')));
        type_text(&mut app, "Jane Doe");
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Right));
        }
        app.dialog.as_mut().unwrap().form.date = NaiveDate::from_ymd_opt(2026, 10, 24);
        app.handle_key(key(KeyCode::Enter));

        let dialog = app.dialog.as_ref().unwrap();
        assert!(dialog.errors.is_empty());
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
        assert_eq!(app.hospital.desk.all().unwrap().len(), 5);
    }

    #[test]
    fn test_dashboard_lists_todays_appointments() {
        let mut app = App::new(
            seeded_hospital().unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        );
        app.handle_key(key(KeyCode::Char('6')));
        assert_eq!(app.view, View::Dashboard);

        let today = app.todays_appointments().unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].patient_name, "John Smith");
        assert_eq!(app.stats().unwrap().appointments_on_day, 1);

        // No search box on the dashboard.
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Browse);
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.cursor, 1);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.view, View::Patients);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.quit);
    }

    #[test]
    fn test_next_category_sequence() {
        let options = ["a".to_string(), "b".to_string()];
        let first = next_category(&CategoryFilter::All, &options);
        assert_eq!(first, CategoryFilter::Only("a".to_string()));
        let second = next_category(&first, &options);
        assert_eq!(second, CategoryFilter::Only("b".to_string()));
        assert_eq!(next_category(&second, &options), CategoryFilter::All);
    }
}
