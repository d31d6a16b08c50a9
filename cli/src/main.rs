//! MediDesk: command-line console
//!
//! Lists and filters the hospital's collections and drives the appointment
//! desk (schedule, edit, cancel) against the reference hospital.
//!
//! Usage:
//!   cargo run -p medidesk-cli -- appointments --search smith --status scheduled
//!   cargo run -p medidesk-cli -- schedule --patient-name "Jane Doe" --doctor d1 \
//!       --service "General Checkup" --date 2026-10-20 --time "09:30 AM"
//!   cargo run -p medidesk-cli -- --data-dir ./data cancel APT001
//!
//! Without `--data-dir` (and with the default configuration) every run starts
//! from the seeded mock data and nothing is written to disk.

mod views;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use medidesk_config::{DeskConfig, StorageBackend};
use medidesk_contracts::{
    appointment::{Appointment, AppointmentStatus},
    billing::PaymentStatus,
    error::{DeskError, DeskResult},
    form::AppointmentForm,
    ids::{AppointmentId, PatientId},
    patient::PatientStatus,
    record::Record,
};
use medidesk_core::{
    filter::{
        AppointmentTab, BillFilter, CategoryFilter, DoctorFilter, ListFilter, PatientFilter,
        PrescriptionFilter,
    },
    schedule::{check_submission, next_available_date, today},
    AppointmentDesk, Hospital,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediDesk hospital administration console.
#[derive(Parser)]
#[command(
    name = "medidesk",
    about = "MediDesk hospital administration console",
    long_about = "Search and filter patients, doctors, appointments, bills, and records,\n\
                  and schedule, edit, or cancel appointments."
)]
struct Cli {
    /// TOML configuration file. Defaults to the built-in reference hospital.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Persist to JSON files in this directory (implies the json backend).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List appointments.
    Appointments {
        /// Matches patient or doctor name, case-insensitively.
        #[arg(long, default_value = "")]
        search: String,
        /// scheduled, completed, cancelled, no-show, or all.
        #[arg(long, default_value = "all")]
        status: CategoryFilter<AppointmentStatus>,
        /// upcoming, completed, or all.
        #[arg(long, default_value = "all")]
        tab: AppointmentTab,
    },
    /// List patients.
    Patients {
        /// Matches patient name or id.
        #[arg(long, default_value = "")]
        search: String,
        /// active, inactive, or all.
        #[arg(long, default_value = "all")]
        status: CategoryFilter<PatientStatus>,
    },
    /// List doctors.
    Doctors {
        /// Matches doctor name or specialization.
        #[arg(long, default_value = "")]
        search: String,
        /// A department name, or all.
        #[arg(long, default_value = "all")]
        department: CategoryFilter<String>,
    },
    /// List bills.
    Bills {
        /// Matches patient name or bill id.
        #[arg(long, default_value = "")]
        search: String,
        /// paid, pending, overdue, partial, or all.
        #[arg(long, default_value = "all")]
        status: CategoryFilter<PaymentStatus>,
    },
    /// List prescriptions.
    Records {
        /// Matches patient name, doctor name, or diagnosis.
        #[arg(long, default_value = "")]
        search: String,
        /// A patient id, or all.
        #[arg(long, default_value = "all")]
        patient: CategoryFilter<PatientId>,
    },
    /// Book a new appointment.
    Schedule(ScheduleArgs),
    /// Change fields of an existing appointment.
    Edit {
        id: AppointmentId,
        #[command(flatten)]
        changes: EditArgs,
    },
    /// Mark an appointment as cancelled.
    Cancel { id: AppointmentId },
    /// Set an appointment's status.
    SetStatus {
        id: AppointmentId,
        status: AppointmentStatus,
    },
    /// Dashboard counters.
    Stats {
        /// Day counted as "today's appointments" (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Doctors, services, and time slots offered by the appointment form.
    Slots,
}

/// Fields of the new-appointment form. Missing values are reported by form
/// validation, not by argument parsing.
#[derive(Args)]
struct ScheduleArgs {
    #[arg(long, default_value = "")]
    patient_name: String,
    #[arg(long)]
    patient_id: Option<PatientId>,
    /// Doctor id from the reference list (see `slots`).
    #[arg(long, default_value = "")]
    doctor: String,
    #[arg(long, default_value = "")]
    service: String,
    /// YYYY-MM-DD; weekends and past dates are refused.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// A slot label such as "09:30 AM".
    #[arg(long, default_value = "")]
    time: String,
    /// Minutes; 30 when omitted.
    #[arg(long)]
    duration: Option<u32>,
    #[arg(long)]
    notes: Option<String>,
}

impl ScheduleArgs {
    fn into_form(self) -> AppointmentForm {
        AppointmentForm {
            patient_name: self.patient_name,
            patient_id: self.patient_id,
            doctor_id: self.doctor,
            service: self.service,
            date: self.date,
            time: self.time,
            duration: self.duration,
            notes: self.notes,
        }
    }
}

/// Fields of the edit dialog. Omitted fields keep their stored value.
#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    patient_name: Option<String>,
    #[arg(long)]
    doctor: Option<String>,
    #[arg(long)]
    service: Option<String>,
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long)]
    time: Option<String>,
    #[arg(long)]
    duration: Option<u32>,
    #[arg(long)]
    notes: Option<String>,
}

impl EditArgs {
    fn apply(self, form: &mut AppointmentForm) {
        if let Some(name) = self.patient_name {
            form.patient_name = name;
        }
        if let Some(doctor) = self.doctor {
            form.doctor_id = doctor;
        }
        if let Some(service) = self.service {
            form.service = service;
        }
        if let Some(date) = self.date {
            form.date = Some(date);
        }
        if let Some(time) = self.time {
            form.time = time;
        }
        if let Some(duration) = self.duration {
            form.duration = Some(duration);
        }
        if let Some(notes) = self.notes {
            form.notes = Some(notes);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for repository and desk events.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("medidesk: {}", e);
        if let DeskError::Validation(errors) = &e {
            for (field, message) in errors.iter() {
                eprintln!("  {:<14} {}", field.label(), message);
            }
        }
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> DeskResult<DeskConfig> {
    let mut config = match &cli.config {
        Some(path) => DeskConfig::from_file(path)?,
        None => medidesk_ref_hospital::default_config()?,
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.backend = StorageBackend::Json;
        config.storage.data_dir = dir.clone();
    }
    info!(backend = ?config.storage.backend, "configuration resolved");
    Ok(config)
}

// ── Command dispatch ──────────────────────────────────────────────────────────

fn run(cli: Cli) -> DeskResult<()> {
    let config = load_config(&cli)?;
    let hospital = medidesk_ref_hospital::build_hospital(&config)?;

    match cli.command {
        Command::Appointments { search, status, tab } => {
            let filter = ListFilter::new(search, status);
            let total = hospital.desk.all()?.len();
            let shown = hospital.desk.list(&filter, tab)?;
            views::appointments(&shown, total, &filter, tab);
        }
        Command::Patients { search, status } => {
            let shown = hospital.patients(&PatientFilter::new(search, status))?;
            views::patients(&shown, hospital.patients.len()?);
        }
        Command::Doctors { search, department } => {
            let shown = hospital.doctors(&DoctorFilter::new(search, department))?;
            let all = hospital.doctors.all()?;
            views::doctors(&shown, &all);
        }
        Command::Bills { search, status } => {
            let shown = hospital.bills(&BillFilter::new(search, status))?;
            views::bills(&shown, hospital.bills.len()?);
        }
        Command::Records { search, patient } => {
            let shown = hospital.prescriptions(&PrescriptionFilter::new(search, patient))?;
            views::prescriptions(&shown, hospital.prescriptions.len()?);
        }
        Command::Schedule(args) => schedule(&hospital, args)?,
        Command::Edit { id, changes } => edit(&hospital, &id, changes)?,
        Command::Cancel { id } => {
            let appointment = hospital.desk.cancel(&id)?;
            println!("Appointment {} cancelled.", appointment.id);
        }
        Command::SetStatus { id, status } => {
            let appointment = hospital.desk.set_status(&id, status)?;
            println!("Appointment {} is now {}.", appointment.id, appointment.status);
        }
        Command::Stats { date } => {
            let day = date.unwrap_or_else(today);
            views::stats(&hospital.stats(day)?, day, &hospital.appointments_on(day)?);
        }
        Command::Slots => {
            let today = today();
            views::reference(hospital.desk.reference(), next_available_date(today, today));
        }
    }
    Ok(())
}

fn schedule(hospital: &Hospital, args: ScheduleArgs) -> DeskResult<()> {
    let form = args.into_form();
    check_submission(&form, None, today())?;
    let appointment = hospital.desk.schedule(&form)?;
    println!("Appointment scheduled successfully.");
    views::appointment_detail(&appointment);
    Ok(())
}

/// Stored dates may already lie in the past; only a newly picked date has to
/// be selectable.
fn edit(hospital: &Hospital, id: &AppointmentId, changes: EditArgs) -> DeskResult<()> {
    let existing = hospital.desk.get(id)?.ok_or_else(|| DeskError::NotFound {
        kind: Appointment::KIND,
        id: id.to_string(),
    })?;

    let mut form = AppointmentDesk::edit_form(&existing);
    changes.apply(&mut form);
    check_submission(&form, Some(existing.date), today())?;

    let appointment = hospital.desk.update(id, &form)?;
    println!("Appointment updated successfully.");
    views::appointment_detail(&appointment);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_filters_parse() {
        let cli = Cli::try_parse_from([
            "medidesk", "appointments", "--search", "smith", "--status", "Scheduled", "--tab", "upcoming",
        ])
        .unwrap();

        match cli.command {
            Command::Appointments { search, status, tab } => {
                assert_eq!(search, "smith");
                assert_eq!(status, CategoryFilter::Only(AppointmentStatus::Scheduled));
                assert_eq!(tab, AppointmentTab::Upcoming);
            }
            _ => panic!("expected the appointments command"),
        }
    }

    #[test]
    fn test_filters_default_to_all() {
        let cli = Cli::try_parse_from(["medidesk", "records"]).unwrap();
        match cli.command {
            Command::Records { search, patient } => {
                assert!(search.is_empty());
                assert_eq!(patient, CategoryFilter::All);
            }
            _ => panic!("expected the records command"),
        }
    }

    #[test]
    fn test_unknown_status_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["medidesk", "bills", "--status", "refunded"]).is_err());
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["medidesk", "cancel", "APT001", "--data-dir", "var"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("var")));
        match cli.command {
            Command::Cancel { id } => assert_eq!(id, AppointmentId::new("APT001")),
            _ => panic!("expected the cancel command"),
        }
    }

    /// Omitted edit flags keep the stored values.
    #[test]
    fn test_edit_args_only_touch_given_fields() {
        let mut form = AppointmentForm {
            patient_name: "John Smith".to_string(),
            patient_id: Some(PatientId::new("P001")),
            doctor_id: "d1".to_string(),
            service: "General Checkup".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19),
            time: "09:00 AM".to_string(),
            duration: Some(30),
            notes: Some(String::new()),
        };
        let cli = Cli::try_parse_from([
            "medidesk", "edit", "APT001", "--time", "02:00 PM", "--notes", "Bring ECG",
        ])
        .unwrap();

        let Command::Edit { changes, .. } = cli.command else {
            panic!("expected the edit command");
        };
        changes.apply(&mut form);

        assert_eq!(form.time, "02:00 PM");
        assert_eq!(form.notes.as_deref(), Some("Bring ECG"));
        assert_eq!(form.doctor_id, "d1");
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 10, 19));
    }

    #[test]
    fn test_schedule_args_build_form() {
        let cli = Cli::try_parse_from([
            "medidesk", "schedule", "--patient-name", "Jane Doe", "--doctor", "d2", "--service",
            "Vaccination", "--date", "2026-10-20", "--time", "09:30 AM",
        ])
        .unwrap();

        let Command::Schedule(args) = cli.command else {
            panic!("expected the schedule command");
        };
        let form = args.into_form();
        assert_eq!(form.patient_name, "Jane Doe");
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 10, 20));
        assert_eq!(form.duration, None);
        assert_eq!(form.patient_id, None);
    }

    #[test]
    fn test_schedule_reports_field_errors_before_the_date_rule() {
        let hospital = medidesk_ref_hospital::seeded_hospital().unwrap();
        // 2030-01-05 is a Saturday; every other field is left blank.
        let cli = Cli::try_parse_from(["medidesk", "schedule", "--date", "2030-01-05"]).unwrap();
        let Command::Schedule(args) = cli.command else {
            panic!("expected the schedule command");
        };

        match schedule(&hospital, args) {
            Err(DeskError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected Validation, got {:?}", other.err()),
        }
        assert_eq!(hospital.desk.all().unwrap().len(), 5);
    }

    #[test]
    fn test_edit_of_unknown_id_is_not_found() {
        let hospital = medidesk_ref_hospital::seeded_hospital().unwrap();
        let cli = Cli::try_parse_from(["medidesk", "edit", "APT999", "--time", "02:00 PM"]).unwrap();
        let Command::Edit { id, changes } = cli.command else {
            panic!("expected the edit command");
        };

        match edit(&hospital, &id, changes) {
            Err(DeskError::NotFound { kind, id }) => {
                assert_eq!(kind, Appointment::KIND);
                assert_eq!(id, "APT999");
            }
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }
}
