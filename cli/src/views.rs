//! Plain-text renderings of the console's list views.

use chrono::NaiveDate;

use medidesk_contracts::{
    appointment::Appointment, billing::Bill, doctor::Doctor, patient::Patient,
    prescription::Prescription,
};
use medidesk_core::{
    filter::{departments, AppointmentFilter, AppointmentTab, CategoryFilter, ListOutcome},
    reference::ReferenceData,
    stats::{bills_total, DashboardStats},
};

/// Footer line, or the empty-state text when nothing is shown.
fn footer(total: usize, shown: usize, noun: &str) {
    println!();
    println!("{}", ListOutcome::of(total, shown).message(noun));
}

// ── Appointments ──────────────────────────────────────────────────────────────

pub fn appointments(
    shown: &[Appointment],
    total: usize,
    filter: &AppointmentFilter,
    tab: AppointmentTab,
) {
    println!("Appointments ({})", tab.title());
    println!();

    let unfiltered = filter.search.is_empty() && filter.category == CategoryFilter::All;
    if shown.is_empty() && total > 0 && unfiltered {
        println!("{}", tab.empty_message());
        return;
    }

    if !shown.is_empty() {
        println!(
            "  {:<38} {:<18} {:<20} {:<10} {:<8} {:<24} {}",
            "ID", "PATIENT", "DOCTOR", "DATE", "TIME", "SERVICE", "STATUS"
        );
    }
    for a in shown {
        println!(
            "  {:<38} {:<18} {:<20} {:<10} {:<8} {:<24} {}",
            a.id,
            a.patient_name,
            a.doctor_name,
            a.date.to_string(),
            a.time,
            a.service,
            a.status
        );
    }
    footer(total, shown.len(), "appointments");
}

pub fn appointment_detail(a: &Appointment) {
    println!("  ID:        {}", a.id);
    println!("  Patient:   {} ({})", a.patient_name, display_or_dash(a.patient_id.as_str()));
    println!("  Doctor:    {}", a.doctor_name);
    println!("  Service:   {}", a.service);
    println!("  When:      {} {} ({} min)", a.date, a.time, a.duration);
    println!("  Status:    {}", a.status);
    if !a.notes.is_empty() {
        println!("  Notes:     {}", a.notes);
    }
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

// ── Other collections ─────────────────────────────────────────────────────────

pub fn patients(shown: &[Patient], total: usize) {
    println!("Patients");
    println!();
    if !shown.is_empty() {
        println!("  {:<6} {:<18} {:<8} {:<6} {:<10} {}", "ID", "NAME", "GENDER", "BLOOD", "PHONE", "STATUS");
    }
    for p in shown {
        let gender = format!("{:?}", p.gender).to_lowercase();
        println!(
            "  {:<6} {:<18} {:<8} {:<6} {:<10} {}",
            p.id, p.name, gender, p.blood_type, p.phone, p.status
        );
    }
    footer(total, shown.len(), "patients");
}

pub fn doctors(shown: &[Doctor], all: &[Doctor]) {
    println!("Doctors");
    println!("Departments: {}", departments(all).join(", "));
    println!();
    if !shown.is_empty() {
        println!(
            "  {:<4} {:<20} {:<12} {:<26} {:<5} {}",
            "ID", "NAME", "DEPARTMENT", "SPECIALIZATION", "YRS", "STATUS"
        );
    }
    for d in shown {
        println!(
            "  {:<4} {:<20} {:<12} {:<26} {:<5} {}",
            d.id, d.name, d.department, d.specialization, d.experience, d.status
        );
    }
    footer(all.len(), shown.len(), "doctors");
}

pub fn bills(shown: &[Bill], total: usize) {
    println!("Billing");
    println!();
    if !shown.is_empty() {
        println!("  {:<10} {:<18} {:<10} {:>10} {}", "ID", "PATIENT", "DATE", "TOTAL", "STATUS");
    }
    for b in shown {
        println!(
            "  {:<10} {:<18} {:<10} {:>10.2} {}",
            b.id,
            b.patient_name,
            b.date.to_string(),
            b.total,
            b.payment_status
        );
    }
    if let Some(line) = total_line(shown) {
        println!("  {}", line);
    }
    footer(total, shown.len(), "bills");
}

/// Running total of the listed bills, omitted when nothing is listed.
fn total_line(shown: &[Bill]) -> Option<String> {
    if shown.is_empty() {
        return None;
    }
    Some(format!("{:<40} {:>10.2}", "Total:", bills_total(shown)))
}

pub fn prescriptions(shown: &[Prescription], total: usize) {
    println!("Medical Records");
    println!();
    for rx in shown {
        println!("  {}  {}  {} / {}", rx.id, rx.date, rx.patient_name, rx.doctor_name);
        println!("      Diagnosis: {}", rx.diagnosis);
        for m in &rx.medications {
            println!("      - {} {}, {} for {}", m.name, m.dosage, m.frequency, m.duration);
        }
        if let Some(follow_up) = &rx.follow_up {
            println!("      Follow-up {}: {}", follow_up.date, follow_up.notes);
        }
    }
    footer(total, shown.len(), "prescriptions");
}

// ── Dashboard and reference lists ─────────────────────────────────────────────

pub fn stats(stats: &DashboardStats, day: NaiveDate, on_day: &[Appointment]) {
    println!("Dashboard");
    println!();
    println!("  Total patients:        {}", stats.total_patients);
    println!("  Active doctors:        {}", stats.active_doctors);
    println!("  Total appointments:    {}", stats.total_appointments);
    println!("  Appointments on {}: {}", day, stats.appointments_on_day);
    println!("  Outstanding bills:     {}", stats.outstanding_bills);
    println!("  Revenue:               {:.2}", stats.total_revenue);
    println!();
    println!("Appointments on {}", day);
    if on_day.is_empty() {
        println!("  No appointments scheduled for this day.");
    }
    for a in on_day {
        println!(
            "  {:<8} {:<18} {:<20} {:<24} {}",
            a.time, a.patient_name, a.doctor_name, a.service, a.status
        );
    }
}

pub fn reference(reference: &ReferenceData, next_open: NaiveDate) {
    println!("Doctors:");
    for d in &reference.doctors {
        println!("  {:<4} {}", d.id, d.label());
    }
    println!();
    println!("Services:");
    for s in &reference.services {
        println!("  {}", s);
    }
    println!();
    println!("Time slots:");
    for chunk in reference.time_slots.chunks(6) {
        println!("  {}", chunk.join("  "));
    }
    println!();
    println!("Next available date: {}", next_open);
}

#[cfg(test)]
mod tests {
    use medidesk_contracts::billing::PaymentStatus;
    use medidesk_core::filter::BillFilter;
    use medidesk_ref_hospital::seeded_hospital;

    use super::*;

    #[test]
    fn test_total_line_sums_listed_bills() {
        let hospital = seeded_hospital().unwrap();
        let filter = BillFilter::new("", CategoryFilter::Only(PaymentStatus::Pending));
        let pending = hospital.bills(&filter).unwrap();

        let line = total_line(&pending).unwrap();
        assert!(line.starts_with("Total:"));
        assert!(line.ends_with("137.00"), "{line}");
    }

    #[test]
    fn test_total_line_absent_without_bills() {
        assert_eq!(total_line(&[]), None);
    }
}
