//! Dashboard counters.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use medidesk_contracts::{
    appointment::Appointment,
    billing::{Bill, PaymentStatus},
    doctor::{Doctor, DoctorStatus},
    patient::Patient,
};

/// The overview cards on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub active_doctors: usize,
    pub total_appointments: usize,
    /// Appointments whose date equals the requested day, any status.
    pub appointments_on_day: usize,
    /// Bills still pending, partial, or overdue.
    pub outstanding_bills: usize,
    /// Sum of the totals of paid bills.
    pub total_revenue: f64,
}

impl DashboardStats {
    pub fn collect(
        patients: &[Patient],
        doctors: &[Doctor],
        appointments: &[Appointment],
        bills: &[Bill],
        day: NaiveDate,
    ) -> Self {
        Self {
            total_patients: patients.len(),
            active_doctors: doctors
                .iter()
                .filter(|d| d.status == DoctorStatus::Active)
                .count(),
            total_appointments: appointments.len(),
            appointments_on_day: appointments.iter().filter(|a| a.date == day).count(),
            outstanding_bills: bills
                .iter()
                .filter(|b| b.payment_status != PaymentStatus::Paid)
                .count(),
            total_revenue: bills_total(
                bills.iter().filter(|b| b.payment_status == PaymentStatus::Paid),
            ),
        }
    }
}

/// Sum of `total` over `bills`, as shown under the billing list.
pub fn bills_total<'a>(bills: impl IntoIterator<Item = &'a Bill>) -> f64 {
    bills.into_iter().map(|b| b.total).sum()
}

/// Appointments on `day`, any status, earliest slot first.
pub fn appointments_on(appointments: &[Appointment], day: NaiveDate) -> Vec<Appointment> {
    let mut on_day: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.date == day)
        .cloned()
        .collect();
    on_day.sort_by_key(|a| slot_minutes(&a.time));
    on_day
}

/// Minutes since midnight for a slot label such as "01:30 PM". Unparseable
/// labels sort last.
fn slot_minutes(label: &str) -> u32 {
    NaiveTime::parse_from_str(label.trim(), "%I:%M %p")
        .map(|t| t.hour() * 60 + t.minute())
        .unwrap_or(u32::MAX)
}
