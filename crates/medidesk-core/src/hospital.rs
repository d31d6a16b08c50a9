//! The whole console's data behind one handle.

use chrono::NaiveDate;

use medidesk_contracts::{
    appointment::Appointment, billing::Bill, doctor::Doctor, error::DeskResult, patient::Patient,
    prescription::Prescription,
};

use crate::{
    desk::AppointmentDesk,
    filter::{BillFilter, DoctorFilter, PatientFilter, PrescriptionFilter},
    stats::{appointments_on, DashboardStats},
    traits::Repository,
};

/// Repositories for every entity, plus the appointment desk.
///
/// Front ends build one `Hospital` at startup and route every screen
/// through it. Only appointments have a mutation handler; the other
/// collections are read by their list views.
pub struct Hospital {
    pub desk: AppointmentDesk,
    pub patients: Box<dyn Repository<Patient>>,
    pub doctors: Box<dyn Repository<Doctor>>,
    pub bills: Box<dyn Repository<Bill>>,
    pub prescriptions: Box<dyn Repository<Prescription>>,
}

impl Hospital {
    pub fn patients(&self, filter: &PatientFilter) -> DeskResult<Vec<Patient>> {
        Ok(filter.retain(self.patients.all()?))
    }

    pub fn doctors(&self, filter: &DoctorFilter) -> DeskResult<Vec<Doctor>> {
        Ok(filter.retain(self.doctors.all()?))
    }

    pub fn bills(&self, filter: &BillFilter) -> DeskResult<Vec<Bill>> {
        Ok(filter.retain(self.bills.all()?))
    }

    pub fn prescriptions(&self, filter: &PrescriptionFilter) -> DeskResult<Vec<Prescription>> {
        Ok(filter.retain(self.prescriptions.all()?))
    }

    pub fn stats(&self, day: NaiveDate) -> DeskResult<DashboardStats> {
        Ok(DashboardStats::collect(
            &self.patients.all()?,
            &self.doctors.all()?,
            &self.desk.all()?,
            &self.bills.all()?,
            day,
        ))
    }

    /// The dashboard's appointment list for `day`.
    pub fn appointments_on(&self, day: NaiveDate) -> DeskResult<Vec<Appointment>> {
        Ok(appointments_on(&self.desk.all()?, day))
    }
}
