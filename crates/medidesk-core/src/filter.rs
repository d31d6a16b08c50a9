//! Search-and-filter for list views.
//!
//! Every list screen narrows its collection with the same predicate: a
//! case-insensitive substring match over a few name-like fields, AND an
//! equality match on one category field (status, department, patient). The
//! category filter has an `all` sentinel that accepts every value.

use std::{collections::BTreeSet, fmt, str::FromStr};

use medidesk_contracts::{
    appointment::{Appointment, AppointmentStatus},
    billing::{Bill, PaymentStatus},
    doctor::Doctor,
    error::DeskError,
    ids::PatientId,
    patient::{Patient, PatientStatus},
    prescription::Prescription,
};

/// The sentinel a filter dropdown uses for "no restriction".
pub const ALL: &str = "all";

/// A record that list views can search and filter.
pub trait Searchable {
    /// The field compared by the category filter.
    type Category: PartialEq;

    /// Fields the free-text search looks into.
    fn search_fields(&self) -> Vec<&str>;

    fn category(&self) -> &Self::Category;
}

/// Either the `all` sentinel or one required category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn accepts(&self, value: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == value,
        }
    }
}

impl<C: FromStr> FromStr for CategoryFilter<C> {
    type Err = C::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl<C: fmt::Display> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(value) => value.fmt(f),
        }
    }
}

/// The search term plus category filter behind one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter<C> {
    pub search: String,
    pub category: CategoryFilter<C>,
}

impl<C> Default for ListFilter<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: PartialEq> ListFilter<C> {
    pub fn new(search: impl Into<String>, category: CategoryFilter<C>) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// True when `item` passes both the text match and the category match.
    pub fn matches<T: Searchable<Category = C>>(&self, item: &T) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = item
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle));
        text_match && self.category.accepts(item.category())
    }

    /// Borrowing filter over a slice, preserving order.
    pub fn apply<'a, T: Searchable<Category = C>>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Owning filter, preserving order.
    pub fn retain<T: Searchable<Category = C>>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }

    /// Back to an empty search and the `all` sentinel.
    pub fn reset(&mut self) {
        self.search.clear();
        self.category = CategoryFilter::All;
    }
}

pub type AppointmentFilter = ListFilter<AppointmentStatus>;
pub type PatientFilter = ListFilter<PatientStatus>;
pub type DoctorFilter = ListFilter<String>;
pub type BillFilter = ListFilter<PaymentStatus>;
pub type PrescriptionFilter = ListFilter<PatientId>;

// ── Searchable impls ─────────────────────────────────────────────────────────

impl Searchable for Appointment {
    type Category = AppointmentStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.patient_name.as_str(), self.doctor_name.as_str()]
    }

    fn category(&self) -> &AppointmentStatus {
        &self.status
    }
}

impl Searchable for Patient {
    type Category = PatientStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.id.as_str()]
    }

    fn category(&self) -> &PatientStatus {
        &self.status
    }
}

impl Searchable for Doctor {
    type Category = String;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.specialization.as_str()]
    }

    fn category(&self) -> &String {
        &self.department
    }
}

impl Searchable for Bill {
    type Category = PaymentStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.patient_name.as_str(), self.id.as_str()]
    }

    fn category(&self) -> &PaymentStatus {
        &self.payment_status
    }
}

impl Searchable for Prescription {
    type Category = PatientId;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.patient_name.as_str(),
            self.doctor_name.as_str(),
            self.diagnosis.as_str(),
        ]
    }

    fn category(&self) -> &PatientId {
        &self.patient_id
    }
}

// ── Result presentation ──────────────────────────────────────────────────────

/// What a list view shows after filtering.
///
/// An empty collection and a filter that matched nothing are different
/// screens, even though both render zero rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The collection itself is empty.
    Empty,
    /// The collection has records but none passed the filter.
    NoMatches,
    Showing { shown: usize, total: usize },
}

impl ListOutcome {
    pub fn of(total: usize, shown: usize) -> Self {
        match (total, shown) {
            (0, _) => ListOutcome::Empty,
            (_, 0) => ListOutcome::NoMatches,
            (total, shown) => ListOutcome::Showing { shown, total },
        }
    }

    /// Display text for a collection named `noun` (plural, lowercase).
    pub fn message(&self, noun: &str) -> String {
        match self {
            ListOutcome::Empty => format!("No {noun}"),
            ListOutcome::NoMatches => format!("No {noun} match your search"),
            ListOutcome::Showing { shown, total } => format!("Showing {shown} of {total} {noun}"),
        }
    }
}

/// The three tabs of the appointments view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentTab {
    #[default]
    Upcoming,
    Completed,
    All,
}

impl AppointmentTab {
    pub const ALL: [AppointmentTab; 3] =
        [AppointmentTab::Upcoming, AppointmentTab::Completed, AppointmentTab::All];

    pub fn title(self) -> &'static str {
        match self {
            AppointmentTab::Upcoming => "Upcoming",
            AppointmentTab::Completed => "Completed",
            AppointmentTab::All => "All",
        }
    }

    /// Tabs are applied on top of the search/status filter.
    pub fn includes(self, appointment: &Appointment) -> bool {
        match self {
            AppointmentTab::Upcoming => appointment.status == AppointmentStatus::Scheduled,
            AppointmentTab::Completed => appointment.status == AppointmentStatus::Completed,
            AppointmentTab::All => true,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            AppointmentTab::Upcoming => "No upcoming appointments",
            AppointmentTab::Completed => "No completed appointments",
            AppointmentTab::All => "No appointments found",
        }
    }
}

impl FromStr for AppointmentTab {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.title().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DeskError::InvalidValue {
                field: "appointment tab",
                value: s.to_string(),
            })
    }
}

/// Sorted, de-duplicated departments, used as the doctors view's filter
/// options.
pub fn departments(doctors: &[Doctor]) -> Vec<String> {
    doctors
        .iter()
        .map(|d| d.department.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
