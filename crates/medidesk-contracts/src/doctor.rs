//! Doctor records and the availability window.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{error::DeskError, ids::DoctorId, patient::Gender, record::Record};

/// Employment status of a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoctorStatus {
    Active,
    Inactive,
    OnLeave,
}

impl DoctorStatus {
    pub const ALL: [DoctorStatus; 3] =
        [DoctorStatus::Active, DoctorStatus::Inactive, DoctorStatus::OnLeave];

    pub fn as_str(self) -> &'static str {
        match self {
            DoctorStatus::Active => "active",
            DoctorStatus::Inactive => "inactive",
            DoctorStatus::OnLeave => "on-leave",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DoctorStatus {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DeskError::InvalidValue {
                field: "doctor status",
                value: s.to_string(),
            })
    }
}

/// Weekly consulting window.
///
/// Start and end are kept as the display strings the roster uses
/// (`"09:00 AM"`); nothing computes with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub days: Vec<Weekday>,
    pub start_time: String,
    pub end_time: String,
}

/// A member of the medical staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub gender: Gender,
    pub department: String,
    pub specialization: String,
    pub qualification: String,
    /// Years of practice.
    pub experience: u32,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub availability: Availability,
    pub status: DoctorStatus,
    pub joining_date: NaiveDate,
}

impl Record for Doctor {
    const KIND: &'static str = "doctor";
    const COLLECTION: &'static str = "doctors";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// The slim doctor entry shown in appointment form selectors.
///
/// Kept separate from `Doctor` so the scheduling form only depends on the
/// configured reference list, not on the full staff roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRef {
    pub id: DoctorId,
    pub name: String,
    pub department: String,
}

impl DoctorRef {
    /// Selector label, `"Dr. John Smith - Cardiology"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.department)
    }
}
