//! Identifier newtypes.
//!
//! Every entity is keyed by a plain string. Seed data uses short readable ids
//! (`"APT001"`, `"d1"`); ids minted at runtime are UUID v4 strings.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh, unique id.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().to_string()))
            }
        }
    };
}

string_id!(
    /// Identity of an appointment record.
    AppointmentId
);
string_id!(
    /// Identity of a registered patient.
    PatientId
);
string_id!(
    /// Identity of a doctor. Also the value a doctor selector submits.
    DoctorId
);
string_id!(
    /// Identity of a bill.
    BillId
);
string_id!(
    /// Identity of a prescription.
    PrescriptionId
);
