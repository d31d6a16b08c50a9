//! # medidesk-core
//!
//! Form validation, list filtering, and the appointment desk for the MediDesk
//! hospital console.
//!
//! This crate provides:
//! - The `Repository` trait every storage backend implements
//! - Appointment form validation (`validate`)
//! - The search-and-filter predicate shared by all list views (`filter`)
//! - The scheduling calendar's date rule (`schedule`)
//! - `AppointmentDesk`, which turns a valid form into a stored record
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medidesk_core::{AppointmentDesk, reference::ReferenceData};
//!
//! let desk = AppointmentDesk::new(Box::new(repo), reference);
//! let appointment = desk.schedule(&form)?;
//! ```

pub mod desk;
pub mod filter;
pub mod hospital;
pub mod reference;
pub mod schedule;
pub mod stats;
pub mod traits;
pub mod validate;

pub use desk::AppointmentDesk;
pub use hospital::Hospital;
