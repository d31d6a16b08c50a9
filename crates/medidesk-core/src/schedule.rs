//! The scheduling calendar's date rule.

use chrono::{Datelike, Local, NaiveDate, Weekday};

use medidesk_contracts::{
    error::{DeskError, DeskResult},
    form::AppointmentForm,
};

use crate::validate::validate_appointment;

/// True when `date` cannot be picked for a new appointment: it lies strictly
/// before `today`, or it is a Saturday or Sunday.
pub fn is_date_disabled(date: NaiveDate, today: NaiveDate) -> bool {
    date < today || matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Accept `date` from the picker, or reject it as `DateUnavailable`.
pub fn pick_date(date: NaiveDate, today: NaiveDate) -> DeskResult<NaiveDate> {
    if is_date_disabled(date, today) {
        return Err(DeskError::DateUnavailable { date });
    }
    Ok(date)
}

/// Gate a submitted form before it is saved.
///
/// Field errors come first so the operator sees every inline message. Only a
/// form that passes has its date run through the picker rule, and only when
/// the date differs from `stored` (the edited record's date, if any).
pub fn check_submission(
    form: &AppointmentForm,
    stored: Option<NaiveDate>,
    today: NaiveDate,
) -> DeskResult<()> {
    let valid = validate_appointment(form).map_err(DeskError::Validation)?;
    if stored != Some(valid.date) {
        pick_date(valid.date, today)?;
    }
    Ok(())
}

/// The earliest selectable date on or after `from`.
pub fn next_available_date(from: NaiveDate, today: NaiveDate) -> NaiveDate {
    let mut date = from.max(today);
    while is_date_disabled(date, today) {
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    date
}

/// The operator's calendar date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
