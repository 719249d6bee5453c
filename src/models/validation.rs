//! Field validators shared by the request shapes

use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// International or local phone number: optional `+`, digits, spaces, dashes, parentheses
pub static PHONE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9][0-9 ()\-]{5,18}[0-9]$").expect("phone regex is valid")
});

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Rejects dates after today (joining, return and fine dates)
pub fn not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > today() {
        return Err(error("not_in_future", "Date cannot be in the future"));
    }
    Ok(())
}

/// Rejects dates before today (reservation dates)
pub fn not_in_past(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < today() {
        return Err(error("not_in_past", "Date cannot be in the past"));
    }
    Ok(())
}

/// Rejects timestamps earlier than now (notification dates)
pub fn datetime_not_in_past(value: &NaiveDateTime) -> Result<(), ValidationError> {
    if *value < Local::now().naive_local() {
        return Err(error("not_in_past", "Datetime cannot be in the past"));
    }
    Ok(())
}
