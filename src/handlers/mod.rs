pub mod appointments;
pub mod operatories;
pub mod scheduling;

use crate::error::ApiError;
use chrono::{Local, NaiveDate};

/// `YYYY-MM-DD`, or the server's local today when absent or blank
pub fn resolve_date(raw: Option<&str>) -> Result<NaiveDate, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ApiError::InvalidDate(s.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}
