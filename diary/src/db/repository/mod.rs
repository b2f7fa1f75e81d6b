mod date_weather;
mod diaries;

pub use date_weather::DateWeatherRepository;
pub use diaries::DiaryRepository;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{DiaryError, Result};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn parse_date_column(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| DiaryError::Internal(format!("Invalid date '{value}' in database: {e}")))
}

pub(crate) fn parse_timestamp_column(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DiaryError::Internal(format!("Invalid timestamp '{value}' in database: {e}")))
}
