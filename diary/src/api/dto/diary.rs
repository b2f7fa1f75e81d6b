use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DiaryEntry;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// `?date=YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Calendar date in ISO-8601 form.
    #[param(value_type = String, example = "2020-01-02")]
    pub date: NaiveDate,
}

/// `?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// First day of the range (inclusive).
    #[param(value_type = String, example = "2020-01-02")]
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    #[param(value_type = String, example = "2020-02-02")]
    pub end_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiaryResponse {
    pub id: i64,
    #[schema(value_type = String, example = "2020-01-02")]
    pub date: NaiveDate,
    pub text: String,
    /// Weather condition label, e.g. `Rain`.
    pub weather: String,
    /// Weather icon id, e.g. `10d`.
    pub icon: String,
    pub temperature: f64,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl From<DiaryEntry> for DiaryResponse {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            text: entry.text,
            weather: entry.weather,
            icon: entry.icon,
            temperature: entry.temperature,
            created_at: entry.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDiaryResponse {
    /// Number of entries removed.
    pub deleted: u64,
}
