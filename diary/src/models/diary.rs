use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::DateWeather;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    /// Also the key of the `date_weather` row the weather fields were copied from.
    pub date: NaiveDate,
    pub text: String,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
    pub created_at: DateTime<Utc>,
}

/// A diary entry that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewDiaryEntry {
    pub date: NaiveDate,
    pub text: String,
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
    pub created_at: DateTime<Utc>,
}

impl NewDiaryEntry {
    pub fn new(date: NaiveDate, text: impl Into<String>, weather: &DateWeather) -> Self {
        Self {
            date,
            text: text.into(),
            weather: weather.weather.clone(),
            icon: weather.icon.clone(),
            temperature: weather.temperature,
            created_at: Utc::now(),
        }
    }

    pub fn with_id(self, id: i64) -> DiaryEntry {
        DiaryEntry {
            id,
            date: self.date,
            text: self.text,
            weather: self.weather,
            icon: self.icon,
            temperature: self.temperature,
            created_at: self.created_at,
        }
    }
}
