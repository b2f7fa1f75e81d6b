use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cached weather summary for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateWeather {
    pub date: NaiveDate,
    /// Condition label, e.g. `Rain` (`weather[0].main`).
    pub weather: String,
    /// Icon id, e.g. `10d` (`weather[0].icon`).
    pub icon: String,
    /// `main.temp`, in the unit the API reports.
    pub temperature: f64,
}

/// The three fields plucked out of a current-weather response, not yet tied
/// to a date.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWeather {
    pub weather: String,
    pub icon: String,
    pub temperature: f64,
}

impl ParsedWeather {
    pub fn for_date(self, date: NaiveDate) -> DateWeather {
        DateWeather {
            date,
            weather: self.weather,
            icon: self.icon,
            temperature: self.temperature,
        }
    }
}
