use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

use crate::error::Result;
use crate::services::DiaryService;

/// Background job that stores today's weather once a day, ahead of the first
/// diary written that day.
#[derive(Clone)]
pub struct WeatherRefreshManager {
    diary: DiaryService,
    refresh_hour: u32,
}

impl WeatherRefreshManager {
    pub fn new(diary: DiaryService, refresh_hour: u32) -> Self {
        Self {
            diary,
            refresh_hour: refresh_hour.min(23),
        }
    }

    /// Store a snapshot for the current local date if none exists yet.
    /// Returns `true` if the weather API was called and a row stored.
    pub async fn run_once(&self) -> Result<bool> {
        let today = Local::now().date_naive();
        info!(date = %today, "Starting daily weather refresh");

        let stored = self.diary.refresh_weather(today).await?;
        if stored {
            info!(date = %today, "Stored today's weather snapshot");
        } else {
            debug!(date = %today, "Weather snapshot already cached, nothing to do");
        }

        Ok(stored)
    }

    /// Time left until the next `refresh_hour:00` local time.
    pub fn next_delay(&self) -> Duration {
        delay_until_hour(Local::now().naive_local(), self.refresh_hour)
    }

    pub fn refresh_hour(&self) -> u32 {
        self.refresh_hour
    }
}

/// Delay from `now` to the next occurrence of `hour:00:00`, strictly in the
/// future and at most 24 hours away.
pub(crate) fn delay_until_hour(now: NaiveDateTime, hour: u32) -> Duration {
    let at = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or_default();
    let mut next = now.date().and_time(at);
    if next <= now {
        next += chrono::Duration::days(1);
    }

    (next - now).to_std().unwrap_or(Duration::from_secs(0))
}
