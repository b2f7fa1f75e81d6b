use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::db::DatabaseBackend;
use crate::error::{DiaryError, Result};
use crate::models::{DateWeather, DiaryEntry};
use crate::weather::WeatherClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherSource {
    Cache,
    Api,
}

#[derive(Debug, Clone)]
pub struct ResolvedWeather {
    pub snapshot: DateWeather,
    pub source: WeatherSource,
}

#[derive(Clone)]
pub struct DiaryService {
    db: Arc<dyn DatabaseBackend>,
    weather: WeatherClient,
}

impl DiaryService {
    pub fn new(db: Arc<dyn DatabaseBackend>, weather: WeatherClient) -> Self {
        Self { db, weather }
    }

    /// Cache-first weather lookup for `date`.
    ///
    /// A stored snapshot is returned as-is. Otherwise the current weather is
    /// fetched and labelled with `date`; the caller decides whether to store it.
    pub async fn resolve_weather(&self, date: NaiveDate) -> Result<ResolvedWeather> {
        if let Some(snapshot) = self.db.get_date_weather(date).await? {
            debug!(%date, "Weather cache hit");
            return Ok(ResolvedWeather {
                snapshot,
                source: WeatherSource::Cache,
            });
        }

        debug!(%date, location = self.weather.location(), "Weather cache miss, calling API");
        let parsed = self.weather.fetch_current().await?;

        Ok(ResolvedWeather {
            snapshot: parsed.for_date(date),
            source: WeatherSource::Api,
        })
    }

    /// Make sure a weather snapshot exists for `date`.
    /// Returns `true` if a new snapshot was fetched and stored.
    pub async fn refresh_weather(&self, date: NaiveDate) -> Result<bool> {
        let resolved = self.resolve_weather(date).await?;
        if resolved.source == WeatherSource::Cache {
            return Ok(false);
        }

        self.db.save_date_weather(&resolved.snapshot).await
    }

    pub async fn create(&self, date: NaiveDate, text: &str) -> Result<DiaryEntry> {
        if text.trim().is_empty() {
            return Err(DiaryError::Validation(
                "Diary text cannot be empty".to_string(),
            ));
        }

        info!(%date, "Started to create diary");
        let resolved = self.resolve_weather(date).await?;
        let entry = self.db.create_diary(date, text, &resolved.snapshot).await?;
        info!(%date, id = entry.id, "Finished creating diary");

        Ok(entry)
    }

    pub async fn read(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        debug!(%date, "Reading diary");
        self.db.get_diaries_by_date(date).await
    }

    /// Entries with `start <= date <= end`; empty when `start > end`.
    pub async fn read_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DiaryEntry>> {
        debug!(%start, %end, "Reading diaries in range");
        self.db.get_diaries_between(start, end).await
    }

    /// Replace the text of the first entry for `date`.
    pub async fn update(&self, date: NaiveDate, text: &str) -> Result<DiaryEntry> {
        if text.trim().is_empty() {
            return Err(DiaryError::Validation(
                "Diary text cannot be empty".to_string(),
            ));
        }

        match self.db.update_first_diary_text(date, text).await? {
            Some(entry) => {
                info!(%date, id = entry.id, "Updated diary");
                Ok(entry)
            }
            None => Err(DiaryError::NotFound(format!("No diary entry for {date}"))),
        }
    }

    pub async fn delete(&self, date: NaiveDate) -> Result<u64> {
        let deleted = self.db.delete_diaries_by_date(date).await?;
        info!(%date, deleted, "Deleted diaries");
        Ok(deleted)
    }
}
