use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{DateWeather, DiaryEntry};

/// CRUD operations for diary entries.
#[async_trait]
pub trait DiaryStore: Send + Sync {
    /// Persist a diary entry for `date` in one write transaction.
    ///
    /// `weather` is stored as the date's snapshot unless one already exists;
    /// either way the entry copies the fields of the stored snapshot.
    async fn create_diary(
        &self,
        date: NaiveDate,
        text: &str,
        weather: &DateWeather,
    ) -> Result<DiaryEntry>;
    async fn get_diaries_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>>;
    async fn get_diaries_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DiaryEntry>>;
    /// Replace the text of the lowest-id entry for `date`.
    /// Returns `None` when no entry exists for that date.
    async fn update_first_diary_text(
        &self,
        date: NaiveDate,
        text: &str,
    ) -> Result<Option<DiaryEntry>>;
    async fn delete_diaries_by_date(&self, date: NaiveDate) -> Result<u64>;
}

/// Cached per-date weather snapshots.
#[async_trait]
pub trait WeatherStore: Send + Sync {
    async fn get_date_weather(&self, date: NaiveDate) -> Result<Option<DateWeather>>;
    /// Returns `false` if a snapshot for that date was already stored.
    async fn save_date_weather(&self, weather: &DateWeather) -> Result<bool>;
}

/// A complete database backend combining the store traits.
#[async_trait]
pub trait DatabaseBackend: DiaryStore + WeatherStore {
    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<()>;
}
