use async_trait::async_trait;
use chrono::NaiveDate;
use libsql::TransactionBehavior;

use crate::db::connection::Database;
use crate::db::repository::{DateWeatherRepository, DiaryRepository};
use crate::db::traits::{DatabaseBackend, DiaryStore, WeatherStore};
use crate::error::{DiaryError, Result};
use crate::models::{DateWeather, DiaryEntry, NewDiaryEntry};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DiaryStore for LibSqlBackend {
    async fn create_diary(
        &self,
        date: NaiveDate,
        text: &str,
        weather: &DateWeather,
    ) -> Result<DiaryEntry> {
        let conn = self.db.connect()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;

        if DateWeatherRepository::insert_if_absent(&tx, weather).await? {
            tracing::debug!(date = %weather.date, "Stored weather snapshot");
        }
        let stored = DateWeatherRepository::get_first_by_date(&tx, weather.date)
            .await?
            .ok_or_else(|| {
                DiaryError::Internal(format!("Weather snapshot for {} vanished", weather.date))
            })?;

        let entry = DiaryRepository::create(&tx, &NewDiaryEntry::new(date, text, &stored)).await?;
        tx.commit().await?;

        Ok(entry)
    }
    async fn get_diaries_by_date(&self, date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        let conn = self.db.connect()?;
        DiaryRepository::find_all_by_date(&conn, date).await
    }
    async fn get_diaries_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DiaryEntry>> {
        let conn = self.db.connect()?;
        DiaryRepository::find_by_date_between(&conn, start, end).await
    }
    async fn update_first_diary_text(
        &self,
        date: NaiveDate,
        text: &str,
    ) -> Result<Option<DiaryEntry>> {
        let conn = self.db.connect()?;
        DiaryRepository::update_first_text_by_date(&conn, date, text).await
    }
    async fn delete_diaries_by_date(&self, date: NaiveDate) -> Result<u64> {
        let conn = self.db.connect()?;
        DiaryRepository::delete_all_by_date(&conn, date).await
    }
}

#[async_trait]
impl WeatherStore for LibSqlBackend {
    async fn get_date_weather(&self, date: NaiveDate) -> Result<Option<DateWeather>> {
        let conn = self.db.connect()?;
        DateWeatherRepository::get_first_by_date(&conn, date).await
    }
    async fn save_date_weather(&self, weather: &DateWeather) -> Result<bool> {
        let conn = self.db.connect()?;
        DateWeatherRepository::insert_if_absent(&conn, weather).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn ping(&self) -> Result<()> {
        let conn = self.db.connect()?;
        let mut rows = conn.query("SELECT 1", ()).await?;
        rows.next().await?;
        Ok(())
    }
}
