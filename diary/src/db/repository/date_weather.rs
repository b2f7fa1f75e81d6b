use chrono::NaiveDate;
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::DateWeather;

use super::parse_date_column;

pub struct DateWeatherRepository;

impl DateWeatherRepository {
    /// First stored snapshot for `date`, if any.
    pub async fn get_first_by_date(
        conn: &Connection,
        date: NaiveDate,
    ) -> Result<Option<DateWeather>> {
        let mut rows = conn
            .query(
                r#"
                SELECT date, weather, icon, temperature
                FROM date_weather
                WHERE date = ?1
                LIMIT 1
                "#,
                params![date.to_string()],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_date_weather(&row)?)),
            None => Ok(None),
        }
    }

    /// Stores `weather` unless a snapshot for its date already exists.
    /// Returns whether a row was inserted.
    pub async fn insert_if_absent(conn: &Connection, weather: &DateWeather) -> Result<bool> {
        let affected = conn
            .execute(
                r#"
                INSERT INTO date_weather (date, weather, icon, temperature)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(date) DO NOTHING
                "#,
                params![
                    weather.date.to_string(),
                    weather.weather.as_str(),
                    weather.icon.as_str(),
                    weather.temperature,
                ],
            )
            .await?;

        Ok(affected > 0)
    }

    fn row_to_date_weather(row: &libsql::Row) -> Result<DateWeather> {
        Ok(DateWeather {
            date: parse_date_column(&row.get::<String>(0)?)?,
            weather: row.get(1)?,
            icon: row.get(2)?,
            temperature: row.get(3)?,
        })
    }
}
