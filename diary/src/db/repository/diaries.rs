use chrono::NaiveDate;
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{DiaryEntry, NewDiaryEntry};

use super::{parse_date_column, parse_timestamp_column};

const DIARY_COLUMNS: &str = "id, date, text, weather, icon, temperature, created_at";

pub struct DiaryRepository;

impl DiaryRepository {
    pub async fn create(conn: &Connection, entry: &NewDiaryEntry) -> Result<DiaryEntry> {
        let mut rows = conn
            .query(
                r#"
                INSERT INTO diary (
                    date, text, weather, icon, temperature, created_at
                ) VALUES (
                    ?1, ?2, ?3, ?4, ?5, ?6
                )
                RETURNING id
                "#,
                params![
                    entry.date.to_string(),
                    entry.text.as_str(),
                    entry.weather.as_str(),
                    entry.icon.as_str(),
                    entry.temperature,
                    entry.created_at.to_rfc3339(),
                ],
            )
            .await?;

        let id: i64 = match rows.next().await? {
            Some(row) => row.get(0)?,
            None => conn.last_insert_rowid(),
        };

        Ok(entry.clone().with_id(id))
    }

    pub async fn find_all_by_date(conn: &Connection, date: NaiveDate) -> Result<Vec<DiaryEntry>> {
        let sql = format!("SELECT {DIARY_COLUMNS} FROM diary WHERE date = ?1 ORDER BY id ASC");
        let rows = conn.query(&sql, params![date.to_string()]).await?;
        Self::collect(rows).await
    }

    /// Entries with `start <= date <= end`. Empty when `start > end`.
    pub async fn find_by_date_between(
        conn: &Connection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DiaryEntry>> {
        let sql = format!(
            "SELECT {DIARY_COLUMNS} FROM diary WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, id ASC"
        );
        let rows = conn
            .query(&sql, params![start.to_string(), end.to_string()])
            .await?;
        Self::collect(rows).await
    }

    /// Replace the text of the lowest-id entry for `date` in one statement.
    /// Returns the updated row, or `None` when no entry exists for that date.
    pub async fn update_first_text_by_date(
        conn: &Connection,
        date: NaiveDate,
        text: &str,
    ) -> Result<Option<DiaryEntry>> {
        let sql = format!(
            r#"
            UPDATE diary SET text = ?2
            WHERE id = (SELECT id FROM diary WHERE date = ?1 ORDER BY id ASC LIMIT 1)
            RETURNING {DIARY_COLUMNS}
            "#
        );
        let mut rows = conn.query(&sql, params![date.to_string(), text]).await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn delete_all_by_date(conn: &Connection, date: NaiveDate) -> Result<u64> {
        let affected = conn
            .execute(
                "DELETE FROM diary WHERE date = ?1",
                params![date.to_string()],
            )
            .await?;
        Ok(affected)
    }

    async fn collect(mut rows: libsql::Rows) -> Result<Vec<DiaryEntry>> {
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(Self::row_to_entry(&row)?);
        }
        Ok(results)
    }

    fn row_to_entry(row: &libsql::Row) -> Result<DiaryEntry> {
        Ok(DiaryEntry {
            id: row.get(0)?,
            date: parse_date_column(&row.get::<String>(1)?)?,
            text: row.get(2)?,
            weather: row.get(3)?,
            icon: row.get(4)?,
            temperature: row.get(5)?,
            created_at: parse_timestamp_column(&row.get::<String>(6)?)?,
        })
    }
}
