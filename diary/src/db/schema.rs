use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- One weather snapshot per calendar date
        CREATE TABLE IF NOT EXISTS date_weather (
            date TEXT PRIMARY KEY,
            weather TEXT NOT NULL,
            icon TEXT NOT NULL,
            temperature REAL NOT NULL
        );

        -- Diary entries; weather fields are copied from date_weather(date)
        CREATE TABLE IF NOT EXISTS diary (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            text TEXT NOT NULL,
            weather TEXT NOT NULL,
            icon TEXT NOT NULL,
            temperature REAL NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_diary_date ON diary(date);
        "#,
    )
    .await?;

    Ok(())
}
