use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Singleton user profile. The CHECK keeps every write on row 1.
        CREATE TABLE IF NOT EXISTS user_profile (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            name TEXT,
            skills TEXT NOT NULL DEFAULT '[]',
            technologies TEXT NOT NULL DEFAULT '[]',
            interests TEXT NOT NULL DEFAULT '[]',
            projects TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );

        INSERT OR IGNORE INTO user_profile (id) VALUES (1);

        -- One briefing per calendar date
        CREATE TABLE IF NOT EXISTS briefings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL UNIQUE,
            status TEXT NOT NULL DEFAULT 'pending',
            content TEXT,
            raw_search_results TEXT,
            ai_provider TEXT,
            ai_model TEXT,
            token_usage TEXT,
            generation_time_ms INTEGER,
            error TEXT,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_briefings_date ON briefings(date);
        CREATE INDEX IF NOT EXISTS idx_briefings_status ON briefings(status);
        "#,
    )
    .await?;

    Ok(())
}
