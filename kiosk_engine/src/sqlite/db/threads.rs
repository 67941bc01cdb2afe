use sqlx::SqliteConnection;

use super::new_record_id;
use crate::db_types::Thread;

/// Inserts a new thread, returning the full row. `created_at` is assigned by the schema default.
pub async fn insert_thread(title: String, conn: &mut SqliteConnection) -> Result<Thread, sqlx::Error> {
    let thread = sqlx::query_as(
        r#"
            INSERT INTO threads (id, title) VALUES ($1, $2)
            RETURNING *;
        "#,
    )
    .bind(new_record_id())
    .bind(title)
    .fetch_one(conn)
    .await?;
    Ok(thread)
}

pub async fn fetch_thread_by_id(id: &str, conn: &mut SqliteConnection) -> Result<Option<Thread>, sqlx::Error> {
    let thread = sqlx::query_as("SELECT * FROM threads WHERE id = $1").bind(id).fetch_optional(conn).await?;
    Ok(thread)
}
