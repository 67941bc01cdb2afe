use log::trace;
use sqlx::SqliteConnection;

use super::new_record_id;
use crate::db_types::{Message, NewMessage, Pagination, UpdateMessageRequest};

/// Inserts a new message, returning the full row. The thread-existence precondition is the
/// caller's responsibility; the foreign key is the only check at this level.
pub async fn insert_message(message: NewMessage, conn: &mut SqliteConnection) -> Result<Message, sqlx::Error> {
    let message = sqlx::query_as(
        r#"
            INSERT INTO messages (id, thread_id, content) VALUES ($1, $2, $3)
            RETURNING *;
        "#,
    )
    .bind(new_record_id())
    .bind(message.thread_id)
    .bind(message.content)
    .fetch_one(conn)
    .await?;
    Ok(message)
}

pub async fn fetch_message_by_id(id: &str, conn: &mut SqliteConnection) -> Result<Option<Message>, sqlx::Error> {
    let message = sqlx::query_as("SELECT * FROM messages WHERE id = $1").bind(id).fetch_optional(conn).await?;
    Ok(message)
}

/// Returns one page of the thread's messages in creation order. `rowid` breaks ties between
/// messages created within the same clock tick, keeping pages stable across queries.
pub async fn fetch_messages_for_thread(
    thread_id: &str,
    pagination: Pagination,
    conn: &mut SqliteConnection,
) -> Result<Vec<Message>, sqlx::Error> {
    let messages = sqlx::query_as(
        "SELECT * FROM messages WHERE thread_id = $1 ORDER BY created_at ASC, rowid ASC LIMIT $2 OFFSET $3",
    )
    .bind(thread_id)
    .bind(pagination.limit)
    .bind(pagination.offset)
    .fetch_all(conn)
    .await?;
    trace!("📝️ Fetched {} messages for thread {thread_id}", messages.len());
    Ok(messages)
}

/// Unconditional content update. Zero rows affected is not an error.
pub async fn update_message(update: UpdateMessageRequest, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    let result = sqlx::query("UPDATE messages SET content = $1 WHERE id = $2")
        .bind(update.content)
        .bind(update.id)
        .execute(conn)
        .await?;
    trace!("📝️ Message update affected {} row(s)", result.rows_affected());
    Ok(())
}

pub async fn delete_message(id: &str, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM messages WHERE id = $1").bind(id).execute(conn).await?;
    Ok(())
}
