use thiserror::Error;

use crate::db_types::{Message, NewMessage, Pagination, Thread, UpdateMessageRequest};

#[derive(Debug, Clone, Error)]
pub enum ChatApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for ChatApiError {
    fn from(e: sqlx::Error) -> Self {
        ChatApiError::DatabaseError(e.to_string())
    }
}

/// The `ChatManagement` trait defines behaviour for managing threads and their messages.
#[allow(async_fn_in_trait)]
pub trait ChatManagement {
    /// Creates a new thread with the given title. Empty titles are accepted as-is.
    async fn create_thread(&self, title: String) -> Result<Thread, ChatApiError>;

    /// Fetches a thread by id. If no thread exists, `None` is returned.
    async fn fetch_thread(&self, id: &str) -> Result<Option<Thread>, ChatApiError>;

    /// Inserts a new message. The referenced thread is assumed to exist; callers enforce the
    /// precondition before calling this.
    async fn create_message(&self, message: NewMessage) -> Result<Message, ChatApiError>;

    /// Fetches a message by id. If no message exists, `None` is returned.
    async fn fetch_message(&self, id: &str) -> Result<Option<Message>, ChatApiError>;

    /// Fetches one page of messages for the given thread, ordered by creation time.
    async fn fetch_messages_for_thread(
        &self,
        thread_id: &str,
        pagination: Pagination,
    ) -> Result<Vec<Message>, ChatApiError>;

    /// Replaces the content of the message with the given id. Zero rows affected is not an error.
    async fn update_message(&self, update: UpdateMessageRequest) -> Result<(), ChatApiError>;

    /// Deletes the message with the given id, if it exists.
    async fn delete_message(&self, id: &str) -> Result<(), ChatApiError>;
}
