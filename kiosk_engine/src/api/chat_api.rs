//! Unified API for threads and messages.

use std::fmt::Debug;

use crate::{
    db_types::{Message, NewMessage, Pagination, Thread, UpdateMessageRequest},
    traits::{ChatApiError, ChatManagement},
};

/// The `ChatApi` provides a unified API for accessing threads and messages on any backend that
/// implements [`ChatManagement`].
pub struct ChatApi<B> {
    db: B,
}

impl<B: Debug> Debug for ChatApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChatApi ({:?})", self.db)
    }
}

impl<B> ChatApi<B>
where B: ChatManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn create_thread(&self, title: String) -> Result<Thread, ChatApiError> {
        self.db.create_thread(title).await
    }

    /// Fetches the thread with the given id. If no thread exists, `None` is returned.
    pub async fn thread_by_id(&self, id: &str) -> Result<Option<Thread>, ChatApiError> {
        self.db.fetch_thread(id).await
    }

    pub async fn create_message(&self, message: NewMessage) -> Result<Message, ChatApiError> {
        self.db.create_message(message).await
    }

    /// Fetches the message with the given id. If no message exists, `None` is returned.
    pub async fn message_by_id(&self, id: &str) -> Result<Option<Message>, ChatApiError> {
        self.db.fetch_message(id).await
    }

    /// Fetches one page of a thread's messages, ordered by creation time.
    pub async fn messages_for_thread(
        &self,
        thread_id: &str,
        pagination: Pagination,
    ) -> Result<Vec<Message>, ChatApiError> {
        self.db.fetch_messages_for_thread(thread_id, pagination).await
    }

    pub async fn update_message(&self, update: UpdateMessageRequest) -> Result<(), ChatApiError> {
        self.db.update_message(update).await
    }

    pub async fn delete_message(&self, id: &str) -> Result<(), ChatApiError> {
        self.db.delete_message(id).await
    }
}
