use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_PAGE_SIZE: i64 = 5;

//--------------------------------------      Thread        ----------------------------------------------------------
/// A named conversation container. Threads are immutable once created; there are no update or
/// delete operations for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

//--------------------------------------      Message       ----------------------------------------------------------
/// A content record belonging to exactly one [`Thread`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: String,
    pub thread_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a message. The thread must exist at creation time; callers check the
/// precondition before inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub thread_id: String,
    pub content: String,
}

/// Update payload for a message. The update is unconditional: a non-existent id affects zero rows
/// and is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    pub id: String,
    pub content: String,
}

//--------------------------------------       Order        ----------------------------------------------------------
/// A payment-collection request record. The amount is decimal-as-text and is passed through to the
/// payment provider verbatim. `status` is set by the store schema default on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: String,
    pub amount: String,
    pub number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub amount: String,
    pub number: String,
}

//--------------------------------------     Pagination     ----------------------------------------------------------
/// Page window for message listings. The HTTP layer sanitizes raw query parameters; the engine
/// trusts these values as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: DEFAULT_PAGE_SIZE, offset: 0 }
    }
}
