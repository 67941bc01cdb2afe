use std::fmt::Display;

use kiosk_engine::db_types::{Order, Pagination, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewThreadParams {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }
}

/// Raw pagination query parameters. They are decoded as plain strings so that malformed values
/// never fail extraction; [`MessageListQuery::pagination`] silently falls back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl MessageListQuery {
    /// Sanitizes the raw parameters independently: a missing value, a parse failure, a limit of
    /// zero or less, or a negative offset all yield the corresponding default.
    pub fn pagination(&self) -> Pagination {
        let limit = self
            .limit
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|&limit| limit > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let offset =
            self.offset.as_deref().and_then(|s| s.parse::<i64>().ok()).filter(|&offset| offset >= 0).unwrap_or(0);
        Pagination { limit, offset }
    }
}

/// Response payload for a successful order creation: the stored order plus the payment provider's
/// transaction reference.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub order: Order,
    pub transaction_reference: String,
}
