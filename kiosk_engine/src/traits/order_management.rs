use thiserror::Error;

use crate::db_types::{NewOrder, Order};

#[derive(Debug, Clone, Error)]
pub enum OrderApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for OrderApiError {
    fn from(e: sqlx::Error) -> Self {
        OrderApiError::DatabaseError(e.to_string())
    }
}

/// The `OrderManagement` trait defines behaviour for managing payment-collection orders.
///
/// Creating an order and requesting the corresponding collection from the payment provider are
/// deliberately separate steps. The insert commits on its own: a failed payment call afterwards
/// leaves the order record in place.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Inserts a new order. The initial status is assigned by the store.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderApiError>;

    /// Fetches an order by id. If no order exists, `None` is returned.
    async fn fetch_order(&self, id: &str) -> Result<Option<Order>, OrderApiError>;
}
