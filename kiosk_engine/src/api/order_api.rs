//! Unified API for payment-collection orders.

use std::fmt::Debug;

use crate::{
    db_types::{NewOrder, Order},
    traits::{OrderApiError, OrderManagement},
};

/// The `OrderApi` provides a unified API for accessing orders on any backend that implements
/// [`OrderManagement`].
pub struct OrderApi<B> {
    db: B,
}

impl<B: Debug> Debug for OrderApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderApi ({:?})", self.db)
    }
}

impl<B> OrderApi<B>
where B: OrderManagement
{
    pub fn new(db: B) -> Self {
        Self { db }
    }

    pub async fn create_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        self.db.create_order(order).await
    }

    /// Fetches the order with the given id. If no order exists, `None` is returned.
    pub async fn order_by_id(&self, id: &str) -> Result<Option<Order>, OrderApiError> {
        self.db.fetch_order(id).await
    }
}
