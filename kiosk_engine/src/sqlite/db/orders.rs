use sqlx::SqliteConnection;

use super::new_record_id;
use crate::db_types::{NewOrder, Order};

/// Inserts a new order, returning the full row. `status` and `created_at` are assigned by the
/// schema defaults. The amount is stored as text, exactly as received.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, sqlx::Error> {
    let order = sqlx::query_as(
        r#"
            INSERT INTO orders (id, amount, number) VALUES ($1, $2, $3)
            RETURNING *;
        "#,
    )
    .bind(new_record_id())
    .bind(order.amount)
    .bind(order.number)
    .fetch_one(conn)
    .await?;
    Ok(order)
}

pub async fn fetch_order_by_id(id: &str, conn: &mut SqliteConnection) -> Result<Option<Order>, sqlx::Error> {
    let order = sqlx::query_as("SELECT * FROM orders WHERE id = $1").bind(id).fetch_optional(conn).await?;
    Ok(order)
}
