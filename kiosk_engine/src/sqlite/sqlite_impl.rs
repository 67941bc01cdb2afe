//! `SqliteDatabase` is the concrete SQLite implementation of the storage contracts.
//!
//! It implements [`ChatManagement`] and [`OrderManagement`] on top of a `sqlx` connection pool,
//! delegating the actual statements to the functions in [`super::db`].
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::db::{db_url, messages, new_pool, orders, threads};
use crate::{
    db_types::{Message, NewMessage, NewOrder, Order, Pagination, Thread, UpdateMessageRequest},
    traits::{ChatApiError, ChatManagement, OrderApiError, OrderManagement},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl ChatManagement for SqliteDatabase {
    async fn create_thread(&self, title: String) -> Result<Thread, ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        let thread = threads::insert_thread(title, &mut conn).await?;
        debug!("🗃️ Thread [{}] created", thread.id);
        Ok(thread)
    }

    async fn fetch_thread(&self, id: &str) -> Result<Option<Thread>, ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        let thread = threads::fetch_thread_by_id(id, &mut conn).await?;
        Ok(thread)
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message, ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        let message = messages::insert_message(message, &mut conn).await?;
        debug!("🗃️ Message [{}] saved in thread [{}]", message.id, message.thread_id);
        Ok(message)
    }

    async fn fetch_message(&self, id: &str) -> Result<Option<Message>, ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        let message = messages::fetch_message_by_id(id, &mut conn).await?;
        Ok(message)
    }

    async fn fetch_messages_for_thread(
        &self,
        thread_id: &str,
        pagination: Pagination,
    ) -> Result<Vec<Message>, ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        let messages = messages::fetch_messages_for_thread(thread_id, pagination, &mut conn).await?;
        Ok(messages)
    }

    async fn update_message(&self, update: UpdateMessageRequest) -> Result<(), ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        messages::update_message(update, &mut conn).await?;
        Ok(())
    }

    async fn delete_message(&self, id: &str) -> Result<(), ChatApiError> {
        let mut conn = self.pool.acquire().await?;
        messages::delete_message(id, &mut conn).await?;
        debug!("🗃️ Message [{id}] deleted");
        Ok(())
    }
}

impl OrderManagement for SqliteDatabase {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::insert_order(order, &mut conn).await?;
        debug!("🗃️ Order [{}] created with status {}", order.id, order.status);
        Ok(order)
    }

    async fn fetch_order(&self, id: &str) -> Result<Option<Order>, OrderApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order_by_id(id, &mut conn).await?;
        Ok(order)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Applies any outstanding schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("🗃️ Migrations complete");
        Ok(())
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
