//! # Storage contracts
//!
//! This module defines the interface contracts of the storage backends: one method per statement
//! shape used by the request handlers.
//!
//! * [`ChatManagement`] covers threads and messages.
//! * [`OrderManagement`] covers payment-collection orders.
//!
//! Not-found is expressed through `Option`, never through the error types: callers decide whether
//! a missing row is an error for their operation.
mod chat_management;
mod order_management;

pub use chat_management::{ChatApiError, ChatManagement};
pub use order_management::{OrderApiError, OrderManagement};
