//! Kiosk Engine
//!
//! The storage backend for the kiosk chat and checkout service. The library is divided into two
//! main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the only supported backend at
//!    present. You should never need to access the database directly. Instead, use the public API
//!    wrappers. The exception is the data types used in the database, which are defined in the
//!    [`db_types`] module and are public.
//! 2. The storage contracts ([`mod@traits`]). Handlers are written against these traits, so that
//!    endpoint tests can substitute mock backends and alternative backends can be added without
//!    touching the HTTP layer.
pub mod db_types;
pub mod traits;

mod api;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use api::{ChatApi, OrderApi};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
