//! # Kiosk server
//! This module hosts the HTTP layer of the kiosk chat and checkout service. It is responsible for:
//! Translating inbound requests into storage-engine calls.
//! Enforcing the one cross-entity invariant (a message requires an existing thread).
//! Pairing order creation with a collection request to the Campay payment provider.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `POST /threads`, `GET /thread/{id}`: thread creation and existence checks.
//! * `POST /message`, `GET /message/{id}`, `PATCH /message`, `DELETE /message/{id}`: message CRUD.
//! * `GET /thread/{id}/messages`: paginated message listing for a thread.
//! * `POST /order`: order creation plus the paired payment-collection request.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
