//! HTTP API layer for the item checker.
//!
//! Provides the item check endpoint, liveness checks and API docs.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
