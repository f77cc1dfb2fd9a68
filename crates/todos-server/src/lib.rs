//! HTTP/JSON API server for todo items.
//!
//! Thin axum handlers over the [`todos_storage::TodoStore`] contract.
//! This crate contains the route definitions, request schema types,
//! error-to-status mapping, and shared application state.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
