//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod clientes;

pub use clientes::{create_cliente, delete_cliente, list_clientes, login};
