//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod cliente_service;

pub use cliente_service::ClienteService;
