//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod cliente;

pub use cliente::{Cliente, ClienteId, LoginCredentials, NewCliente};
