//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Cliente, ClienteId, NewCliente};
use crate::error::DomainError;

/// Repository for Cliente entities
///
/// A generic identifier-keyed store: the identifier is assigned on `save`,
/// and `delete_by_id` on a missing key succeeds without effect.
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// Persist a new cliente, returning it with its assigned ID
    async fn save(&self, cliente: &NewCliente) -> Result<Cliente, DomainError>;

    /// All clientes, in ascending ID order
    async fn find_all(&self) -> Result<Vec<Cliente>, DomainError>;

    /// Remove a cliente by ID
    async fn delete_by_id(&self, id: &ClienteId) -> Result<(), DomainError>;
}
