//! Cliente service
//!
//! Create, list, delete and login for customer records. Each operation is a
//! single pass-through to the repository; login is a linear scan over every
//! stored record.

use std::sync::Arc;

use crate::domain::entities::{Cliente, ClienteId, LoginCredentials, NewCliente};
use crate::domain::ports::ClienteRepository;
use crate::error::AppError;

/// Service for managing clientes
pub struct ClienteService<CR>
where
    CR: ClienteRepository,
{
    clientes: Arc<CR>,
}

impl<CR> ClienteService<CR>
where
    CR: ClienteRepository,
{
    pub fn new(clientes: Arc<CR>) -> Self {
        Self { clientes }
    }

    /// Persist a new cliente; the store assigns the ID
    pub async fn create(&self, cliente: &NewCliente) -> Result<Cliente, AppError> {
        let saved = self.clientes.save(cliente).await?;
        tracing::debug!(cliente_id = %saved.id, "Cliente created");
        Ok(saved)
    }

    /// Every stored cliente, in store order
    pub async fn list_all(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = self.clientes.find_all().await?;
        tracing::debug!(count = clientes.len(), "Listed clientes");
        Ok(clientes)
    }

    /// Delete by ID. Missing IDs are not an error.
    pub async fn delete(&self, id: &ClienteId) -> Result<(), AppError> {
        self.clientes.delete_by_id(id).await?;
        tracing::debug!(cliente_id = %id, "Cliente deleted");
        Ok(())
    }

    /// Plain-text login
    ///
    /// Returns the first stored cliente whose email and non-null password
    /// equal the submitted credentials, or `AppError::Unauthorized`.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Cliente, AppError> {
        let clientes = self.clientes.find_all().await?;

        match clientes.into_iter().find(|c| c.matches(credentials)) {
            Some(cliente) => Ok(cliente),
            None => {
                tracing::info!(email = ?credentials.email, "Login rejected");
                Err(AppError::Unauthorized)
            }
        }
    }
}
