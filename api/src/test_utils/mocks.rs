//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Cliente, ClienteId, NewCliente};
use crate::domain::ports::ClienteRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Cliente Repository
// ============================================================================

/// Keyed by ID so `find_all` comes back in ascending ID order, like the
/// PostgreSQL adapter. IDs start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryClienteRepository {
    clientes: Arc<RwLock<BTreeMap<ClienteId, Cliente>>>,
    last_id: Arc<RwLock<i64>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl InMemoryClienteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error
    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Pre-populate with a cliente for testing
    pub fn with_cliente(self, cliente: Cliente) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(cliente.id.0);
            self.clientes.write().unwrap().insert(cliente.id, cliente);
        }
        self
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().unwrap() {
            return Err(DomainError::Database("Mock failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ClienteRepository for InMemoryClienteRepository {
    async fn save(&self, new_cliente: &NewCliente) -> Result<Cliente, DomainError> {
        self.check_failure()?;

        let mut last_id = self.last_id.write().unwrap();
        *last_id += 1;

        let cliente = Cliente {
            id: ClienteId(*last_id),
            name: new_cliente.name.clone(),
            email: new_cliente.email.clone(),
            password: new_cliente.password.clone(),
            phone: new_cliente.phone.clone(),
            address: new_cliente.address.clone(),
        };

        self.clientes
            .write()
            .unwrap()
            .insert(cliente.id, cliente.clone());

        Ok(cliente)
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, DomainError> {
        self.check_failure()?;

        let clientes = self.clientes.read().unwrap();
        Ok(clientes.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: &ClienteId) -> Result<(), DomainError> {
        self.check_failure()?;

        self.clientes.write().unwrap().remove(id);
        Ok(())
    }
}
