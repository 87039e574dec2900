//! PostgreSQL adapter for ClienteRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use crate::domain::entities::{Cliente, ClienteId, NewCliente};
use crate::domain::ports::ClienteRepository;
use crate::entity::clientes;
use crate::error::DomainError;

/// PostgreSQL implementation of ClienteRepository
pub struct PostgresClienteRepository {
    db: DatabaseConnection,
}

impl PostgresClienteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClienteRepository for PostgresClienteRepository {
    async fn save(&self, cliente: &NewCliente) -> Result<Cliente, DomainError> {
        let model = clientes::ActiveModel {
            id: NotSet,
            nome: Set(cliente.name.clone()),
            email: Set(cliente.email.clone()),
            senha: Set(cliente.password.clone()),
            telefone: Set(cliente.phone.clone()),
            endereco: Set(cliente.address.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, DomainError> {
        let results = clientes::Entity::find()
            .order_by_asc(clientes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn delete_by_id(&self, id: &ClienteId) -> Result<(), DomainError> {
        let result = clientes::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            tracing::debug!(cliente_id = %id, "Delete matched no rows");
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<clientes::Model> for Cliente {
    fn from(model: clientes::Model) -> Self {
        Cliente {
            id: ClienteId(model.id),
            name: model.nome,
            email: model.email,
            password: model.senha,
            phone: model.telefone,
            address: model.endereco,
        }
    }
}
