//! Schema bootstrap
//!
//! Creates the `clientes` table from its entity definition when it is absent.

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::clientes;
use crate::error::DomainError;

/// Run `CREATE TABLE IF NOT EXISTS` for every mapped entity
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(clientes::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!("Table clientes ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn issues_create_table_if_not_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        ensure_schema(&db).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("CREATE TABLE IF NOT EXISTS"));
        assert!(log.contains("clientes"));
    }
}
