//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod cliente_repo;
pub mod schema;


pub use cliente_repo::PostgresClienteRepository;
pub use schema::ensure_schema;
