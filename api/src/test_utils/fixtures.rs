//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Cliente, ClienteId, NewCliente};

/// Create a stored cliente with a fixed ID
pub fn test_cliente(id: i64, email: &str, password: Option<&str>) -> Cliente {
    Cliente {
        id: ClienteId(id),
        name: Some("Test Cliente".to_string()),
        email: email.to_string(),
        password: password.map(str::to_string),
        phone: Some("11 4002-8922".to_string()),
        address: Some("Rua Teste, 123".to_string()),
    }
}

/// Create a create-payload with only email and password set
pub fn new_cliente(email: &str, password: &str) -> NewCliente {
    NewCliente {
        email: email.to_string(),
        password: Some(password.to_string()),
        ..Default::default()
    }
}
