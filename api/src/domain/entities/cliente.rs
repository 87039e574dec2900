//! Cliente domain entity
//!
//! A customer record of the pizzeria. Only `email` and `password` take part
//! in any rule (the login scan); the remaining attributes are carried as-is.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClienteId(pub i64);

impl From<i64> for ClienteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClienteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: ClienteId,
    pub name: Option<String>,
    pub email: String,
    /// Stored and compared in plain text
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Cliente {
    /// Exact match on email and a non-null stored password
    pub fn matches(&self, credentials: &LoginCredentials) -> bool {
        if credentials.email.as_deref() != Some(self.email.as_str()) {
            return false;
        }

        match (&self.password, &credentials.password) {
            (Some(stored), Some(given)) => stored == given,
            _ => false,
        }
    }
}

/// Data needed to create a new cliente
///
/// Any `id` present in the incoming payload is dropped here; identifiers
/// are always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCliente {
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default, alias = "senha")]
    pub password: Option<String>,
    #[serde(default, alias = "telefone")]
    pub phone: Option<String>,
    #[serde(default, alias = "endereco")]
    pub address: Option<String>,
}

/// Email/password pair submitted to the login endpoint
///
/// Both halves are optional on the wire; a missing one simply matches no
/// record.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "senha")]
    pub password: Option<String>,
}
