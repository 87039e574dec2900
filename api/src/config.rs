use std::env;

use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;

/// Origins allowed to call `GET /clientes` from a browser
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:80,http://localhost:3000";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Cross-origin allow-list for the cliente listing
    pub cors_allowed_origins: Vec<HeaderValue>,
    /// Create the `clientes` table at startup if it is missing
    pub auto_create_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            Err(_) => 8080,
        };

        let origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string());

        let auto_create_schema = match env::var("AUTO_CREATE_SCHEMA") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("Invalid AUTO_CREATE_SCHEMA: {}", v))?,
            Err(_) => true,
        };

        Ok(Self {
            database_url,
            port,
            cors_allowed_origins: parse_origins(&origins)?,
            auto_create_schema,
        })
    }
}

/// Split a comma-separated origin list, skipping blanks
///
/// The list is explicit: a `*` wildcard is refused.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == "*" {
                bail!("Wildcard CORS origin is not allowed");
            }
            HeaderValue::from_str(s).with_context(|| format!("Invalid CORS origin: {}", s))
        })
        .collect()
}
