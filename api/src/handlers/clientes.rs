//! Cliente handlers
//!
//! Endpoints under `/clientes`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::{Cliente, ClienteId, LoginCredentials, NewCliente};
use crate::domain::ports::ClienteRepository;
use crate::error::AppError;
use crate::AppState;

/// POST /clientes
///
/// Create a cliente. Returns the stored record with its assigned ID.
pub async fn create_cliente<CR>(
    State(state): State<AppState<CR>>,
    Json(request): Json<NewCliente>,
) -> Result<Json<Cliente>, AppError>
where
    CR: ClienteRepository + 'static,
{
    let cliente = state.cliente_service.create(&request).await?;
    Ok(Json(cliente))
}

/// GET /clientes
///
/// List every cliente.
pub async fn list_clientes<CR>(
    State(state): State<AppState<CR>>,
) -> Result<Json<Vec<Cliente>>, AppError>
where
    CR: ClienteRepository + 'static,
{
    let clientes = state.cliente_service.list_all().await?;
    Ok(Json(clientes))
}

/// DELETE /clientes/:id
///
/// Always 204, whether or not the cliente existed.
pub async fn delete_cliente<CR>(
    State(state): State<AppState<CR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError>
where
    CR: ClienteRepository + 'static,
{
    state.cliente_service.delete(&ClienteId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /clientes/login
///
/// Returns the matching cliente, or 401 with an empty body.
pub async fn login<CR>(
    State(state): State<AppState<CR>>,
    Json(credentials): Json<LoginCredentials>,
) -> Result<Json<Cliente>, AppError>
where
    CR: ClienteRepository + 'static,
{
    let cliente = state.cliente_service.login(&credentials).await?;
    Ok(Json(cliente))
}
