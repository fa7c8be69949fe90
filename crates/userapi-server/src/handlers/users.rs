//! User CRUD handlers.
//!
//! Path ids are taken as raw strings and parsed with
//! [`UserId::parse_lenient`]; a segment that is not a number can never match
//! a stored id, so it lands in the 404 branch like any other unknown id.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use userapi_core::{User, UserId};

use crate::error::ApiError;
use crate::schema::users::UpdateUserRequest;
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<UserId, ApiError> {
    UserId::parse_lenient(raw).ok_or_else(|| {
        tracing::debug!(segment = raw, "path id is not a number");
        ApiError::NotFound
    })
}

/// Lists all users in store order.
///
/// `GET /users`
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let store = state.store.lock().await;
    Ok(Json(store.list()?))
}

/// Returns the first user with the given id.
///
/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let store = state.store.lock().await;
    let user = store.get(id).inspect_err(|_| {
        tracing::debug!(%id, "user not found");
    })?;
    Ok(Json(user))
}

/// Appends the posted record and echoes it back.
///
/// `POST /users`
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Json<User>, ApiError> {
    let mut store = state.store.lock().await;
    let created = store.create(user)?;
    tracing::info!(id = ?created.id().map(|id| id.0), "user created");
    Ok(Json(created))
}

/// Overwrites name and email on the user with the given id.
///
/// The id is resolved before the body is looked at, so an unknown id is a
/// 404 whatever the body holds.
///
/// `PUT /users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let mut store = state.store.lock().await;
    store.get(id).inspect_err(|_| {
        tracing::debug!(%id, "user not found");
    })?;

    let Json(body) = body?;
    let req = UpdateUserRequest::from(body);
    let user = store.update(id, req.name, req.email)?;
    tracing::info!(%id, "user updated");
    Ok(Json(user))
}

/// Removes every user with the given id and returns the remaining list.
///
/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let mut store = state.store.lock().await;
    let remaining = store.delete(id)?;
    tracing::info!(%id, remaining = remaining.len(), "user deleted");
    Ok(Json(remaining))
}
