//! Router assembly for the user API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers. The path constants are shared with the
//! OpenAPI route table.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const USERS: &str = "/users";
pub const USER_BY_ID: &str = "/users/{id}";
pub const DOCS: &str = "/api";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax, which is also the OpenAPI
/// path template syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ROOT, get(handlers::root::greeting))
        .route(
            USERS,
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            USER_BY_ID,
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(DOCS, get(handlers::docs::swagger_ui))
        .route(OPENAPI_JSON, get(handlers::docs::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
