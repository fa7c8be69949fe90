//! HTTP/JSON API server for the user collection.
//!
//! Provides CRUD routes over a [`UserStore`](userapi_core::UserStore), a
//! plain-text greeting at `/`, and an OpenAPI document rendered with
//! Swagger UI. This crate contains the router, handlers, API schema types,
//! error mapping and server configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod schema;
pub mod state;
