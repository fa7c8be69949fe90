//! HTTP handler modules for the user API.
//!
//! Handlers parse the request, acquire the store lock, delegate to the
//! [`UserStore`](userapi_core::UserStore) and return JSON. No business logic
//! lives in handlers.

pub mod docs;
pub mod root;
pub mod users;
