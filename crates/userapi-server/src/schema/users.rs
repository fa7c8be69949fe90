//! User request/response types.
//!
//! Create requests and all responses use [`User`] directly; only update has
//! its own request shape.

use serde_json::Value;

pub use userapi_core::User;

/// Fields taken from the body of `PUT /users/{id}`.
///
/// Values are kept whatever their JSON type; a field missing from the body
/// (or a body that is not an object) yields `None`, which clears the stored
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl From<Value> for UpdateUserRequest {
    fn from(body: Value) -> Self {
        UpdateUserRequest {
            name: body.get("name").cloned(),
            email: body.get("email").cloned(),
        }
    }
}
