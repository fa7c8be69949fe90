//! Store error types for userapi-core.

use thiserror::Error;

use crate::user::UserId;

/// Errors produced by [`UserStore`](crate::traits::UserStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No stored record carries the requested id.
    #[error("user not found: UserId({id})")]
    NotFound { id: UserId },
}
