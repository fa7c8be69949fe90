//! Domain model and storage contract for the user API.
//!
//! - [`user`]: the `User` record and `UserId` newtype
//! - [`error`]: StoreError
//! - [`traits`]: the `UserStore` trait every backend implements
//! - [`memory`]: the in-memory, seeded backend

pub mod error;
pub mod memory;
pub mod traits;
pub mod user;

// Re-export commonly used types
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use traits::UserStore;
pub use user::{User, UserId};
