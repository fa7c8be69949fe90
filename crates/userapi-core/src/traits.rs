//! The [`UserStore`] trait defining the storage contract for user records.
//!
//! Handlers only ever talk to a `Box<dyn UserStore>`, so a persistent
//! backend can replace [`InMemoryStore`](crate::memory::InMemoryStore)
//! without touching the HTTP layer. The trait is synchronous; callers
//! serialize access with a single mutex.

use serde_json::Value;

use crate::error::StoreError;
use crate::user::{User, UserId};

/// The storage contract for user records.
///
/// Records form an ordered sequence. Lookups scan in insertion order and
/// return the first match; ids are not required to be unique.
pub trait UserStore: Send {
    /// Returns every record in insertion order.
    fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Returns the first record whose id equals `id`.
    fn get(&self, id: UserId) -> Result<User, StoreError>;

    /// Appends `user` unchanged, even if its id collides or is missing.
    ///
    /// Returns the stored record.
    fn create(&mut self, user: User) -> Result<User, StoreError>;

    /// Overwrites `name` and `email` on the first record matching `id`.
    ///
    /// Values are stored as given, whatever their JSON type; `None` removes
    /// the stored field. The id and any extra fields are left untouched.
    /// Returns the updated record.
    fn update(
        &mut self,
        id: UserId,
        name: Option<Value>,
        email: Option<Value>,
    ) -> Result<User, StoreError>;

    /// Removes every record matching `id` and returns what remains.
    fn delete(&mut self, id: UserId) -> Result<Vec<User>, StoreError>;
}
