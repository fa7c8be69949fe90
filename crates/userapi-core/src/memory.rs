//! In-memory implementation of [`UserStore`].
//!
//! [`InMemoryStore`] keeps records in a `Vec` and scans it linearly. Its
//! lifetime is the process lifetime; nothing is persisted.

use serde_json::Value;

use crate::error::StoreError;
use crate::traits::UserStore;
use crate::user::{User, UserId};

/// Ordered, in-memory user collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Vec<User>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Creates a store holding the three records the service starts with.
    pub fn seeded() -> Self {
        InMemoryStore::from_users(vec![
            User::new(1, "user1", "example@gmail.com"),
            User::new(2, "user2", "example2@gmail.com"),
            User::new(3, "user3", "example3@gmail.com"),
        ])
    }

    /// Creates a store holding `users` in the given order.
    pub fn from_users(users: Vec<User>) -> Self {
        InMemoryStore { users }
    }

    /// Number of stored records, duplicates included.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn find_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.has_id(id))
    }
}

impl UserStore for InMemoryStore {
    fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.clone())
    }

    fn get(&self, id: UserId) -> Result<User, StoreError> {
        self.users
            .iter()
            .find(|u| u.has_id(id))
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn create(&mut self, user: User) -> Result<User, StoreError> {
        self.users.push(user.clone());
        Ok(user)
    }

    fn update(
        &mut self,
        id: UserId,
        name: Option<Value>,
        email: Option<Value>,
    ) -> Result<User, StoreError> {
        let user = self.find_mut(id).ok_or(StoreError::NotFound { id })?;
        user.set_field("name", name);
        user.set_field("email", email);
        Ok(user.clone())
    }

    fn delete(&mut self, id: UserId) -> Result<Vec<User>, StoreError> {
        if !self.users.iter().any(|u| u.has_id(id)) {
            return Err(StoreError::NotFound { id });
        }
        self.users.retain(|u| !u.has_id(id));
        Ok(self.users.clone())
    }
}
