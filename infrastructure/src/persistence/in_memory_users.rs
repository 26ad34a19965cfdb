//! In-memory user repository

use pluggable_application::{RepositoryError, UserRepository};
use pluggable_domain::{NewUser, User, UserId};
use std::sync::Mutex;
use tracing::debug;

/// Stores users in a `Vec`, assigning ids from 1 in insertion order
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> RepositoryError {
        RepositoryError::Unavailable("user store poisoned".to_string())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().map_err(|_| Self::poisoned())?;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::DuplicateEmail(user.email));
        }

        let stored = User {
            id: UserId(users.len() as u64 + 1),
            email: user.email,
            name: user.name,
        };
        debug!(user_id = stored.id.0, "User stored");
        users.push(stored.clone());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.users
            .lock()
            .map(|users| users.clone())
            .map_err(|_| Self::poisoned())
    }
}
