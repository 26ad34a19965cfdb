//! User repository port
//!
//! Storage for registered users. The only adapter shipped is in-memory;
//! persistence is outside this project's scope.

use pluggable_domain::{EmailAddress, NewUser, User};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("A user with email {0} already exists")]
    DuplicateEmail(EmailAddress),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Port for storing and listing users
pub trait UserRepository: Send + Sync {
    /// Store a validated user and assign it an id
    fn save(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// All users, ordered by id
    fn list(&self) -> Result<Vec<User>, RepositoryError>;
}
