//! Register User use case
//!
//! Validation, storage, welcome message and activity logging are separate
//! collaborators; this use case only sequences them.

use crate::ports::notifier::{NotificationError, Notifier};
use crate::ports::user_repository::{RepositoryError, UserRepository};
use pluggable_domain::{NewUser, User, UserValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub const WELCOME_SUBJECT: &str = "Welcome aboard";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterUserError {
    #[error(transparent)]
    Validation(#[from] UserValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("User {user_id} was created but the welcome message failed: {source}")]
    Welcome {
        user_id: u64,
        #[source]
        source: NotificationError,
    },
}

pub struct RegisterUserUseCase {
    repository: Arc<dyn UserRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RegisterUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Validate, store, and welcome a new user
    pub fn register(&self, email: &str, password: &str, name: &str) -> Result<User, RegisterUserError> {
        let new_user = NewUser::validate(email, password, name)?;
        let user = self.repository.save(new_user)?;

        let message = format!("Welcome aboard, {}!", user.name);
        self.notifier
            .send(user.email.as_str(), WELCOME_SUBJECT, &message)
            .map_err(|source| RegisterUserError::Welcome {
                user_id: user.id.0,
                source,
            })?;

        info!(user_id = user.id.0, channel = self.notifier.channel(), "User created");
        Ok(user)
    }
}

/// Renders a summary of registered users
pub struct UserReportUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UserReportUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn summary(&self) -> Result<String, RepositoryError> {
        let users = self.repository.list()?;
        let mut report = format!("Total users: {}\n", users.len());
        for user in &users {
            report.push_str(&format!("  {}: {}\n", user.id, user.email));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pluggable_domain::UserId;
    use std::sync::Mutex;

    #[derive(Default)]
    struct VecRepository {
        users: Mutex<Vec<User>>,
    }

    impl UserRepository for VecRepository {
        fn save(&self, user: NewUser) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(RepositoryError::DuplicateEmail(user.email));
            }
            let stored = User {
                id: UserId(users.len() as u64 + 1),
                email: user.email,
                name: user.name,
            };
            users.push(stored.clone());
            Ok(stored)
        }

        fn list(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(self.users.lock().unwrap().clone())
        }
    }

    #[derive(Default)]
    struct Mailbox {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl Notifier for Mailbox {
        fn channel(&self) -> &str {
            "mailbox"
        }

        fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), NotificationError> {
            self.sent
                .lock()
                .unwrap()
                .push((recipient.into(), subject.into(), message.into()));
            Ok(())
        }
    }

    struct Refusing;

    impl Notifier for Refusing {
        fn channel(&self) -> &str {
            "refusing"
        }

        fn send(&self, _recipient: &str, _subject: &str, _message: &str) -> Result<(), NotificationError> {
            Err(NotificationError::Delivery {
                channel: "refusing".into(),
                reason: "mailbox full".into(),
            })
        }
    }

    #[test]
    fn test_register_saves_and_welcomes() {
        let repository = Arc::new(VecRepository::default());
        let mailbox = Arc::new(Mailbox::default());
        let use_case = RegisterUserUseCase::new(repository.clone(), mailbox.clone());

        let user = use_case
            .register("alice@example.com", "password123", "Alice")
            .unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(
            mailbox.sent.lock().unwrap().as_slice(),
            &[(
                "alice@example.com".to_string(),
                "Welcome aboard".to_string(),
                "Welcome aboard, Alice!".to_string()
            )]
        );

        let summary = UserReportUseCase::new(repository).summary().unwrap();
        assert_eq!(summary, "Total users: 1\n  1: alice@example.com\n");
    }

    #[test]
    fn test_invalid_input_stores_nothing() {
        let repository = Arc::new(VecRepository::default());
        let mailbox = Arc::new(Mailbox::default());
        let use_case = RegisterUserUseCase::new(repository.clone(), mailbox.clone());

        assert_eq!(
            use_case.register("not-an-email", "password123", "Bob"),
            Err(RegisterUserError::Validation(UserValidationError::InvalidEmail(
                "not-an-email".into()
            )))
        );
        assert_eq!(
            use_case.register("bob@example.com", "short", "Bob"),
            Err(RegisterUserError::Validation(UserValidationError::PasswordTooShort))
        );
        assert!(repository.list().unwrap().is_empty());
        assert!(mailbox.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let repository = Arc::new(VecRepository::default());
        let use_case = RegisterUserUseCase::new(repository, Arc::new(Mailbox::default()));
        use_case.register("a@b.io", "password123", "A").unwrap();
        assert!(matches!(
            use_case.register("a@b.io", "password456", "B"),
            Err(RegisterUserError::Repository(RepositoryError::DuplicateEmail(_)))
        ));
    }

    #[test]
    fn test_welcome_failure_reports_created_user() {
        let repository = Arc::new(VecRepository::default());
        let use_case = RegisterUserUseCase::new(repository.clone(), Arc::new(Refusing));

        let err = use_case.register("a@b.io", "password123", "A").unwrap_err();

        assert!(matches!(err, RegisterUserError::Welcome { user_id: 1, .. }));
        assert_eq!(repository.list().unwrap().len(), 1);
    }
}
