use std::sync::Arc;

use verdict_domain::{DomainError, DomainResult, Failure};

use crate::store::UserStore;
use crate::user::User;

/// Wire code for the duplicate-email failure, doubling as its variant
/// identity for status mapping
pub const EMAIL_ALREADY_EXISTS: &str = "EMAIL_ALREADY_EXISTS";

fn email_already_exists(email: &str) -> DomainError {
    DomainError::custom(EMAIL_ALREADY_EXISTS, format!("email {email} already exists"))
        .with_metadata("email", email)
}

/// User operations returning results instead of raising
///
/// Expected failure modes travel as [`Failure`] values; the HTTP layer
/// decides what they mean on the wire.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Fails with a not-found error when no user has the id.
    pub fn get(&self, id: u64) -> DomainResult<User> {
        self.store
            .get(id)
            .ok_or_else(|| Failure::new(DomainError::not_found("User not found")))
    }

    /// All users
    ///
    /// # Errors
    ///
    /// Never fails for the in-memory store; fallible for store parity.
    pub fn get_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.store.list())
    }

    /// Create a user unless the email is taken
    ///
    /// # Errors
    ///
    /// Fails with the `EMAIL_ALREADY_EXISTS` error, carrying the attempted
    /// email as metadata, when another user holds the email.
    pub fn create(&self, user: User) -> DomainResult<User> {
        self.store
            .insert_if_absent(user)
            .map_err(|e| Failure::new(email_already_exists(&e.email)))
    }
}
