use std::sync::Mutex;

use thiserror::Error;

use crate::user::User;

/// Insert rejected because the email is already taken
#[derive(Debug, Error)]
#[error("email {email} already exists")]
pub struct DuplicateEmail {
    pub email: String,
}

/// Storage capability behind the user service
///
/// The same surface a real persistence layer would implement; the demo ships
/// an in-memory variant only.
pub trait UserStore: Send + Sync {
    /// Fetch a user by id
    fn get(&self, id: u64) -> Option<User>;

    /// All users in insertion order
    fn list(&self) -> Vec<User>;

    /// Insert unless the email is already taken
    ///
    /// The uniqueness check and the insert must be atomic with respect to
    /// concurrent callers.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateEmail`] when another user holds the email.
    fn insert_if_absent(&self, user: User) -> Result<User, DuplicateEmail>;
}

/// Process-lifetime in-memory store
///
/// A mutex guards the list; check-then-insert runs under a single guard so
/// concurrent creates cannot race in a duplicate email.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore for MemoryUserStore {
    fn get(&self, id: u64) -> Option<User> {
        let users = self.users.lock().expect("user store lock poisoned");
        users.iter().find(|u| u.id == id).cloned()
    }

    fn list(&self) -> Vec<User> {
        let users = self.users.lock().expect("user store lock poisoned");
        users.clone()
    }

    fn insert_if_absent(&self, user: User) -> Result<User, DuplicateEmail> {
        let mut users = self.users.lock().expect("user store lock poisoned");
        if users.iter().any(|u| u.email == user.email) {
            return Err(DuplicateEmail { email: user.email });
        }
        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn user(id: u64, email: &str) -> User {
        User { id, email: email.to_owned() }
    }

    #[test]
    fn inserted_users_are_retrievable() {
        let store = MemoryUserStore::default();
        store.insert_if_absent(user(1, "a@x.com")).unwrap();

        assert_eq!(store.get(1), Some(user(1, "a@x.com")));
        assert_eq!(store.get(2), None);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn duplicate_emails_are_rejected() {
        let store = MemoryUserStore::default();
        store.insert_if_absent(user(1, "a@x.com")).unwrap();

        let err = store.insert_if_absent(user(2, "a@x.com")).unwrap_err();
        assert_eq!(err.email, "a@x.com");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn concurrent_creates_admit_exactly_one_winner() {
        let store = Arc::new(MemoryUserStore::default());

        let handles: Vec<_> = (0..8)
            .map(|id| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert_if_absent(user(id, "shared@x.com")).is_ok())
            })
            .collect();

        let wins = handles.into_iter().map(|h| h.join().unwrap()).filter(|&won| won).count();
        assert_eq!(wins, 1);
        assert_eq!(store.list().len(), 1);
    }
}
