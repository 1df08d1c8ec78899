use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use interfacing::{ExposeSecret, UserInfo};

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("No session stored")]
    Missing,

    #[error("Stored session is unreadable")]
    Storage(#[source] StorageError),
}

/// Signed in administrator, handed to every API client explicitly.
#[derive(Clone, Debug)]
pub struct Session {
    user: UserInfo,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.user.id == other.user.id
            && self.user.token.expose_secret() == other.user.token.expose_secret()
    }
}

impl Session {
    pub fn new(user: UserInfo) -> Self {
        Self { user }
    }

    /// Reads the session the login flow left in local storage.
    pub fn load(storage_key: &str) -> Result<Self, SessionError> {
        match LocalStorage::get::<UserInfo>(storage_key) {
            Ok(user) if !user.token.expose_secret().is_empty() => Ok(Self::new(user)),
            Ok(_) | Err(StorageError::KeyNotFound(_)) => Err(SessionError::Missing),
            Err(e) => Err(SessionError::Storage(e)),
        }
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.user.token.expose_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interfacing::SecretString;

    fn user(token: &str) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.org".into(),
            is_admin: true,
            token: SecretString::new(token.into()),
        }
    }

    #[test]
    fn bearer_header() {
        assert_eq!(Session::new(user("abc")).authorization(), "Bearer abc");
    }

    #[test]
    fn sessions_compare_by_user_and_token() {
        assert_eq!(Session::new(user("abc")), Session::new(user("abc")));
        assert_ne!(Session::new(user("abc")), Session::new(user("def")));
    }
}
