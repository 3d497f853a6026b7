//! The current login credential.
//!
//! One credential is shared by the whole process. It starts out as an empty
//! user name and password, so reading it before anything was set is never an
//! error. The pair lives behind a single lock: `set` and `clear` replace both
//! fields at once and readers never see a user name from one call paired with
//! a password from another.

use std::fmt::{self, Debug, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A user name / password pair.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginCredential {
    pub user_name: String,
    pub password: String,
}

impl Debug for LoginCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredential")
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginCredential {
    pub const fn empty() -> Self {
        Self {
            user_name: String::new(),
            password: String::new(),
        }
    }

    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    /// `false` while no user name is set.
    pub fn is_set(&self) -> bool {
        !self.user_name.is_empty()
    }

    /// `"<user_name>:<password>"`, unescaped and unencoded.
    pub fn auth_string(&self) -> String {
        format!("{}:{}", self.user_name, self.password)
    }

    /// Value for an `Authorization` header: `Basic` plus the base64 of
    /// [`auth_string`](Self::auth_string).
    pub fn basic_auth_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.auth_string()))
    }
}

static CURRENT_LOGIN: RwLock<LoginCredential> = RwLock::new(LoginCredential::empty());

// A panic while holding the lock cannot leave a half-written pair behind, so a
// poisoned lock still holds a usable value.
fn read_current() -> RwLockReadGuard<'static, LoginCredential> {
    CURRENT_LOGIN.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_current() -> RwLockWriteGuard<'static, LoginCredential> {
    CURRENT_LOGIN.write().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the current login credential. The last call wins.
pub fn set_current_login_credential(user_name: impl Into<String>, password: impl Into<String>) {
    let credential = LoginCredential::new(user_name, password);
    tracing::debug!(user_name = %credential.user_name, "setting current login credential");
    *write_current() = credential;
}

/// Reset user name and password to empty strings.
pub fn clear_current_login_credential() {
    tracing::debug!("clearing current login credential");
    *write_current() = LoginCredential::empty();
}

/// The raw `"<user_name>:<password>"` string of the current credential.
///
/// Encoding it for a transport (e.g. base64 for Basic auth) is up to the caller.
pub fn current_login_auth_string() -> String {
    read_current().auth_string()
}

pub fn current_user_name() -> String {
    read_current().user_name.clone()
}

pub fn current_password() -> String {
    read_current().password.clone()
}

/// A consistent snapshot of both fields.
pub fn current_login_credential() -> LoginCredential {
    read_current().clone()
}

pub fn has_current_login_credential() -> bool {
    read_current().is_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global store is exercised in tests/credential_store.rs, which runs in
    // its own process.

    #[test]
    fn auth_string_joins_with_colon() {
        let credential = LoginCredential::new("dmadmin", "pa:ss");
        assert_eq!(credential.auth_string(), "dmadmin:pa:ss");
        assert_eq!(LoginCredential::default().auth_string(), ":");
    }

    #[test]
    fn basic_auth_header_is_base64_of_auth_string() {
        let credential = LoginCredential::new("Aladdin", "open sesame");
        assert_eq!(credential.basic_auth_header(), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn empty_credential_is_not_set() {
        assert!(!LoginCredential::empty().is_set());
        assert!(LoginCredential::new("u", "").is_set());
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", LoginCredential::new("alice", "secret"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret"));
    }
}
