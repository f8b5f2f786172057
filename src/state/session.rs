//! Session flag state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is a single browser-local flag: key `"auth"`, value
//! `"true"` or absent. `App` provides the typed state as
//! `RwSignal<SessionState>` context so the access gate and the login
//! page share one accessor instead of re-reading string-keyed storage.
//! There is no logout and no expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// localStorage key holding the session flag.
pub const STORAGE_KEY: &str = "auth";
/// The only value that counts as an authenticated session.
pub const STORAGE_TRUE: &str = "true";

/// Typed view of the session flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
}

impl SessionState {
    /// Initial state, read from the persisted flag. Absent or unknown
    /// values mean unauthenticated.
    pub fn from_storage() -> Self {
        Self {
            authenticated: flag_means_authenticated(storage::read_item(STORAGE_KEY).as_deref()),
        }
    }

    /// The login transition. Persistence is a separate step
    /// ([`persist_login`]) so this stays pure.
    pub fn login(&mut self) {
        self.authenticated = true;
    }
}

/// True iff the raw flag value is exactly `"true"`.
pub fn flag_means_authenticated(raw: Option<&str>) -> bool {
    raw == Some(STORAGE_TRUE)
}

/// Write the session flag. The flag is never cleared.
pub fn persist_login() {
    storage::write_item(STORAGE_KEY, STORAGE_TRUE);
}
