//! Admin login sessions persisted under [`keys::ADMIN_SESSION`].
//!
//! There is a single built-in admin account. A successful login stores a
//! session that stays valid for 24 hours; reading an expired session removes
//! it.

use tracing::{info, warn};

use crate::{
    models::{Admin, AdminCredentials, AdminSession},
    storage::{keys, load, save, Store},
    util::now_millis,
    Result, StatsError,
};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";
pub const SESSION_TTL_MS: u64 = 24 * 60 * 60 * 1000;

pub struct AuthService<S: Store> {
    store: S,
}

impl<S: Store> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn login(&mut self, credentials: &AdminCredentials) -> Result<AdminSession> {
        self.login_at(credentials, now_millis())
    }

    /// Log in as of `now_ms` (milliseconds since the epoch).
    pub fn login_at(&mut self, credentials: &AdminCredentials, now_ms: u64) -> Result<AdminSession> {
        if credentials.username != DEFAULT_USERNAME || credentials.password != DEFAULT_PASSWORD {
            warn!(username = %credentials.username, "rejected admin login");
            return Err(StatsError::InvalidCredentials);
        }

        let session = AdminSession {
            admin: Admin {
                id: "1".to_string(),
                username: DEFAULT_USERNAME.to_string(),
                email: "admin@jeycasports.com".to_string(),
            },
            token: format!("token_{now_ms}"),
            expires_at: now_ms + SESSION_TTL_MS,
        };
        save(&mut self.store, keys::ADMIN_SESSION, &session)?;
        info!(username = %session.admin.username, "admin logged in");
        Ok(session)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.remove(keys::ADMIN_SESSION)?;
        info!("admin logged out");
        Ok(())
    }

    pub fn current_session(&mut self) -> Result<Option<AdminSession>> {
        self.current_session_at(now_millis())
    }

    /// The saved session if it is still valid at `now_ms`.
    pub fn current_session_at(&mut self, now_ms: u64) -> Result<Option<AdminSession>> {
        let Some(session) = load::<AdminSession, _>(&self.store, keys::ADMIN_SESSION)? else {
            return Ok(None);
        };
        if session.is_expired(now_ms) {
            info!("admin session expired");
            self.store.remove(keys::ADMIN_SESSION)?;
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Current session or [`StatsError::NotAuthenticated`].
    pub fn require_session(&mut self) -> Result<AdminSession> {
        self.current_session()?.ok_or(StatsError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const NOW: u64 = 1_720_000_000_000;

    fn credentials(username: &str, password: &str) -> AdminCredentials {
        AdminCredentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_creates_day_long_session() {
        let mut auth = AuthService::new(MemoryStore::new());
        let session = auth.login_at(&credentials("admin", "admin123"), NOW).unwrap();

        assert_eq!(session.token, format!("token_{NOW}"));
        assert_eq!(session.expires_at, NOW + SESSION_TTL_MS);
        assert_eq!(session.admin.email, "admin@jeycasports.com");
        assert_eq!(auth.current_session_at(NOW + 1).unwrap(), Some(session));
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let mut auth = AuthService::new(MemoryStore::new());

        for (user, pass) in [("admin", "wrong"), ("root", "admin123"), ("", "")] {
            assert!(matches!(
                auth.login_at(&credentials(user, pass), NOW),
                Err(StatsError::InvalidCredentials)
            ));
        }
        assert_eq!(auth.current_session_at(NOW).unwrap(), None);
    }

    #[test]
    fn test_expired_session_is_removed() {
        let mut auth = AuthService::new(MemoryStore::new());
        auth.login_at(&credentials("admin", "admin123"), NOW).unwrap();

        let later = NOW + SESSION_TTL_MS;
        assert_eq!(auth.current_session_at(later).unwrap(), None);

        let store = auth.into_store();
        assert!(store.get(keys::ADMIN_SESSION).unwrap().is_none());
    }

    #[test]
    fn test_logout() {
        let mut auth = AuthService::new(MemoryStore::new());
        auth.login_at(&credentials("admin", "admin123"), NOW).unwrap();
        auth.logout().unwrap();

        assert_eq!(auth.current_session_at(NOW).unwrap(), None);
        // logging out twice is fine
        auth.logout().unwrap();
    }

    #[test]
    fn test_require_session_without_login() {
        let mut auth = AuthService::new(MemoryStore::new());
        assert!(matches!(
            auth.require_session(),
            Err(StatsError::NotAuthenticated)
        ));
    }
}
