//! Signed-in session
//!
//! Holds the bearer token and user returned by the API login call. The
//! context is an owned value handed by reference to whatever needs it;
//! there is no global token storage.

use shared::error::{AppError, AppResult};
use shared::models::SessionUser;

/// Current authentication state
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl SessionContext {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token and user of a successful login
    ///
    /// Replaces any previous session.
    pub fn login(&mut self, token: impl Into<String>, user: SessionUser) -> AppResult<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::invalid_token("token must not be empty"));
        }
        if let Some(previous) = &self.user {
            tracing::info!(previous = %previous.username, "Replacing active session");
        }
        tracing::info!(user_id = user.id, username = %user.username, "Session started");
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    /// Drop the session; returns whether one was active
    pub fn logout(&mut self) -> bool {
        let was_active = self.token.take().is_some();
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "Session ended");
        }
        was_active
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Get the token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// `Authorization` header value for the API client
    pub fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// The signed-in user, or `NotAuthenticated`
    pub fn require_user(&self) -> AppResult<&SessionUser> {
        self.user.as_ref().ok_or_else(AppError::not_authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn user(id: i64, username: &str) -> SessionUser {
        SessionUser {
            id,
            username: username.to_string(),
            display_name: None,
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_login_logout() {
        let mut session = SessionContext::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.auth_header(), None);

        session.login("abc.def", user(1, "rahim")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc.def"));
        assert_eq!(session.auth_header().as_deref(), Some("Bearer abc.def"));
        assert_eq!(session.require_user().unwrap().username, "rahim");

        assert!(session.logout());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.logout());
    }

    #[test]
    fn test_login_rejects_blank_token() {
        let mut session = SessionContext::new();
        let err = session.login("  ", user(1, "rahim")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_replaces_session() {
        let mut session = SessionContext::new();
        session.login("t1", user(1, "rahim")).unwrap();
        session.login("t2", user(2, "karim")).unwrap();
        assert_eq!(session.token(), Some("t2"));
        assert_eq!(session.user().unwrap().id, 2);
    }

    #[test]
    fn test_require_user_signed_out() {
        let session = SessionContext::new();
        assert_eq!(
            session.require_user().unwrap_err().code,
            ErrorCode::NotAuthenticated
        );
    }
}
