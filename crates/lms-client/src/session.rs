//! Authenticated session handed to the client explicitly.

use std::fmt;

use lms_core::entities::AdminUser;
use lms_core::requests::SignInResponse;

/// Bearer token plus the admin it belongs to, when known.
///
/// The client never looks tokens up on its own; callers build a `Session`
/// from sign-in or configuration and pass it in.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    admin: Option<AdminUser>,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            admin: None,
        }
    }

    #[must_use]
    pub fn with_admin(mut self, admin: AdminUser) -> Self {
        self.admin = Some(admin);
        self
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub const fn admin(&self) -> Option<&AdminUser> {
        self.admin.as_ref()
    }

    /// Admin id from the signed-in profile, if any.
    #[must_use]
    pub fn admin_id(&self) -> Option<i64> {
        self.admin.as_ref().map(|a| a.id)
    }
}

impl From<SignInResponse> for Session {
    fn from(response: SignInResponse) -> Self {
        Self::new(response.access_token).with_admin(response.user)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_token() {
        let session = Session::new("secret-token");
        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn sign_in_response_becomes_session() {
        let response = SignInResponse {
            access_token: "abc".into(),
            user: AdminUser {
                id: 9,
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                email: "grace@example.com".into(),
                role: "admin".into(),
                kind: "admin".into(),
            },
        };
        let session = Session::from(response);
        assert_eq!(session.token(), "abc");
        assert_eq!(session.admin_id(), Some(9));
    }
}
