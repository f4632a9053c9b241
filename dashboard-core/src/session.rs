use capacity_schema::{Token, User};
use std::fmt;

/// Who is using the dashboard.
///
/// Built once at startup and handed down through context. `logout` is
/// terminal: an ended session never yields a token again, a fresh login
/// builds a new value.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    SignedIn {
        token: String,
        user: Option<User>,
    },
    Ended,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Anonymous => f.write_str("Anonymous"),
            Session::SignedIn { user, .. } => f
                .debug_struct("SignedIn")
                .field("token", &"<redacted>")
                .field("user", user)
                .finish(),
            Session::Ended => f.write_str("Ended"),
        }
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Session::Anonymous
    }

    pub fn signed_in(token: Token) -> Self {
        Session::SignedIn {
            token: token.access_token,
            user: None,
        }
    }

    pub fn with_user(self, user: User) -> Self {
        match self {
            Session::SignedIn { token, .. } => Session::SignedIn {
                token,
                user: Some(user),
            },
            other => other,
        }
    }

    pub fn bearer(&self) -> Option<&str> {
        match self {
            Session::SignedIn { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn { user, .. } => user.as_ref(),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::SignedIn { .. })
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Session::Ended)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            log::info!("logging out {}", user.email);
        }
        *self = Session::Ended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> Token {
        Token {
            access_token: "tok-1".into(),
            token_type: "bearer".into(),
        }
    }

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "ops@example.com".into(),
            full_name: None,
            role: "HospitalOps".into(),
            is_active: true,
        }
    }

    #[test]
    fn signed_in_session_exposes_bearer_and_user() {
        let session = Session::signed_in(token()).with_user(user());
        assert_eq!(session.bearer(), Some("tok-1"));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("ops@example.com"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn logout_is_terminal() {
        let mut session = Session::signed_in(token());
        session.logout();
        assert!(session.is_ended());
        assert_eq!(session.bearer(), None);

        let session = session.with_user(user());
        assert!(session.is_ended());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn anonymous_session_has_no_token() {
        let session = Session::anonymous().with_user(user());
        assert_eq!(session.bearer(), None);
        assert!(session.user().is_none());
    }

    #[test]
    fn debug_output_hides_the_token() {
        let session = Session::signed_in(token()).with_user(user());
        let printed = format!("{session:?}");
        assert!(!printed.contains("tok-1"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("ops@example.com"));
    }
}
