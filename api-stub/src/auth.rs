use crate::{AppState, StubError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use axum::{Extension, Json};
use capacity_schema::{LoginRequest, Token, User};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Issued tokens. Any non-empty credentials sign in; nothing is checked
/// against a user store.
#[derive(Default)]
pub struct Sessions {
    next: AtomicU64,
    users: Mutex<HashMap<String, User>>,
}

impl Sessions {
    pub fn issue(&self, email: &str) -> Token {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        let access_token = format!("stub-{n:08x}");
        let user = User {
            id: format!("user-{n}"),
            email: email.to_string(),
            full_name: None,
            role: "HospitalOps".into(),
            is_active: true,
        };
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(access_token.clone(), user);
        Token {
            access_token,
            token_type: "bearer".into(),
        }
    }

    pub fn user(&self, token: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Token>, StubError> {
    let Json(credentials) = payload.map_err(|e| StubError::Unprocessable(e.body_text()))?;
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(StubError::BadCredentials);
    }
    tracing::info!(%email, "signed in");
    Ok(Json(state.sessions.issue(email)))
}

pub async fn me(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}

/// Resolves the bearer token to a user and hands it to the handler as an
/// extension. Unknown or missing tokens stop here with 401.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StubError> {
    let user = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .and_then(|t| state.sessions.user(t));

    let Some(user) = user else {
        tracing::debug!(path = %request.uri().path(), "rejected request without valid token");
        return Err(StubError::Unauthorized);
    };
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router;
    use crate::test_support::{call, sign_in};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn login_then_me_returns_the_signed_in_user() {
        let state = AppState::seeded();
        let token = sign_in(&state).await;

        let (status, body) = call(router(state), "GET", "/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "ops@example.org");
        assert_eq!(body["role"], "HospitalOps");
        assert_eq!(body["is_active"], true);
    }

    #[tokio::test]
    async fn blank_credentials_are_refused() {
        let state = AppState::seeded();
        let (status, body) = call(
            router(state),
            "POST",
            "/auth/login",
            None,
            Some(json!({"email": " ", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Incorrect email or password");
    }

    #[tokio::test]
    async fn protected_routes_need_a_known_token() {
        let state = AppState::seeded();
        let (status, body) = call(router(state.clone()), "GET", "/hospitals", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Not authenticated");

        let (status, _) =
            call(router(state), "GET", "/hospitals", Some("stub-forged"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn issued_tokens_are_distinct() {
        let sessions = Sessions::default();
        let a = sessions.issue("a@example.org");
        let b = sessions.issue("a@example.org");
        assert_ne!(a.access_token, b.access_token);
        assert_eq!(a.token_type, "bearer");
        assert_eq!(
            sessions.user(&b.access_token).map(|u| u.email),
            Some("a@example.org".to_string())
        );
    }
}
