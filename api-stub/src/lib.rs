//! Development server for the dashboard. Serves the hospital-capacity REST
//! contract from seeded in-memory fixtures so the UI can run without the real
//! backend. There is no forecasting here; every answer is canned.

pub mod agents;
pub mod auth;
pub mod error;
pub mod fixtures;
pub mod routes;

use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;

pub use error::StubError;

/// Everything is mounted under this prefix, matching the dashboard default.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone)]
pub struct AppState {
    pub fixtures: Arc<fixtures::Fixtures>,
    pub sessions: Arc<auth::Sessions>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            fixtures: Arc::new(fixtures::Fixtures::seeded()),
            sessions: Arc::new(auth::Sessions::default()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/hospitals", get(routes::list_hospitals))
        .route("/hospitals/:id", get(routes::get_hospital))
        .route("/forecasts/hospital/:id", get(routes::hospital_forecasts))
        .route("/recommendations", get(routes::list_recommendations))
        .route("/agents/ask", post(routes::ask_agents))
        .route("/auth/me", get(auth::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    let api = Router::new()
        .route("/auth/login", post(auth::login))
        .merge(protected);

    Router::new().nest(API_PREFIX, api).with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    pub async fn call(
        app: Router,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{API_PREFIX}{path}"));
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    /// Signs in on `state` and returns the issued token.
    pub async fn sign_in(state: &AppState) -> String {
        let (status, body) = call(
            router(state.clone()),
            "POST",
            "/auth/login",
            None,
            Some(serde_json::json!({"email": "ops@example.org", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().expect("token").to_string()
    }
}
