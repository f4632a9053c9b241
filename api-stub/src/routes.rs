use crate::fixtures::{self, parse_window, GENERATED_AT};
use crate::{agents, AppState, StubError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use capacity_schema::{AgentAskRequest, AgentAskResponse, Forecast, Hospital, Recommendation, Validate};
use serde::Deserialize;

const HOSPITAL_NOT_FOUND: &str = "Hospital not found";

pub async fn list_hospitals(State(state): State<AppState>) -> Json<Vec<Hospital>> {
    Json(state.fixtures.hospitals.clone())
}

pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hospital>, StubError> {
    state
        .fixtures
        .hospital(&id)
        .cloned()
        .map(Json)
        .ok_or(StubError::NotFound(HOSPITAL_NOT_FOUND))
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub window: Option<String>,
}

pub async fn hospital_forecasts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Vec<Forecast>>, StubError> {
    let raw = query.window.as_deref().unwrap_or("24h");
    let hours = parse_window(raw)
        .ok_or_else(|| StubError::BadRequest(format!("Invalid forecast window: {raw}")))?;
    let hospital = state
        .fixtures
        .hospital(&id)
        .ok_or(StubError::NotFound(HOSPITAL_NOT_FOUND))?;
    tracing::debug!(hospital = %hospital.name, hours, "forecast series");
    Ok(Json(fixtures::forecasts(hospital, hours)))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub hospital_id: Option<String>,
}

pub async fn list_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<Vec<Recommendation>> {
    Json(state.fixtures.recommendations(query.hospital_id.as_deref()))
}

pub async fn ask_agents(
    State(state): State<AppState>,
    payload: Result<Json<AgentAskRequest>, JsonRejection>,
) -> Result<Json<AgentAskResponse>, StubError> {
    let Json(request) = payload.map_err(|e| StubError::Unprocessable(e.body_text()))?;
    request
        .validate()
        .map_err(|e| StubError::Unprocessable(e.to_string()))?;

    let observation = &request.observation;
    let hospital = state
        .fixtures
        .hospital(&observation.hospital_id)
        .ok_or(StubError::NotFound(HOSPITAL_NOT_FOUND))?;
    tracing::info!(hospital = %hospital.name, "agents asked");

    Ok(Json(AgentAskResponse {
        action_plan: agents::plan(observation),
        created_at: Some(GENERATED_AT.into()),
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{call, sign_in};
    use crate::{router, AppState};
    use axum::http::StatusCode;
    use serde_json::json;

    const SF_GENERAL: &str = "9b2f6c1e-3d4a-4f6b-8a1c-2e5d7f9a0b11";

    #[tokio::test]
    async fn lists_three_hospitals() {
        let state = AppState::seeded();
        let token = sign_in(&state).await;
        let (status, body) = call(router(state), "GET", "/hospitals", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().expect("array");
        assert_eq!(list.len(), 3);
        assert_eq!(list[0]["id"], SF_GENERAL);
    }

    #[tokio::test]
    async fn unknown_hospital_is_404_with_detail() {
        let state = AppState::seeded();
        let token = sign_in(&state).await;
        let (status, body) =
            call(router(state), "GET", "/hospitals/nope", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Hospital not found"}));
    }

    #[tokio::test]
    async fn forecast_window_sets_series_length() {
        let state = AppState::seeded();
        let token = sign_in(&state).await;
        for (window, len) in [("1h", 1), ("6h", 6), ("24h", 24)] {
            let path = format!("/forecasts/hospital/{SF_GENERAL}?window={window}");
            let (status, body) = call(router(state.clone()), "GET", &path, Some(&token), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.as_array().map(Vec::len), Some(len));
        }

        let path = format!("/forecasts/hospital/{SF_GENERAL}");
        let (_, body) = call(router(state.clone()), "GET", &path, Some(&token), None).await;
        assert_eq!(body.as_array().map(Vec::len), Some(24));

        let path = format!("/forecasts/hospital/{SF_GENERAL}?window=soon");
        let (status, _) = call(router(state), "GET", &path, Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn recommendations_filter_by_query() {
        let state = AppState::seeded();
        let token = sign_in(&state).await;
        let path = format!("/recommendations?hospital_id={SF_GENERAL}");
        let (status, body) = call(router(state), "GET", &path, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().expect("array");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["status"], "pending");
    }

    #[tokio::test]
    async fn agents_answer_for_known_hospital_only() {
        let state = AppState::seeded();
        let token = sign_in(&state).await;
        let ask = |hospital_id: &str| {
            json!({"observation": {
                "hospital_id": hospital_id,
                "current_metrics": {"current_patients": 50, "new_arrivals": 5},
                "environmental_context": {"aqi": 75, "temperature": 25, "humidity": 60}
            }})
        };

        let (status, body) = call(
            router(state.clone()),
            "POST",
            "/agents/ask",
            Some(&token),
            Some(ask(SF_GENERAL)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let actions = body["action_plan"]["agent_actions"].as_array().expect("actions");
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[2]["agent_type"], "communication");

        let (status, body) =
            call(router(state), "POST", "/agents/ask", Some(&token), Some(ask("nope"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Hospital not found");
    }
}
