use capacity_schema::SchemaError;
use thiserror::Error;

/// Why a single API request did not produce data.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("session expired or not authorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("server returned {code}: {detail}")]
    Status { code: u16, detail: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid response: {0}")]
    Invalid(#[from] SchemaError),
}

impl ApiError {
    /// Map a non-2xx response. FastAPI puts its message under `detail`.
    pub fn from_status(code: u16, body: &str) -> Self {
        match code {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                code,
                detail: extract_detail(body),
            },
        }
    }
}

fn extract_detail(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    match parsed.as_ref().and_then(|v| v.get("detail")) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_auth_and_missing_statuses() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(404, r#"{"detail":"Hospital not found"}"#),
            ApiError::NotFound
        );
    }

    #[test]
    fn extracts_fastapi_detail() {
        assert_eq!(
            ApiError::from_status(400, r#"{"detail":"Insufficient observation data"}"#),
            ApiError::Status {
                code: 400,
                detail: "Insufficient observation data".into()
            }
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(
            ApiError::from_status(502, "Bad Gateway\n"),
            ApiError::Status {
                code: 502,
                detail: "Bad Gateway".into()
            }
        );
    }
}
