use crate::error::ApiError;
use crate::session::Session;
use capacity_schema::{
    ActionPlan, AgentAskRequest, AgentAskResponse, Forecast, Hospital, LoginRequest,
    Recommendation, Token, User, Validate,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Moves one request over the wire. `Err` means the request never got a
/// response (network failure, CORS, aborted).
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForecastWindow {
    OneHour,
    SixHours,
    #[default]
    Day,
}

impl ForecastWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastWindow::OneHour => "1h",
            ForecastWindow::SixHours => "6h",
            ForecastWindow::Day => "24h",
        }
    }

    pub fn hours(&self) -> u32 {
        match self {
            ForecastWindow::OneHour => 1,
            ForecastWindow::SixHours => 6,
            ForecastWindow::Day => 24,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1h" => Some(ForecastWindow::OneHour),
            "6h" => Some(ForecastWindow::SixHours),
            "24h" => Some(ForecastWindow::Day),
            _ => None,
        }
    }
}

/// The one configured request object every page goes through.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    bearer: Option<String>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            bearer: None,
            transport,
        }
    }

    /// Attach the session's token, if it has one.
    pub fn with_session(mut self, session: &Session) -> Self {
        self.bearer = session.bearer().map(ToString::to_string);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<D>(&self, path: &str) -> Result<ApiResponse<D>, ApiError>
    where
        D: DeserializeOwned + Validate,
    {
        self.send(Method::Get, path, None).await
    }

    pub async fn post<B, D>(&self, path: &str, body: &B) -> Result<ApiResponse<D>, ApiError>
    where
        B: Serialize,
        D: DeserializeOwned + Validate,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
        self.send(Method::Post, path, Some(body)).await
    }

    async fn send<D>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse<D>, ApiError>
    where
        D: DeserializeOwned + Validate,
    {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = &self.bearer {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };
        log::debug!("{} {}", method.as_str(), request.url);

        let url = request.url.clone();
        let response = self.transport.execute(request).await.map_err(|e| {
            log::warn!("{} {url} failed: {e}", method.as_str());
            ApiError::Transport(e)
        })?;

        if !(200..300).contains(&response.status) {
            let err = ApiError::from_status(response.status, &response.body);
            log::warn!("{} {url} -> {err}", method.as_str());
            return Err(err);
        }

        let data: D = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        data.validate()?;

        Ok(ApiResponse {
            status: response.status,
            data,
        })
    }

    pub async fn hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        self.get("/hospitals").await.map(|r| r.data)
    }

    pub async fn hospital(&self, id: &str) -> Result<Hospital, ApiError> {
        self.get(&format!("/hospitals/{}", segment(id)))
            .await
            .map(|r| r.data)
    }

    pub async fn forecasts(
        &self,
        hospital_id: &str,
        window: ForecastWindow,
    ) -> Result<Vec<Forecast>, ApiError> {
        let path = format!(
            "/forecasts/hospital/{}?{}",
            segment(hospital_id),
            query(&[("window", window.as_str())])
        );
        self.get(&path).await.map(|r| r.data)
    }

    /// Newest first, as the backend orders them.
    pub async fn recommendations(&self, hospital_id: &str) -> Result<Vec<Recommendation>, ApiError> {
        let path = format!("/recommendations?{}", query(&[("hospital_id", hospital_id)]));
        self.get(&path).await.map(|r| r.data)
    }

    pub async fn ask_agents(&self, request: &AgentAskRequest) -> Result<ActionPlan, ApiError> {
        self.post::<_, AgentAskResponse>("/agents/ask", request)
            .await
            .map(|r| r.data.action_plan)
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<Token, ApiError> {
        self.post("/auth/login", credentials).await.map(|r| r.data)
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await.map(|r| r.data)
    }
}

fn segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
