//! Browser side of the API client and of configuration lookup.

use dashboard_core::{ConfigError, DashboardConfig, HttpRequest, HttpResponse, Method, Transport};
use gloo_net::http::Request;

/// `fetch`-backed transport. Stateless; the client owns base URL and token.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder.body(body).map_err(|e| e.to_string())?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, body })
    }
}

/// `<meta name="festsafe:KEY">` wins over values baked in at build time.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    DashboardConfig::from_lookup(|key| meta_value(key).or_else(|| build_env(key).map(String::from)))
}

fn meta_value(key: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"festsafe:{key}\"]");
    let element = document.query_selector(&selector).ok()??;
    element
        .get_attribute("content")
        .filter(|v| !v.trim().is_empty())
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        DashboardConfig::API_BASE_URL => option_env!("FESTSAFE_API_BASE_URL"),
        DashboardConfig::MAPBOX_TOKEN => option_env!("FESTSAFE_MAPBOX_TOKEN"),
        DashboardConfig::MAP_STYLE => option_env!("FESTSAFE_MAP_STYLE"),
        _ => None,
    }
}
