use std::fmt;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "/api/v1";
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required configuration '{key}'")]
    Missing { key: &'static str },
    #[error("invalid configuration '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct MapConfig {
    pub access_token: String,
    pub style: String,
}

impl fmt::Debug for MapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapConfig")
            .field("access_token", &"<redacted>")
            .field("style", &self.style)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub map: MapConfig,
}

impl DashboardConfig {
    pub const API_BASE_URL: &'static str = "api-base-url";
    pub const MAPBOX_TOKEN: &'static str = "mapbox-token";
    pub const MAP_STYLE: &'static str = "map-style";

    /// Build from a key lookup. The map token has no default and a missing
    /// or blank value is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = get(Self::API_BASE_URL)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        validate_base_url(&api_base_url)?;

        let access_token = get(Self::MAPBOX_TOKEN).ok_or(ConfigError::Missing {
            key: Self::MAPBOX_TOKEN,
        })?;
        let style = get(Self::MAP_STYLE).unwrap_or_else(|| DEFAULT_MAP_STYLE.to_string());

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            map: MapConfig {
                access_token,
                style,
            },
        })
    }
}

fn validate_base_url(value: &str) -> Result<(), ConfigError> {
    if value.starts_with('/') {
        return Ok(());
    }
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigError::Invalid {
            key: DashboardConfig::API_BASE_URL,
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        }),
        Err(e) => Err(ConfigError::Invalid {
            key: DashboardConfig::API_BASE_URL,
            reason: e.to_string(),
        }),
    }
}
