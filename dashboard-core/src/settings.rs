use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
    #[error("low risk threshold ({low}) must be below high risk threshold ({high})")]
    ThresholdOrder { low: u32, high: u32 },
}

/// Values held for the current browser session only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub aqi_api_key: String,
    pub weather_api_key: String,
    pub low_risk_threshold: u32,
    pub high_risk_threshold: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            aqi_api_key: String::new(),
            weather_api_key: String::new(),
            low_risk_threshold: 5,
            high_risk_threshold: 15,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub aqi_api_key: String,
    pub weather_api_key: String,
    pub low_risk_threshold: String,
    pub high_risk_threshold: String,
}

impl From<&Settings> for SettingsForm {
    fn from(s: &Settings) -> Self {
        Self {
            aqi_api_key: s.aqi_api_key.clone(),
            weather_api_key: s.weather_api_key.clone(),
            low_risk_threshold: s.low_risk_threshold.to_string(),
            high_risk_threshold: s.high_risk_threshold.to_string(),
        }
    }
}

impl SettingsForm {
    pub fn apply_integrations(&self, current: &Settings) -> Settings {
        Settings {
            aqi_api_key: self.aqi_api_key.trim().to_string(),
            weather_api_key: self.weather_api_key.trim().to_string(),
            ..current.clone()
        }
    }

    pub fn apply_thresholds(&self, current: &Settings) -> Result<Settings, SettingsError> {
        let low = threshold("low_risk_threshold", &self.low_risk_threshold)?;
        let high = threshold("high_risk_threshold", &self.high_risk_threshold)?;
        if low >= high {
            return Err(SettingsError::ThresholdOrder { low, high });
        }
        Ok(Settings {
            low_risk_threshold: low,
            high_risk_threshold: high,
            ..current.clone()
        })
    }
}

fn threshold(field: &'static str, raw: &str) -> Result<u32, SettingsError> {
    raw.trim()
        .parse()
        .map_err(|_| SettingsError::NotANumber { field })
}
