use crate::{require, SchemaError, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
            RiskCategory::Unknown => "unknown",
        }
    }
}

/// One predicted point. A list of these, in the order returned, is a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub id: String,
    pub predicted_arrivals: f64,
    pub confidence: f64,
    pub risk_category: RiskCategory,
    /// Hours ahead of `forecast_timestamp`.
    pub forecast_horizon: u32,
    pub forecast_timestamp: String,
}

impl Validate for Forecast {
    fn validate(&self) -> Result<(), SchemaError> {
        require("id", &self.id)?;
        if !self.predicted_arrivals.is_finite() {
            return Err(SchemaError::OutOfRange {
                field: "predicted_arrivals",
                value: self.predicted_arrivals.to_string(),
            });
        }
        Ok(())
    }
}
