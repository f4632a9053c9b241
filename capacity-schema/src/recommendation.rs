use crate::{require, OpenMap, SchemaError, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Staffing {
    pub doctors: u32,
    pub nurses: u32,
}

/// Review status of a recommendation. The backend writes new rows as
/// `proposed`, which is treated the same as `pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    #[serde(alias = "proposed")]
    Pending,
    Approved,
    Rejected,
    Modified,
    #[serde(other)]
    Unknown,
}

impl RecommendationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationStatus::Pending => "pending",
            RecommendationStatus::Approved => "approved",
            RecommendationStatus::Rejected => "rejected",
            RecommendationStatus::Modified => "modified",
            RecommendationStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub recommended_staffing: Staffing,
    pub recommended_supplies: OpenMap,
    pub confidence: f64,
    pub status: RecommendationStatus,
}

impl Validate for Recommendation {
    fn validate(&self) -> Result<(), SchemaError> {
        require("id", &self.id)?;
        self.recommended_supplies
            .require_scalars("recommended_supplies")
    }
}
