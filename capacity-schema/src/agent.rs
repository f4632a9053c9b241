use crate::{require, OpenMap, SchemaError, Staffing, Validate};
use serde::{Deserialize, Serialize};

/// Input sent to the agent endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub hospital_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub current_metrics: OpenMap,
    pub environmental_context: OpenMap,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentAskRequest {
    pub observation: Observation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentAction {
    pub agent_type: String,
    pub action: OpenMap,
    pub reasoning_trace: Vec<String>,
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub recommended_staffing: Staffing,
    pub recommended_supplies: OpenMap,
    pub confidence: f64,
    #[serde(default)]
    pub messages_for_public: Vec<String>,
    #[serde(default)]
    pub suggested_triage_templates: Vec<OpenMap>,
    #[serde(default)]
    pub evidence: Vec<OpenMap>,
    #[serde(default)]
    pub agent_actions: Vec<AgentAction>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentAskResponse {
    pub action_plan: ActionPlan,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Validate for AgentAskRequest {
    fn validate(&self) -> Result<(), SchemaError> {
        require("hospital_id", &self.observation.hospital_id)
    }
}

impl Validate for AgentAction {
    fn validate(&self) -> Result<(), SchemaError> {
        require("agent_type", &self.agent_type)
    }
}

impl Validate for ActionPlan {
    fn validate(&self) -> Result<(), SchemaError> {
        self.recommended_supplies
            .require_scalars("recommended_supplies")?;
        self.agent_actions.validate()
    }
}

impl Validate for AgentAskResponse {
    fn validate(&self) -> Result<(), SchemaError> {
        self.action_plan.validate()
    }
}
