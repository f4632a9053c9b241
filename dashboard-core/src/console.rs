//! Agent console: observation form and submission state.

use crate::error::ApiError;
use capacity_schema::{ActionPlan, AgentAskRequest, Observation, OpenMap};
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("select a hospital first")]
    NoHospital,
    #[error("a request is already in flight")]
    InFlight,
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
}

/// Raw text of the observation inputs. Defaults are the demo values the
/// agent endpoint was first exercised with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservationForm {
    pub current_patients: String,
    pub new_arrivals: String,
    pub aqi: String,
    pub temperature: String,
    pub humidity: String,
    /// Comma-separated ICD-10 codes, e.g. `R50.9, R06.02`.
    pub complaint_codes: String,
}

impl Default for ObservationForm {
    fn default() -> Self {
        Self {
            current_patients: "50".into(),
            new_arrivals: "5".into(),
            aqi: "75".into(),
            temperature: "25".into(),
            humidity: "60".into(),
            complaint_codes: String::new(),
        }
    }
}

impl ObservationForm {
    pub fn build(&self, hospital_id: &str) -> Result<AgentAskRequest, SubmitError> {
        let hospital_id = hospital_id.trim();
        if hospital_id.is_empty() {
            return Err(SubmitError::NoHospital);
        }

        let mut current_metrics = OpenMap::new()
            .with("current_patients", count("current_patients", &self.current_patients)?)
            .with("new_arrivals", count("new_arrivals", &self.new_arrivals)?);
        let codes = complaint_codes(&self.complaint_codes);
        if !codes.is_empty() {
            current_metrics.insert("primary_complaint_codes", codes);
        }

        let environmental_context = OpenMap::new()
            .with("aqi", count("aqi", &self.aqi)?)
            .with("temperature", measure("temperature", &self.temperature)?)
            .with("humidity", measure("humidity", &self.humidity)?);

        Ok(AgentAskRequest {
            observation: Observation {
                hospital_id: hospital_id.to_string(),
                event_id: None,
                current_metrics,
                environmental_context,
            },
        })
    }
}

fn count(field: &'static str, raw: &str) -> Result<u64, SubmitError> {
    raw.trim()
        .parse()
        .map_err(|_| SubmitError::NotANumber { field })
}

/// Whole numbers stay integers on the wire.
fn measure(field: &'static str, raw: &str) -> Result<Value, SubmitError> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i64>() {
        return Ok(Value::from(v));
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Value::from(v)),
        _ => Err(SubmitError::NotANumber { field }),
    }
}

fn complaint_codes(raw: &str) -> Vec<Value> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Value::from(s.to_uppercase()))
        .collect()
}

/// `Idle -> Submitting -> Succeeded | Failed`. A new submit from either end
/// state starts over; the previous result is not kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConsoleState {
    #[default]
    Idle,
    Submitting,
    Succeeded(ActionPlan),
    Failed(ApiError),
}

impl ConsoleState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, ConsoleState::Submitting)
    }

    pub fn can_submit(&self, selected_hospital: &str) -> bool {
        !selected_hospital.trim().is_empty() && !self.is_submitting()
    }

    /// Returns the request to send, moving to `Submitting`. On `Err` the
    /// state is untouched and nothing must be sent.
    pub fn begin(
        &mut self,
        selected_hospital: &str,
        form: &ObservationForm,
    ) -> Result<AgentAskRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let request = form.build(selected_hospital)?;
        *self = ConsoleState::Submitting;
        Ok(request)
    }

    pub fn finish(&mut self, result: Result<ActionPlan, ApiError>) {
        *self = match result {
            Ok(plan) => ConsoleState::Succeeded(plan),
            Err(err) => ConsoleState::Failed(err),
        };
    }

    pub fn plan(&self) -> Option<&ActionPlan> {
        match self {
            ConsoleState::Succeeded(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Processing..."
        } else {
            "Run Agents"
        }
    }
}
