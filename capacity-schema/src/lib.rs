//! Wire view models for the hospital-capacity API.
//!
//! Every type here mirrors a response (or request) body of the external REST
//! API. Payloads are decoded with serde and then pushed through [`Validate`]
//! before anything renders them.

mod agent;
mod auth;
mod error;
mod forecast;
mod hospital;
mod open_map;
mod recommendation;

pub use agent::{ActionPlan, AgentAction, AgentAskRequest, AgentAskResponse, Observation};
pub use auth::{LoginRequest, Token, User};
pub use error::SchemaError;
pub use forecast::{Forecast, RiskCategory};
pub use hospital::Hospital;
pub use open_map::{display_value, OpenMap};
pub use recommendation::{Recommendation, RecommendationStatus, Staffing};

/// Shape checks applied at the point a payload is received.
pub trait Validate {
    fn validate(&self) -> Result<(), SchemaError>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), SchemaError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), SchemaError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), SchemaError> {
    if value.trim().is_empty() {
        return Err(SchemaError::Required { field });
    }
    Ok(())
}
