use crate::{require, SchemaError, Validate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
}

fn bearer() -> String {
    "bearer".into()
}

fn default_role() -> String {
    "HospitalOps".into()
}

fn active() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl Validate for Token {
    fn validate(&self) -> Result<(), SchemaError> {
        require("access_token", &self.access_token)
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), SchemaError> {
        require("email", &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_defaults_role_and_active_flag() {
        let user: User =
            serde_json::from_str(r#"{"id": "u1", "email": "ops@example.com"}"#).expect("decode");
        assert_eq!(user.role, "HospitalOps");
        assert!(user.is_active);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn token_type_defaults_to_bearer() {
        let token: Token = serde_json::from_str(r#"{"access_token": "abc"}"#).expect("decode");
        assert_eq!(token.token_type, "bearer");
    }
}
