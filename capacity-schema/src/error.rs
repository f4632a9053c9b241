use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
    #[error("{field}.{key} must be a number or a string")]
    NotScalar { field: &'static str, key: String },
}
