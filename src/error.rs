use thiserror::Error;

pub type Result<T> = std::result::Result<T, UtilError>;

/// Errors returned by the helpers in [`crate::utils`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl UtilError {
    /// Build a `TypeMismatch` for a JSON value that has the wrong shape
    pub fn mismatch(expected: &'static str, found: &serde_json::Value) -> Self {
        UtilError::TypeMismatch {
            expected,
            found: json_type_name(found),
        }
    }
}

/// Name of a JSON value's type, as used in error messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
