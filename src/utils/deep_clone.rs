/// Deep structural copies of nested data
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::{Result, UtilError};

/// Copy a JSON value by walking it.
///
/// Leaves are copied by value, arrays element by element in order, objects
/// key by key. The result shares no container with `value`.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), deep_clone(value)))
                .collect::<Map<String, Value>>(),
        ),
        leaf => leaf.clone(),
    }
}

/// Copy any serializable value by round-tripping it through JSON.
///
/// Fails with `TypeMismatch` when the value is not plain JSON data, e.g. a
/// map keyed by something other than strings or numbers.
pub fn deep_clone_json<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_value(value).map_err(|e| {
        tracing::debug!("Value is not representable as JSON: {}", e);
        UtilError::TypeMismatch {
            expected: "plain JSON data",
            found: "unserializable value",
        }
    })?;

    serde_json::from_value(encoded).map_err(|e| {
        tracing::debug!("JSON copy does not decode back to the source type: {}", e);
        UtilError::TypeMismatch {
            expected: "plain JSON data",
            found: "value that does not round-trip",
        }
    })
}
