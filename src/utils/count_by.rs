/// Grouped counting: bucket elements by a derived key and count each bucket
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde_json::{Number, Value};

use crate::error::{Result, UtilError};

/// Something that derives a classification key from an element
pub trait KeyExtractor<T> {
    type Key: Eq + Hash;

    /// Derive the key for a single element
    fn extract(&self, item: &T) -> Result<Self::Key>;
}

/// Key extractor backed by a closure
pub struct Callable<F>(pub F);

impl<T, K, F> KeyExtractor<T> for Callable<F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    type Key = K;

    fn extract(&self, item: &T) -> Result<K> {
        Ok((self.0)(item))
    }
}

/// Key extractor that reads a named field from a JSON value
#[derive(Debug, Clone)]
pub struct Field(pub String);

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Hashable projection of a JSON scalar.
///
/// `Undefined` is the bucket for elements that do not carry the field at all,
/// which is distinct from a field explicitly set to `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Undefined,
    Null,
    Bool(bool),
    /// Canonical text of the number, so `4` and `4.0` share a key
    Number(String),
    String(String),
}

impl TryFrom<&Value> for ValueKey {
    type Error = UtilError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(ValueKey::Null),
            Value::Bool(b) => Ok(ValueKey::Bool(*b)),
            Value::Number(n) => Ok(ValueKey::Number(canonical_number(n))),
            Value::String(s) => Ok(ValueKey::String(s.clone())),
            other => Err(UtilError::mismatch("hashable scalar", other)),
        }
    }
}

/// Text of a number that is equal for equal values, with `-0` folded into `0`
fn canonical_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        // f64 Display prints integral floats without a fraction
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn length_key(len: usize) -> ValueKey {
    ValueKey::Number(len.to_string())
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKey::Undefined => write!(f, "undefined"),
            ValueKey::Null => write!(f, "null"),
            ValueKey::Bool(b) => write!(f, "{}", b),
            ValueKey::Number(n) => write!(f, "{}", n),
            ValueKey::String(s) => write!(f, "{}", s),
        }
    }
}

impl KeyExtractor<Value> for Field {
    type Key = ValueKey;

    /// Objects resolve the field by name. Strings and arrays resolve `length`
    /// and numeric indexes. Anything else has no fields.
    fn extract(&self, item: &Value) -> Result<ValueKey> {
        let name = self.0.as_str();
        let index = name.parse::<usize>().ok();

        match item {
            Value::Object(entries) => match entries.get(name) {
                Some(value) => ValueKey::try_from(value),
                None => Ok(ValueKey::Undefined),
            },
            Value::String(s) if name == "length" => Ok(length_key(s.chars().count())),
            Value::String(s) => Ok(index
                .and_then(|i| s.chars().nth(i))
                .map_or(ValueKey::Undefined, |c| ValueKey::String(c.to_string()))),
            Value::Array(items) if name == "length" => Ok(length_key(items.len())),
            Value::Array(items) => match index.and_then(|i| items.get(i)) {
                Some(value) => ValueKey::try_from(value),
                None => Ok(ValueKey::Undefined),
            },
            _ => Ok(ValueKey::Undefined),
        }
    }
}

/// Count elements per key produced by `key_fn`
pub fn count_by<T, K, F>(items: &[T], key_fn: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();

    for item in items {
        *counts.entry(key_fn(item)).or_default() += 1;
    }

    counts
}

/// Count elements per key produced by any [`KeyExtractor`].
///
/// Stops at the first element whose key cannot be derived.
pub fn count_by_with<T, E>(items: &[T], extractor: &E) -> Result<HashMap<E::Key, usize>>
where
    E: KeyExtractor<T>,
{
    let mut counts: HashMap<E::Key, usize> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        let key = extractor.extract(item).inspect_err(|e| {
            tracing::debug!("Key extraction failed at index {}: {}", index, e);
        })?;
        *counts.entry(key).or_default() += 1;
    }

    Ok(counts)
}

/// Count JSON elements by the value of a named field
pub fn count_by_field(items: &[Value], field: &str) -> Result<HashMap<ValueKey, usize>> {
    count_by_with(items, &Field::new(field))
}
