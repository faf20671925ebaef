//! Response-target data holder.

use crate::error::PayloadError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// String-keyed data supplied to a response target.
///
/// Targets typically hold one of these and feed it to their representation
/// handlers. Accessing a field that was never supplied is a hard error
/// naming the owning target and the field, so typos surface immediately
/// instead of rendering as empty values.
///
/// # Example
///
/// ```rust,ignore
/// let payload = Payload::for_target::<Report>()
///     .with("title", "Quarterly numbers")
///     .with("rows", rows);
///
/// let title: String = payload.field("title")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Payload {
    owner: &'static str,
    values: HashMap<String, Value>,
}

impl Payload {
    /// An empty payload owned by target type `T`.
    ///
    /// The owner only affects error messages; it names the type reported by
    /// unknown-attribute failures.
    pub fn for_target<T: ?Sized>() -> Self {
        Self {
            owner: std::any::type_name::<T>(),
            values: HashMap::new(),
        }
    }

    /// Add one field, overriding any earlier value for the same key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Merge another payload in; its keys win on conflict.
    pub fn merge(&mut self, other: Payload) {
        self.values.extend(other.values);
    }

    /// The raw value for a field.
    pub fn get(&self, field: &str) -> Result<&Value, PayloadError> {
        self.values
            .get(field)
            .ok_or_else(|| PayloadError::UnknownAttribute {
                target: self.owner,
                field: field.to_string(),
            })
    }

    /// The value for a field, decoded into `T`.
    pub fn field<T: DeserializeOwned>(&self, field: &str) -> Result<T, PayloadError> {
        let value = self.get(field)?;

        serde_json::from_value(value.clone()).map_err(|source| PayloadError::Decode {
            field: field.to_string(),
            source,
        })
    }

    /// Whether a field was supplied.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}
