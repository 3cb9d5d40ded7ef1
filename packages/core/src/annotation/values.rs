//! Annotation member values.
//!
//! Member values are dynamic (`serde_json::Value`) and stored in insertion
//! order. Conversion to concrete types goes through serde.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

/// A single annotation member value: scalar, array or nested object.
pub type AnnotationValue = serde_json::Value;

/// Ordered member name to value mapping for one annotation usage.
pub type MemberValues = IndexMap<String, AnnotationValue>;

/// Shared empty mapping backing presence-only annotations. Never mutated.
static EMPTY_VALUES: Lazy<MemberValues> = Lazy::new(MemberValues::new);

pub fn empty_values() -> &'static MemberValues {
    &EMPTY_VALUES
}

/// Convert a JSON object into member values, keeping key order.
/// Anything other than an object yields an empty mapping.
pub fn member_values_from_json(value: AnnotationValue) -> MemberValues {
    match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => MemberValues::new(),
    }
}

/// Read-only view over the member values of one annotation.
#[derive(Debug, Clone, Copy)]
pub struct ConvertibleValues<'a> {
    values: &'a MemberValues,
}

impl<'a> ConvertibleValues<'a> {
    pub fn of(values: &'a MemberValues) -> Self {
        Self { values }
    }

    pub fn empty() -> ConvertibleValues<'static> {
        ConvertibleValues {
            values: empty_values(),
        }
    }

    pub fn get(&self, member: &str) -> Option<&'a AnnotationValue> {
        self.values.get(member)
    }

    /// Convert a member to `T`. Returns `None` when the member is absent or
    /// cannot be represented as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, member: &str) -> Option<T> {
        self.values
            .get(member)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn contains(&self, member: &str) -> bool {
        self.values.contains_key(member)
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a AnnotationValue)> + 'a {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &'a MemberValues {
        self.values
    }
}

impl PartialEq<MemberValues> for ConvertibleValues<'_> {
    fn eq(&self, other: &MemberValues) -> bool {
        self.values == other
    }
}
