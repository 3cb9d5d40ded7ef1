//! Annotation metadata query contract.
//!
//! `AnnotationMetadata` answers presence and value queries by annotation
//! identity over three views: annotations declared directly on an element, all
//! annotations (declared plus those contributed transitively), and stereotypes
//! (meta-annotations reachable from the element).

use super::values::{AnnotationValue, ConvertibleValues};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Annotation metadata shared read-only between a type descriptor and its readers.
pub type SharedAnnotationMetadata = Arc<dyn AnnotationMetadata + Send + Sync>;

/// Read-only annotation queries. Empty or unknown identities yield `false` or
/// an empty result, never an error.
pub trait AnnotationMetadata: fmt::Debug {
    /// Whether `annotation` is written directly on the element.
    fn has_declared_annotation(&self, annotation: &str) -> bool;

    /// Whether `annotation` is present, directly or transitively.
    fn has_annotation(&self, annotation: &str) -> bool;

    /// Whether `annotation` is reachable as a meta-annotation.
    fn has_stereotype(&self, annotation: &str) -> bool;

    /// Member values of `annotation`. All-annotations entries win over stereotype
    /// entries; absent identities yield an empty mapping.
    fn get_values(&self, annotation: &str) -> ConvertibleValues<'_>;

    fn annotation_names(&self) -> Vec<&str>;

    fn declared_annotation_names(&self) -> Vec<&str>;

    fn stereotype_names(&self) -> Vec<&str>;

    fn get_value(&self, annotation: &str, member: &str) -> Option<&AnnotationValue> {
        self.get_values(annotation).get(member)
    }

    fn get_value_as<T: DeserializeOwned>(&self, annotation: &str, member: &str) -> Option<T>
    where
        Self: Sized,
    {
        self.get_values(annotation).get_as(member)
    }

    /// Whether `member` of `annotation` is the boolean `true`.
    fn is_true(&self, annotation: &str, member: &str) -> bool {
        matches!(
            self.get_value(annotation, member),
            Some(AnnotationValue::Bool(true))
        )
    }

    /// String form of a scalar member. Arrays, objects and nulls yield `None`.
    fn string_value(&self, annotation: &str, member: &str) -> Option<String> {
        match self.get_value(annotation, member)? {
            AnnotationValue::String(s) => Some(s.clone()),
            AnnotationValue::Bool(b) => Some(b.to_string()),
            AnnotationValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        self.annotation_names().is_empty() && self.stereotype_names().is_empty()
    }
}

/// Metadata with nothing recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyAnnotationMetadata;

pub static EMPTY_METADATA: EmptyAnnotationMetadata = EmptyAnnotationMetadata;

impl EmptyAnnotationMetadata {
    pub fn shared() -> SharedAnnotationMetadata {
        Arc::new(EmptyAnnotationMetadata)
    }
}

impl AnnotationMetadata for EmptyAnnotationMetadata {
    fn has_declared_annotation(&self, _annotation: &str) -> bool {
        false
    }

    fn has_annotation(&self, _annotation: &str) -> bool {
        false
    }

    fn has_stereotype(&self, _annotation: &str) -> bool {
        false
    }

    fn get_values(&self, _annotation: &str) -> ConvertibleValues<'_> {
        ConvertibleValues::empty()
    }

    fn annotation_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn declared_annotation_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn stereotype_names(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Forwards annotation queries to the metadata a type carries, so a property,
/// argument or introspection can be queried for its annotations directly.
pub trait AnnotationMetadataDelegate {
    fn annotation_metadata(&self) -> &dyn AnnotationMetadata;

    fn has_declared_annotation(&self, annotation: &str) -> bool {
        self.annotation_metadata().has_declared_annotation(annotation)
    }

    fn has_annotation(&self, annotation: &str) -> bool {
        self.annotation_metadata().has_annotation(annotation)
    }

    fn has_stereotype(&self, annotation: &str) -> bool {
        self.annotation_metadata().has_stereotype(annotation)
    }

    fn get_values(&self, annotation: &str) -> ConvertibleValues<'_> {
        self.annotation_metadata().get_values(annotation)
    }

    fn get_value(&self, annotation: &str, member: &str) -> Option<&AnnotationValue> {
        self.annotation_metadata().get_value(annotation, member)
    }

    fn get_value_as<T: DeserializeOwned>(&self, annotation: &str, member: &str) -> Option<T>
    where
        Self: Sized,
    {
        self.get_values(annotation).get_as(member)
    }

    fn is_true(&self, annotation: &str, member: &str) -> bool {
        self.annotation_metadata().is_true(annotation, member)
    }

    fn string_value(&self, annotation: &str, member: &str) -> Option<String> {
        self.annotation_metadata().string_value(annotation, member)
    }
}
