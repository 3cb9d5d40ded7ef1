//! Annotation metadata contracts.
//!
//! Types for querying annotation member values computed at build time:
//! the `AnnotationMetadata` trait, the delegate used by types that expose
//! their own metadata, and the `ConvertibleValues` view over member values.

pub mod metadata;
pub mod values;

pub use metadata::{
    AnnotationMetadata, AnnotationMetadataDelegate, EmptyAnnotationMetadata,
    SharedAnnotationMetadata, EMPTY_METADATA,
};
pub use values::{
    empty_values, member_values_from_json, AnnotationValue, ConvertibleValues, MemberValues,
};
