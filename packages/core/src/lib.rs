#![deny(clippy::all)]

/**
 * Introspect Core
 *
 * Read-side contracts for compile-time computed type metadata: annotation
 * queries, property descriptors and the introspection API.
 */
pub mod annotation;
pub mod beans;
pub mod config;
pub mod error;

// Re-exports
pub use annotation::{
    empty_values, member_values_from_json, AnnotationMetadata, AnnotationMetadataDelegate,
    AnnotationValue, ConvertibleValues, EmptyAnnotationMetadata, MemberValues,
    SharedAnnotationMetadata, EMPTY_METADATA,
};
pub use beans::{
    Argument, BeanIntrospection, BeanProperty, PropertyGetter, PropertySetter, TypeRef,
};
pub use config::IntrospectionConfig;
pub use error::{IntrospectionError, Result};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
