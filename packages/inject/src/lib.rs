#![deny(clippy::all)]

/**
 * Introspect Inject
 *
 * Build-side implementations populated by generated code: the annotation
 * metadata store, the property index and bean introspections.
 */
pub mod annotation;
pub mod beans;

// Re-exports
pub use annotation::DefaultAnnotationMetadata;
pub use beans::{
    AbstractBeanIntrospection, BeanIntrospectionBuilder, Instantiator, PropertyIndex,
};
