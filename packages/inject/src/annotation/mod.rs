//! Build-side annotation metadata.

pub mod default_annotation_metadata;

pub use default_annotation_metadata::DefaultAnnotationMetadata;
