//! Constructor arguments.

use crate::annotation::{
    AnnotationMetadata, AnnotationMetadataDelegate, EmptyAnnotationMetadata,
    SharedAnnotationMetadata,
};
use crate::beans::TypeRef;

/// A named, typed constructor argument with its own annotation metadata.
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    ty: TypeRef,
    annotation_metadata: SharedAnnotationMetadata,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotation_metadata: EmptyAnnotationMetadata::shared(),
        }
    }

    pub fn with_annotation_metadata(mut self, metadata: SharedAnnotationMetadata) -> Self {
        self.annotation_metadata = metadata;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

impl AnnotationMetadataDelegate for Argument {
    fn annotation_metadata(&self) -> &dyn AnnotationMetadata {
        &*self.annotation_metadata
    }
}
