//! Bean properties.
//!
//! A `BeanProperty` describes one structural property of an introspected type:
//! its name, value type, annotation metadata and generated accessors.

use crate::annotation::{
    AnnotationMetadata, AnnotationMetadataDelegate, AnnotationValue, EmptyAnnotationMetadata,
    SharedAnnotationMetadata,
};
use crate::beans::TypeRef;
use crate::error::{IntrospectionError, Result};
use std::fmt;

/// Generated read accessor.
pub type PropertyGetter<B> = fn(&B) -> AnnotationValue;

/// Generated write accessor. Fails when the value cannot be converted to the
/// property's type.
pub type PropertySetter<B> = fn(&mut B, AnnotationValue) -> Result<()>;

pub struct BeanProperty<B> {
    name: String,
    ty: TypeRef,
    annotation_metadata: SharedAnnotationMetadata,
    getter: Option<PropertyGetter<B>>,
    setter: Option<PropertySetter<B>>,
}

impl<B> BeanProperty<B> {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotation_metadata: EmptyAnnotationMetadata::shared(),
            getter: None,
            setter: None,
        }
    }

    pub fn with_annotation_metadata(mut self, metadata: SharedAnnotationMetadata) -> Self {
        self.annotation_metadata = metadata;
        self
    }

    pub fn with_getter(mut self, getter: PropertyGetter<B>) -> Self {
        self.getter = Some(getter);
        self
    }

    pub fn with_setter(mut self, setter: PropertySetter<B>) -> Self {
        self.setter = Some(setter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn is_read_only(&self) -> bool {
        self.is_readable() && !self.is_writable()
    }

    pub fn is_write_only(&self) -> bool {
        self.is_writable() && !self.is_readable()
    }

    pub fn get(&self, bean: &B) -> Result<AnnotationValue> {
        let getter = self
            .getter
            .ok_or_else(|| IntrospectionError::WriteOnlyProperty {
                property: self.name.clone(),
            })?;
        Ok(getter(bean))
    }

    pub fn set(&self, bean: &mut B, value: AnnotationValue) -> Result<()> {
        let setter = self
            .setter
            .ok_or_else(|| IntrospectionError::ReadOnlyProperty {
                property: self.name.clone(),
            })?;
        setter(bean, value)
    }
}

impl<B> AnnotationMetadataDelegate for BeanProperty<B> {
    fn annotation_metadata(&self) -> &dyn AnnotationMetadata {
        &*self.annotation_metadata
    }
}

// Manual impl: B need not be Debug.
impl<B> fmt::Debug for BeanProperty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanProperty")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}
