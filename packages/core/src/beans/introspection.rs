//! Bean introspection API.
//!
//! A `BeanIntrospection` is the result of build-time computation of a type's
//! properties and annotation metadata. It is published once, fully populated,
//! and read concurrently afterwards.

use crate::annotation::{AnnotationMetadataDelegate, AnnotationValue};
use crate::beans::{Argument, BeanProperty, TypeRef};
use crate::error::Result;

pub trait BeanIntrospection<B>: AnnotationMetadataDelegate {
    /// The introspected type.
    fn bean_type(&self) -> &TypeRef;

    /// All properties in declaration order.
    fn bean_properties(&self) -> Vec<&BeanProperty<B>>;

    /// Properties indexed under `annotation`, in indexing order. Empty when
    /// nothing was indexed for it.
    fn bean_properties_annotated_with(&self, annotation: &str) -> Vec<&BeanProperty<B>>;

    /// Create an instance through the no-argument constructor.
    fn instantiate(&self) -> Result<B>;

    /// Create an instance with arguments matching `constructor_arguments()`.
    fn instantiate_with(&self, arguments: &[AnnotationValue]) -> Result<B>;

    fn constructor_arguments(&self) -> &[Argument] {
        &[]
    }

    fn get_property(&self, name: &str) -> Option<&BeanProperty<B>> {
        self.bean_properties()
            .into_iter()
            .find(|property| property.name() == name)
    }

    /// Property called `name` whose type can be assigned to `ty`.
    fn get_property_of_type(&self, name: &str, ty: &TypeRef) -> Option<&BeanProperty<B>> {
        self.get_property(name)
            .filter(|property| ty.is_assignable_from(property.ty()))
    }

    // The returned names borrow from `BeanProperty<B>`, so `B` must outlive
    // the borrow of `self`.
    fn property_names<'a>(&'a self) -> Vec<&'a str>
    where
        B: 'a,
    {
        self.bean_properties()
            .into_iter()
            .map(BeanProperty::name)
            .collect()
    }
}
