//! Bean introspection types.
//!
//! Property descriptors, constructor arguments, type references and the
//! `BeanIntrospection` reader API.

pub mod argument;
pub mod introspection;
pub mod property;
pub mod type_ref;

pub use argument::Argument;
pub use introspection::BeanIntrospection;
pub use property::{BeanProperty, PropertyGetter, PropertySetter};
pub use type_ref::{TypeRef, OBJECT_TYPE_NAME};
