//! Type references.
//!
//! A `TypeRef` names a type together with the supertypes it was declared with,
//! which is all the assignability information introspection needs.

use std::fmt;

/// Name of the top type every other type is assignable to.
pub const OBJECT_TYPE_NAME: &str = "object";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: String,
    supertypes: Vec<String>,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    /// Reference to a Rust type, named by `std::any::type_name`.
    pub fn of<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    pub fn object() -> Self {
        Self::named(OBJECT_TYPE_NAME)
    }

    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supertypes(&self) -> &[String] {
        &self.supertypes
    }

    pub fn is_object(&self) -> bool {
        self.name == OBJECT_TYPE_NAME
    }

    /// Whether a value of type `other` can be used where `self` is expected.
    pub fn is_assignable_from(&self, other: &TypeRef) -> bool {
        self.is_object()
            || self.name == other.name
            || other.supertypes.contains(&self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
