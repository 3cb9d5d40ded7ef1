//! Build-side bean introspection.

pub mod abstract_bean_introspection;
pub mod property_index;

pub use abstract_bean_introspection::{
    AbstractBeanIntrospection, BeanIntrospectionBuilder, Instantiator,
};
pub use property_index::PropertyIndex;
