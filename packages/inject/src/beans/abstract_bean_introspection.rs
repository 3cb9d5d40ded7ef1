//! Abstract Bean Introspection
//!
//! Generated code populates a `BeanIntrospectionBuilder` (annotation metadata,
//! property slots, annotation index, constructor) and publishes it with
//! `build()`. The published `AbstractBeanIntrospection` only exposes `&self`
//! queries, so population always completes before readers see it.

use crate::beans::PropertyIndex;
use introspect_core::annotation::{
    AnnotationMetadata, AnnotationMetadataDelegate, AnnotationValue, EmptyAnnotationMetadata,
    SharedAnnotationMetadata,
};
use introspect_core::beans::{Argument, BeanIntrospection, BeanProperty, TypeRef};
use introspect_core::error::{IntrospectionError, Result};
use introspect_core::IntrospectionConfig;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

/// Generated constructor. Receives arguments matching the declared
/// constructor arguments.
pub type Instantiator<B> = Box<dyn Fn(&[AnnotationValue]) -> Result<B> + Send + Sync>;

pub struct BeanIntrospectionBuilder<B> {
    bean_type: TypeRef,
    annotation_metadata: SharedAnnotationMetadata,
    properties: PropertyIndex<BeanProperty<B>>,
    constructor_arguments: Vec<Argument>,
    instantiator: Option<Instantiator<B>>,
    config: IntrospectionConfig,
}

impl<B> BeanIntrospectionBuilder<B> {
    pub fn new(bean_type: TypeRef, property_count: usize) -> Self {
        Self::with_config(bean_type, property_count, IntrospectionConfig::default())
    }

    pub fn with_config(
        bean_type: TypeRef,
        property_count: usize,
        config: IntrospectionConfig,
    ) -> Self {
        Self {
            bean_type,
            annotation_metadata: EmptyAnnotationMetadata::shared(),
            properties: PropertyIndex::with_capacity_hint(property_count, config.initial_capacity),
            constructor_arguments: Vec::new(),
            instantiator: None,
            config,
        }
    }

    /// Builder over a complete property array. Fails when the array length
    /// disagrees with `property_count`.
    pub fn with_properties(
        bean_type: TypeRef,
        property_count: usize,
        properties: Vec<BeanProperty<B>>,
    ) -> Result<Self> {
        let mut builder = Self::new(bean_type, 0);
        builder.properties = PropertyIndex::from_properties(property_count, properties)?;
        Ok(builder)
    }

    pub fn annotation_metadata(&mut self, metadata: SharedAnnotationMetadata) -> &mut Self {
        self.annotation_metadata = metadata;
        self
    }

    pub fn constructor_arguments(&mut self, arguments: Vec<Argument>) -> &mut Self {
        self.constructor_arguments = arguments;
        self
    }

    pub fn instantiator<F>(&mut self, instantiator: F) -> &mut Self
    where
        F: Fn(&[AnnotationValue]) -> Result<B> + Send + Sync + 'static,
    {
        self.instantiator = Some(Box::new(instantiator));
        self
    }

    /// Place `property` at its declaration slot.
    pub fn add_property(&mut self, index: usize, property: BeanProperty<B>) -> Result<&mut Self> {
        self.properties.set_slot(index, property)?;
        Ok(self)
    }

    /// Index the property in `slot` under `annotation`.
    pub fn index_property(&mut self, annotation: &str, slot: usize) -> &mut Self {
        self.properties.index_slot_by_annotation(annotation, slot);
        self
    }

    /// Validate population and publish the introspection.
    pub fn build(self) -> Result<AbstractBeanIntrospection<B>> {
        if self.config.require_complete_properties {
            self.properties.validate(self.bean_type.name())?;
        } else {
            let missing = self.properties.missing_slots();
            if !missing.is_empty() {
                warn!(
                    "publishing introspection for {} with unset property slots {:?}",
                    self.bean_type, missing
                );
            }
        }

        // First slot wins for duplicate names, matching the default `get_property`.
        let mut property_slots = HashMap::with_capacity(self.properties.len());
        for index in 0..self.properties.len() {
            if let Some(property) = self.properties.get(index) {
                property_slots
                    .entry(property.name().to_string())
                    .or_insert(index);
            }
        }

        debug!(
            "published introspection for {} with {} properties",
            self.bean_type,
            self.properties.len()
        );

        Ok(AbstractBeanIntrospection {
            bean_type: self.bean_type,
            annotation_metadata: self.annotation_metadata,
            properties: self.properties,
            property_slots,
            constructor_arguments: self.constructor_arguments,
            instantiator: self.instantiator,
        })
    }
}

impl<B> fmt::Debug for BeanIntrospectionBuilder<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanIntrospectionBuilder")
            .field("bean_type", &self.bean_type)
            .field("property_count", &self.properties.len())
            .field("missing_slots", &self.properties.missing_slots())
            .field("config", &self.config)
            .finish()
    }
}

/// Published, immutable introspection of one type.
pub struct AbstractBeanIntrospection<B> {
    bean_type: TypeRef,
    annotation_metadata: SharedAnnotationMetadata,
    properties: PropertyIndex<BeanProperty<B>>,
    property_slots: HashMap<String, usize>,
    constructor_arguments: Vec<Argument>,
    instantiator: Option<Instantiator<B>>,
}

impl<B> AbstractBeanIntrospection<B> {
    pub fn indexed_annotations(&self) -> Vec<&str> {
        self.properties.indexed_annotations()
    }
}

impl<B> AnnotationMetadataDelegate for AbstractBeanIntrospection<B> {
    fn annotation_metadata(&self) -> &dyn AnnotationMetadata {
        &*self.annotation_metadata
    }
}

impl<B> BeanIntrospection<B> for AbstractBeanIntrospection<B> {
    fn bean_type(&self) -> &TypeRef {
        &self.bean_type
    }

    fn bean_properties(&self) -> Vec<&BeanProperty<B>> {
        self.properties.properties()
    }

    fn bean_properties_annotated_with(&self, annotation: &str) -> Vec<&BeanProperty<B>> {
        self.properties.properties_annotated_with(annotation)
    }

    fn instantiate(&self) -> Result<B> {
        if !self.constructor_arguments.is_empty() {
            return Err(IntrospectionError::Instantiation(format!(
                "No default constructor exists for type {}",
                self.bean_type
            )));
        }
        self.instantiate_with(&[])
    }

    fn instantiate_with(&self, arguments: &[AnnotationValue]) -> Result<B> {
        let instantiator = self.instantiator.as_ref().ok_or_else(|| {
            IntrospectionError::Instantiation(format!(
                "No constructor exists for type {}",
                self.bean_type
            ))
        })?;
        if arguments.len() != self.constructor_arguments.len() {
            return Err(IntrospectionError::Instantiation(format!(
                "Type {} requires {} constructor arguments but {} were supplied",
                self.bean_type,
                self.constructor_arguments.len(),
                arguments.len()
            )));
        }
        instantiator(arguments)
    }

    fn constructor_arguments(&self) -> &[Argument] {
        &self.constructor_arguments
    }

    fn get_property(&self, name: &str) -> Option<&BeanProperty<B>> {
        self.property_slots
            .get(name)
            .and_then(|index| self.properties.get(*index))
    }
}

impl<B> fmt::Debug for AbstractBeanIntrospection<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractBeanIntrospection")
            .field("bean_type", &self.bean_type)
            .field("properties", &self.property_names())
            .field("constructor_arguments", &self.constructor_arguments)
            .finish()
    }
}
