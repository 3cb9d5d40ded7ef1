//! Default Annotation Metadata
//!
//! Build-time store of annotation member values. A generated producer pushes
//! declared annotations, transitively contributed annotations and stereotypes
//! into the store; afterwards it is shared read-only.
//!
//! The same identity may be contributed several times (once from the element,
//! once per meta-annotation expansion), so every add-operation merges rather
//! than replaces.

use indexmap::{IndexMap, IndexSet};
use introspect_core::annotation::{
    empty_values, AnnotationMetadata, ConvertibleValues, MemberValues,
};
use introspect_core::IntrospectionConfig;
use log::trace;

/// Values recorded for one annotation identity.
#[derive(Debug, Clone, PartialEq)]
enum AnnotationValues {
    /// Present without members. Resolves to the shared empty mapping.
    Empty,
    Populated(MemberValues),
}

impl AnnotationValues {
    fn as_map(&self) -> &MemberValues {
        match self {
            AnnotationValues::Empty => empty_values(),
            AnnotationValues::Populated(values) => values,
        }
    }

    /// Key-wise merge: incoming members overwrite in place, new members are
    /// appended in incoming order. `values` must be non-empty.
    fn merge(&mut self, values: MemberValues) {
        match self {
            AnnotationValues::Empty => *self = AnnotationValues::Populated(values),
            AnnotationValues::Populated(existing) => existing.extend(values),
        }
    }
}

type AnnotationMap = IndexMap<String, AnnotationValues>;

/// Mutable-at-build-time annotation metadata.
///
/// Maps are allocated on first write. Every declared identity is also present
/// in the all-annotations view.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultAnnotationMetadata {
    declared_annotations: Option<IndexSet<String>>,
    all_stereotypes: Option<AnnotationMap>,
    all_annotations: Option<AnnotationMap>,
    initial_capacity: usize,
}

impl DefaultAnnotationMetadata {
    pub fn new() -> Self {
        Self::with_config(&IntrospectionConfig::default())
    }

    pub fn with_config(config: &IntrospectionConfig) -> Self {
        Self {
            declared_annotations: None,
            all_stereotypes: None,
            all_annotations: None,
            initial_capacity: config.initial_capacity,
        }
    }

    /// Adds an annotation and its member values, merging with any values
    /// already recorded for it.
    pub fn add_annotation(&mut self, annotation: &str, values: MemberValues) -> &mut Self {
        if !annotation.is_empty() {
            let capacity = self.initial_capacity;
            let all_annotations = self
                .all_annotations
                .get_or_insert_with(|| AnnotationMap::with_capacity(capacity));
            merge_annotation(all_annotations, annotation, values);
        }
        self
    }

    /// Adds a stereotype and its member values, merging with any values already
    /// recorded for it.
    pub fn add_stereotype(&mut self, annotation: &str, values: MemberValues) -> &mut Self {
        if !annotation.is_empty() {
            let capacity = self.initial_capacity;
            let all_stereotypes = self
                .all_stereotypes
                .get_or_insert_with(|| AnnotationMap::with_capacity(capacity));
            merge_annotation(all_stereotypes, annotation, values);
        }
        self
    }

    /// Adds an annotation declared directly on the element. Declared annotations
    /// are always recorded in the all-annotations view too.
    pub fn add_declared_annotation(&mut self, annotation: &str, values: MemberValues) -> &mut Self {
        if !annotation.is_empty() {
            let capacity = self.initial_capacity;
            self.declared_annotations
                .get_or_insert_with(|| IndexSet::with_capacity(capacity))
                .insert(annotation.to_string());
            let all_annotations = self
                .all_annotations
                .get_or_insert_with(|| AnnotationMap::with_capacity(capacity));
            merge_annotation(all_annotations, annotation, values);
        }
        self
    }

    pub fn with_annotation(mut self, annotation: &str, values: MemberValues) -> Self {
        self.add_annotation(annotation, values);
        self
    }

    pub fn with_stereotype(mut self, annotation: &str, values: MemberValues) -> Self {
        self.add_stereotype(annotation, values);
        self
    }

    pub fn with_declared_annotation(mut self, annotation: &str, values: MemberValues) -> Self {
        self.add_declared_annotation(annotation, values);
        self
    }

    fn lookup<'a>(
        map: &'a Option<AnnotationMap>,
        annotation: &str,
    ) -> Option<&'a AnnotationValues> {
        if annotation.is_empty() {
            return None;
        }
        map.as_ref().and_then(|m| m.get(annotation))
    }
}

impl Default for DefaultAnnotationMetadata {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_annotation(annotations: &mut AnnotationMap, annotation: &str, values: MemberValues) {
    if let Some(existing) = annotations.get_mut(annotation) {
        if !values.is_empty() {
            trace!("merging {} member values into @{}", values.len(), annotation);
            existing.merge(values);
        }
        return;
    }

    trace!("recording @{} with {} member values", annotation, values.len());
    let entry = if values.is_empty() {
        AnnotationValues::Empty
    } else {
        AnnotationValues::Populated(values)
    };
    annotations.insert(annotation.to_string(), entry);
}

fn names(map: &Option<AnnotationMap>) -> Vec<&str> {
    map.as_ref()
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

impl AnnotationMetadata for DefaultAnnotationMetadata {
    fn has_declared_annotation(&self, annotation: &str) -> bool {
        !annotation.is_empty()
            && self
                .declared_annotations
                .as_ref()
                .is_some_and(|declared| declared.contains(annotation))
    }

    fn has_annotation(&self, annotation: &str) -> bool {
        Self::lookup(&self.all_annotations, annotation).is_some()
    }

    fn has_stereotype(&self, annotation: &str) -> bool {
        Self::lookup(&self.all_stereotypes, annotation).is_some()
    }

    fn get_values(&self, annotation: &str) -> ConvertibleValues<'_> {
        Self::lookup(&self.all_annotations, annotation)
            .or_else(|| Self::lookup(&self.all_stereotypes, annotation))
            .map(|values| ConvertibleValues::of(values.as_map()))
            .unwrap_or_else(|| ConvertibleValues::empty())
    }

    fn annotation_names(&self) -> Vec<&str> {
        names(&self.all_annotations)
    }

    fn declared_annotation_names(&self) -> Vec<&str> {
        self.declared_annotations
            .as_ref()
            .map(|declared| declared.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn stereotype_names(&self) -> Vec<&str> {
        names(&self.all_stereotypes)
    }
}
