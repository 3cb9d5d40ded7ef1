//! Property Index
//!
//! Fixed-capacity registry of a type's properties. Generated code knows the
//! property count and declaration slot of each property up front but may write
//! slots in any order, so properties are stored by absolute index. A secondary
//! index from annotation identity to properties is created on first use.

use indexmap::IndexMap;
use introspect_core::config::DEFAULT_INITIAL_CAPACITY;
use introspect_core::error::{IntrospectionError, Result};
use log::{trace, warn};
use smallvec::SmallVec;
use std::sync::Arc;

type IndexedProperties<P> = SmallVec<[Arc<P>; 3]>;

#[derive(Debug)]
pub struct PropertyIndex<P> {
    slots: Box<[Option<Arc<P>>]>,
    indexed: Option<IndexMap<String, IndexedProperties<P>>>,
    initial_capacity: usize,
}

impl<P> PropertyIndex<P> {
    /// Index with `len` empty slots.
    pub fn new(len: usize) -> Self {
        Self::with_capacity_hint(len, DEFAULT_INITIAL_CAPACITY)
    }

    pub fn with_capacity_hint(len: usize, initial_capacity: usize) -> Self {
        Self {
            slots: (0..len).map(|_| None).collect(),
            indexed: None,
            initial_capacity,
        }
    }

    /// Index over an already ordered property array. `expected_len` is the
    /// property count the producer declared.
    pub fn from_properties(expected_len: usize, properties: Vec<P>) -> Result<Self> {
        if properties.len() != expected_len {
            return Err(IntrospectionError::PropertyCountMismatch {
                expected: expected_len,
                actual: properties.len(),
            });
        }
        Ok(Self {
            slots: properties.into_iter().map(|p| Some(Arc::new(p))).collect(),
            indexed: None,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Write `property` into slot `index`. An index outside the declared count
    /// means the producer generated invalid metadata.
    pub fn set_slot(&mut self, index: usize, property: P) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(IntrospectionError::SlotOutOfRange { index, len })?;
        trace!("populating property slot {} of {}", index, len);
        *slot = Some(Arc::new(property));
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&P> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Populated properties in slot order.
    pub fn properties(&self) -> Vec<&P> {
        self.slots.iter().filter_map(|slot| slot.as_deref()).collect()
    }

    pub fn properties_annotated_with(&self, annotation: &str) -> Vec<&P> {
        self.indexed
            .as_ref()
            .and_then(|indexed| indexed.get(annotation))
            .map(|properties| properties.iter().map(|p| p.as_ref()).collect())
            .unwrap_or_default()
    }

    /// Append `property` to the list for `annotation`. An empty identity is
    /// ignored.
    pub fn index_by_annotation(&mut self, annotation: &str, property: Arc<P>) {
        if annotation.is_empty() {
            warn!("ignoring property index request without an annotation");
            return;
        }
        let capacity = self.initial_capacity;
        self.indexed
            .get_or_insert_with(|| IndexMap::with_capacity(capacity))
            .entry(annotation.to_string())
            .or_default()
            .push(property);
    }

    /// Index the property already stored in `slot` under `annotation`. An unset
    /// or unknown slot holds no property and is ignored.
    pub fn index_slot_by_annotation(&mut self, annotation: &str, slot: usize) {
        let property = self.slots.get(slot).and_then(|s| s.clone());
        match property {
            Some(property) => self.index_by_annotation(annotation, property),
            None => trace!(
                "slot {} holds no property to index under @{}",
                slot, annotation
            ),
        }
    }

    /// Annotation identities with at least one indexed property.
    pub fn indexed_annotations(&self) -> Vec<&str> {
        self.indexed
            .as_ref()
            .map(|indexed| indexed.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn missing_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// Confirm every slot was populated. `bean` names the owning type in the
    /// error.
    pub fn validate(&self, bean: &str) -> Result<()> {
        let missing = self.missing_slots();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(IntrospectionError::IncompleteProperties {
                bean: bean.to_string(),
                missing,
            })
        }
    }
}
