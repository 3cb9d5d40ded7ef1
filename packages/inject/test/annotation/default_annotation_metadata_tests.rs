//! DefaultAnnotationMetadata Tests
//!
//! Presence, merge and lookup behaviour of the annotation metadata store.

use introspect_core::{
    member_values_from_json, AnnotationMetadata, IntrospectionConfig, MemberValues,
};
use introspect_inject::DefaultAnnotationMetadata;
use serde_json::{json, Value};

fn values(value: Value) -> MemberValues {
    member_values_from_json(value)
}

fn member_names(metadata: &DefaultAnnotationMetadata, annotation: &str) -> Vec<String> {
    metadata
        .get_values(annotation)
        .names()
        .map(str::to_string)
        .collect()
}

mod presence {
    use super::*;

    #[test]
    fn should_record_annotation_without_members() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Entity", MemberValues::new());

        assert!(metadata.has_annotation("Entity"));
        assert!(metadata.get_values("Entity").is_empty());
        assert!(!metadata.has_declared_annotation("Entity"));
    }

    #[test]
    fn should_mark_declared_annotations_as_present_in_all_annotations() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_declared_annotation("Entity", MemberValues::new());

        assert!(metadata.has_declared_annotation("Entity"));
        assert!(metadata.has_annotation("Entity"));
        assert!(!metadata.has_stereotype("Entity"));
    }

    #[test]
    fn add_annotation_should_never_set_declared_status() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Singleton", values(json!({"lazy": true})));
        metadata.add_annotation("Singleton", MemberValues::new());

        assert!(metadata.has_annotation("Singleton"));
        assert!(!metadata.has_declared_annotation("Singleton"));
        assert!(metadata.declared_annotation_names().is_empty());
    }

    #[test]
    fn stereotypes_should_be_tracked_separately() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_stereotype("Introspected", values(json!({"indexed": true})));

        assert!(metadata.has_stereotype("Introspected"));
        assert!(!metadata.has_annotation("Introspected"));
        assert!(!metadata.has_declared_annotation("Introspected"));
    }

    #[test]
    fn empty_identities_should_never_be_present() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata
            .add_annotation("", values(json!({"a": 1})))
            .add_declared_annotation("", MemberValues::new())
            .add_stereotype("", values(json!({"b": 2})));

        assert!(!metadata.has_annotation(""));
        assert!(!metadata.has_declared_annotation(""));
        assert!(!metadata.has_stereotype(""));
        assert!(metadata.get_values("").is_empty());
        assert!(metadata.is_empty());
    }
}

mod merging {
    use super::*;

    #[test]
    fn should_overwrite_same_keys_in_place_and_append_new_keys() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation(
            "Column",
            values(json!({"name": "a", "length": 10, "nullable": true})),
        );
        metadata.add_annotation("Column", values(json!({"unique": true, "length": 20})));

        assert_eq!(
            member_names(&metadata, "Column"),
            vec!["name", "length", "nullable", "unique"]
        );
        assert_eq!(
            metadata.get_values("Column"),
            values(json!({"name": "a", "length": 20, "nullable": true, "unique": true}))
        );
    }

    #[test]
    fn should_be_idempotent_for_repeated_identical_calls() {
        let mut metadata = DefaultAnnotationMetadata::new();
        let v = values(json!({"value": "x", "order": 1}));
        metadata.add_annotation("Named", v.clone());
        let first = metadata.clone();
        metadata.add_annotation("Named", v.clone());
        metadata.add_annotation("Named", v);

        assert_eq!(metadata, first);
    }

    #[test]
    fn should_not_clear_values_on_empty_merge() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Named", values(json!({"value": "x"})));
        metadata.add_annotation("Named", MemberValues::new());
        metadata.add_declared_annotation("Named", MemberValues::new());

        assert_eq!(metadata.get_values("Named"), values(json!({"value": "x"})));
        assert!(metadata.has_declared_annotation("Named"));
    }

    #[test]
    fn should_populate_presence_only_entry_on_later_merge() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_declared_annotation("Entity", MemberValues::new());
        metadata.add_annotation("Entity", values(json!({"table": "people"})));

        assert!(metadata.has_declared_annotation("Entity"));
        assert_eq!(metadata.get_values("Entity"), values(json!({"table": "people"})));

        let mut other = DefaultAnnotationMetadata::new();
        other.add_annotation("Other", MemberValues::new());
        assert!(other.get_values("Other").is_empty());
    }

    #[test]
    fn should_merge_declared_and_transitive_contributions() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Requires", values(json!({"property": "a"})));
        metadata.add_declared_annotation("Requires", values(json!({"value": "b"})));

        assert!(metadata.has_declared_annotation("Requires"));
        assert_eq!(member_names(&metadata, "Requires"), vec!["property", "value"]);
    }

    #[test]
    fn merges_should_not_leak_between_views() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Shared", values(json!({"a": 1})));
        metadata.add_stereotype("Shared", values(json!({"b": 2})));

        assert_eq!(metadata.get_values("Shared"), values(json!({"a": 1})));
        assert!(metadata.has_stereotype("Shared"));
    }
}

mod lookup {
    use super::*;

    #[test]
    fn should_fall_back_to_stereotype_values() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_stereotype("Introspected", values(json!({"indexed": true})));

        assert_eq!(
            metadata.get_values("Introspected"),
            values(json!({"indexed": true}))
        );
        assert!(metadata.is_true("Introspected", "indexed"));
    }

    #[test]
    fn should_fall_back_to_stereotypes_when_other_annotations_exist() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Entity", MemberValues::new());
        metadata.add_stereotype("Introspected", values(json!({"indexed": true})));

        assert_eq!(
            metadata.get_values("Introspected"),
            values(json!({"indexed": true}))
        );
    }

    #[test]
    fn all_annotations_entry_should_win_even_when_empty() {
        let mut metadata = DefaultAnnotationMetadata::new();
        metadata.add_annotation("Scope", MemberValues::new());
        metadata.add_stereotype("Scope", values(json!({"value": "prototype"})));

        assert!(metadata.get_values("Scope").is_empty());
    }

    #[test]
    fn absent_identities_should_yield_empty_values() {
        let metadata = DefaultAnnotationMetadata::new();
        assert!(metadata.get_values("Missing").is_empty());

        let mut populated = DefaultAnnotationMetadata::new();
        populated.add_stereotype("Other", values(json!({"x": 1})));
        assert!(populated.get_values("Missing").is_empty());
        assert!(populated.get_value("Missing", "x").is_none());
    }

    #[test]
    fn should_read_typed_member_values() {
        let metadata = DefaultAnnotationMetadata::new().with_declared_annotation(
            "Size",
            values(json!({"min": 1, "max": 64, "message": "too long", "groups": ["a"]})),
        );

        assert_eq!(metadata.get_value_as::<u32>("Size", "max"), Some(64));
        assert_eq!(
            metadata.string_value("Size", "message"),
            Some("too long".to_string())
        );
        assert_eq!(metadata.string_value("Size", "min"), Some("1".to_string()));
        assert_eq!(metadata.string_value("Size", "groups"), None);
        assert!(!metadata.is_true("Size", "message"));
    }

    #[test]
    fn should_list_identities_in_first_insertion_order() {
        let metadata = DefaultAnnotationMetadata::new()
            .with_declared_annotation("Entity", MemberValues::new())
            .with_annotation("Table", MemberValues::new())
            .with_declared_annotation("Cacheable", MemberValues::new())
            .with_annotation("Entity", values(json!({"x": 1})))
            .with_stereotype("Introspected", MemberValues::new());

        assert_eq!(metadata.annotation_names(), vec!["Entity", "Table", "Cacheable"]);
        assert_eq!(metadata.declared_annotation_names(), vec!["Entity", "Cacheable"]);
        assert_eq!(metadata.stereotype_names(), vec!["Introspected"]);
        assert!(!metadata.is_empty());
    }

    #[test]
    fn declared_should_be_a_subset_of_all_annotations() {
        let metadata = DefaultAnnotationMetadata::with_config(&IntrospectionConfig::default())
            .with_declared_annotation("A", MemberValues::new())
            .with_stereotype("B", MemberValues::new())
            .with_declared_annotation("C", values(json!({"v": 1})));

        for name in metadata.declared_annotation_names() {
            assert!(metadata.has_annotation(name));
        }
    }
}
