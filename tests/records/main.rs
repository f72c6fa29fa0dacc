//! Integration tests for `#[derive(Record)]` descriptors and identifier resolution.


use burrow_db::{resolve_identifier_field, Record, RecordKind, StoreError};
use shapes::{
    Audit, Batch, Document, Numbered, Pair, Renamed, Shape, SkippedId, Tagged, Widget,
};

fn field_names<T: Record>() -> Vec<String> {
    T::descriptor()
        .fields()
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

#[test]
fn descriptor_lists_fields_in_declared_order() {
    let descriptor = Widget::descriptor();
    assert_eq!(descriptor.type_name(), "Widget");
    assert_eq!(descriptor.kind(), RecordKind::Struct);
    assert_eq!(field_names::<Widget>(), vec!["name", "num", "float"]);
    assert_eq!(descriptor.fields()[1].annotation(), Some("ID"));
    assert_eq!(descriptor.fields()[0].annotation(), None);
}

#[test]
fn annotated_field_is_the_identifier() {
    let descriptor = Widget::descriptor();
    let field = resolve_identifier_field(&descriptor).unwrap();
    assert_eq!(field.name(), "num");
}

#[test]
fn free_form_tag_is_kept_but_only_id_identifies() {
    let descriptor = Tagged::descriptor();
    assert_eq!(descriptor.fields()[1].annotation(), Some("secondary"));
    assert_eq!(resolve_identifier_field(&descriptor).unwrap().name(), "key");
}

#[test]
fn flattened_fields_are_spliced_in_place() {
    assert_eq!(
        field_names::<Document>(),
        vec!["title", "id", "created_by", "body"]
    );
    assert_eq!(
        resolve_identifier_field(&Document::descriptor())
            .unwrap()
            .name(),
        "id"
    );
}

#[test]
fn flattened_values_are_reachable_by_name() {
    let doc = Document {
        title: "t".into(),
        audit: Audit {
            id: 9,
            created_by: "ana".into(),
        },
        body: "b".into(),
    };

    let id = doc.field_value("id").unwrap().unwrap();
    assert_eq!(id.as_json(), &serde_json::json!(9));
    let title = doc.field_value("title").unwrap().unwrap();
    assert_eq!(title.as_json(), &serde_json::json!("t"));
    assert!(doc.field_value("audit").is_none());
    assert!(doc.field_value("missing").is_none());
}

#[test]
fn skipped_fields_are_invisible() {
    assert_eq!(field_names::<SkippedId>(), vec!["key", "label"]);
    assert_eq!(
        resolve_identifier_field(&SkippedId::descriptor())
            .unwrap()
            .name(),
        "key"
    );
    assert_eq!(field_names::<Tagged>(), vec!["key", "other"]);
}

#[test]
fn container_name_overrides_type_name() {
    assert_eq!(Renamed::descriptor().type_name(), "people");
}

#[test]
fn non_struct_shapes_have_no_fields() {
    let shape = Shape::descriptor();
    assert_eq!(shape.kind(), RecordKind::Enum);
    assert!(shape.fields().is_empty());
    assert!(!shape.is_struct());

    assert_eq!(Pair::descriptor().kind(), RecordKind::Tuple);
    assert!(Pair(1, 2).field_value("0").is_none());
}

#[test]
fn non_struct_shapes_resolve_no_identifier() {
    assert!(matches!(
        resolve_identifier_field(&Shape::descriptor()),
        Err(StoreError::NoIdentifierField { .. })
    ));
}

#[test]
fn concrete_record_with_generic_field_types_derives() {
    let descriptor = Batch::descriptor();
    assert_eq!(descriptor.type_name(), "Batch");
    assert_eq!(field_names::<Batch>(), vec!["id", "items", "parent"]);

    let batch = Batch {
        id: 3,
        items: vec!["a".into()],
        parent: None,
    };
    let items = batch.field_value("items").unwrap().unwrap();
    assert_eq!(items.as_json(), &serde_json::json!(["a"]));
}

#[test]
fn flattened_identifier_shadowed_by_outer_field_is_rejected() {
    assert_eq!(field_names::<Numbered>(), vec!["num", "num", "text"]);
    match resolve_identifier_field(&Numbered::descriptor()) {
        Err(StoreError::ShadowedIdentifierField { type_name, field }) => {
            assert_eq!(type_name, "Numbered");
            assert_eq!(field, "num");
        }
        other => panic!("expected ShadowedIdentifierField, got {:?}", other),
    }
}
