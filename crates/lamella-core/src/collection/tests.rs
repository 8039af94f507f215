use super::*;
use crate::error::CollectionError;
use lamella_model::{
    entry::{Background, Layer, Parameter},
    types::SourceKind,
};

fn parameters() -> Collection {
    let mut collection = Collection::new(CollectionId::Parameters, VariantTag::Parameter);
    collection
        .append(Parameter::new("Substrate Roughness").into())
        .unwrap();
    collection
}

#[test]
fn insert_rejects_entries_of_another_variant() {
    let mut collection = parameters();
    let err = collection
        .append(Background::new("B1", SourceKind::Constant).into())
        .unwrap_err();

    assert!(matches!(
        err,
        CollectionError::ShapeMismatch {
            expected: VariantTag::Parameter,
            found: VariantTag::Background,
            ..
        }
    ));
    assert_eq!(collection.len(), 1, "rejected insert must not change the sequence");
}

#[test]
fn duplicate_names_compare_title_cased() {
    let mut collection = parameters();
    let err = collection
        .append(Parameter::new("substrate roughness").into())
        .unwrap_err();

    assert!(matches!(err, CollectionError::DuplicateName { ref name, .. } if name == "substrate roughness"));
}

#[test]
fn names_must_be_non_empty() {
    let mut collection = parameters();
    let err = collection.append(Parameter::new("   ").into()).unwrap_err();

    assert!(matches!(err, CollectionError::EmptyName { .. }));
}

#[test]
fn insert_past_the_end_is_out_of_range() {
    let mut collection = parameters();
    let err = collection
        .insert(5, Parameter::new("P").into())
        .unwrap_err();

    assert!(matches!(
        err,
        CollectionError::IndexOutOfRange { index: 5, len: 1, .. }
    ));
}

#[test]
fn remove_and_pop_report_missing_targets() {
    let mut collection = parameters();

    let err = collection.remove(Selector::Name("Oxide")).unwrap_err();
    assert!(matches!(err, CollectionError::UnknownName { ref name, .. } if name == "Oxide"));

    let err = collection.pop(1).unwrap_err();
    assert!(matches!(err, CollectionError::IndexOutOfRange { .. }));

    let removed = collection.remove(Selector::Name("Substrate Roughness")).unwrap();
    assert_eq!(removed.name(), "Substrate Roughness");
    assert!(collection.is_empty());
}

#[test]
fn selector_lookup_by_name_is_exact() {
    let collection = parameters();

    assert!(collection.get("Substrate Roughness").is_some());
    // Title-casing applies to uniqueness only, not addressing.
    assert!(collection.get("substrate roughness").is_none());
}

#[test]
fn set_fields_stages_the_patch_on_a_copy() {
    let mut collection = parameters();
    let before = collection.entries().to_vec();

    // Second patch fails; the first must not stick.
    let err = collection
        .set_fields(
            Selector::Index(0),
            &[
                (Field::Name, Value::text("Renamed")),
                (Field::Min, Value::text("not a number")),
            ],
        )
        .unwrap_err();

    assert!(matches!(err, CollectionError::Field(_)));
    assert_eq!(collection.entries(), &before[..]);
}

#[test]
fn set_fields_allows_renaming_an_entry_onto_itself() {
    let mut collection = parameters();

    collection
        .set_fields(
            Selector::Name("Substrate Roughness"),
            &[(Field::Name, Value::text("SUBSTRATE ROUGHNESS"))],
        )
        .unwrap();

    assert_eq!(collection.names(), vec!["SUBSTRATE ROUGHNESS".to_string()]);
}

#[test]
fn all_matches_reports_every_field_holding_the_name() {
    let mut collection = Collection::new(CollectionId::Layers, VariantTag::Layer);
    let mut layer = Layer::new("Oxide");
    layer.thickness = "T1".into();
    layer.roughness = "T1".into();
    collection.append(layer.into()).unwrap();
    collection.append(Layer::new("T1").into()).unwrap();

    let matches = collection.all_matches("T1");

    assert_eq!(
        matches,
        vec![
            (0, Field::Thickness),
            (0, Field::Roughness),
            (1, Field::Name),
        ]
    );
}
