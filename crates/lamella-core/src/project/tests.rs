use super::*;
use crate::error::{CollectionError, ModelLengthRule, ValidationError};
use lamella_model::{
    entry::{Contrast, CustomFile, Data, DomainContrast, Layer, Parameter, VariantTag},
    field::FieldError,
    registry::{DEFAULT_DOMAIN_RATIO, SIMULATION, SUBSTRATE_ROUGHNESS},
    types::SourceKind,
};

// ---- fixtures ----------------------------------------------------------

// Two parameters and a layer referencing them (plus the protected
// substrate roughness).
fn push_oxide_stack(project: &mut Project) {
    project
        .append(
            CollectionId::Parameters,
            Parameter::new("Oxide Thickness")
                .with_range(10.0, 20.0, 30.0)
                .into(),
        )
        .unwrap();
    project
        .append(CollectionId::Parameters, Parameter::new("Oxide SLD").into())
        .unwrap();

    let mut layer = Layer::new("Oxide");
    layer.thickness = "Oxide Thickness".into();
    layer.sld = "Oxide SLD".into();
    layer.roughness = SUBSTRATE_ROUGHNESS.into();
    project.append(CollectionId::Layers, layer.into()).unwrap();
}

// A contrast wired to the bootstrap entries.
fn basic_contrast(name: &str) -> Contrast {
    let mut contrast = Contrast::new(name);
    contrast.data = SIMULATION.into();
    contrast.background = "Background 1".into();
    contrast.bulk_in = "SLD Air".into();
    contrast.bulk_out = "SLD D2O".into();
    contrast.scalefactor = "Scalefactor 1".into();
    contrast.resolution = "Resolution 1".into();
    contrast
}

fn layer_of(project: &Project, name: &str) -> Layer {
    match project.collection(CollectionId::Layers).get(name) {
        Some(Entry::Layer(layer)) => layer.clone(),
        other => panic!("expected a plain layer named '{name}', got {other:?}"),
    }
}

// ---- bootstrap ---------------------------------------------------------

#[test]
fn default_graph_matches_bootstrap() {
    let project = Project::new();

    let parameters = project.collection(CollectionId::Parameters);
    assert_eq!(parameters.names(), vec![SUBSTRATE_ROUGHNESS.to_string()]);
    assert!(parameters.entries()[0].is_protected());

    let data = project.collection(CollectionId::Data);
    assert_eq!(data.names(), vec![SIMULATION.to_string()]);
    assert!(data.entries()[0].is_protected());

    assert!(project.collection(CollectionId::DomainRatios).is_empty());
    assert!(project.collection(CollectionId::Layers).is_empty());
    assert!(project.collection(CollectionId::Contrasts).is_empty());

    assert_eq!(
        project.names(CollectionId::Backgrounds),
        vec!["Background 1".to_string()]
    );
    assert_eq!(project.model_source(), CollectionId::Layers);
}

// ---- protected entries -------------------------------------------------

#[test]
fn removing_the_protected_parameter_fails_and_leaves_it_in_place() {
    let mut project = Project::new();

    let err = project
        .remove(CollectionId::Parameters, SUBSTRATE_ROUGHNESS)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ProtectedRemoved { ref names, .. })
            if names == &vec![SUBSTRATE_ROUGHNESS.to_string()]
    ));
    assert_eq!(project.collection(CollectionId::Parameters).len(), 1);
}

#[test]
fn removing_the_simulation_data_entry_fails() {
    let mut project = Project::new();

    let err = project.remove(CollectionId::Data, SIMULATION).unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ProtectedRemoved { .. })
    ));
    assert_eq!(project.collection(CollectionId::Data).len(), 1);
}

#[test]
fn clearing_a_protected_collection_rolls_back() {
    let mut project = Project::new();
    project
        .append(CollectionId::Parameters, Parameter::new("Oxide SLD").into())
        .unwrap();
    let before = project.collection(CollectionId::Parameters).entries().to_vec();

    let err = project.clear(CollectionId::Parameters).unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ProtectedRemoved { .. })
    ));
    assert_eq!(
        project.collection(CollectionId::Parameters).entries(),
        &before[..]
    );
}

#[test]
fn renaming_the_protected_parameter_rolls_back_its_propagation() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);

    let err = project
        .set_fields(
            CollectionId::Parameters,
            SUBSTRATE_ROUGHNESS,
            &[(Field::Name, Value::text("Roughness 2"))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ProtectedRemoved { .. })
    ));
    // The rename had already been propagated into the layer before the
    // guard fired; rollback must discard that too.
    assert_eq!(layer_of(&project, "Oxide").roughness, SUBSTRATE_ROUGHNESS);
    assert_eq!(
        project.names(CollectionId::Parameters)[0],
        SUBSTRATE_ROUGHNESS
    );
}

// ---- rename propagation ------------------------------------------------

#[test]
fn renaming_a_parameter_rewrites_layer_references() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);

    project
        .set_fields(
            CollectionId::Parameters,
            "Oxide Thickness",
            &[(Field::Name, Value::text("Oxide Thickness 2"))],
        )
        .unwrap();

    assert_eq!(layer_of(&project, "Oxide").thickness, "Oxide Thickness 2");
}

#[test]
fn renaming_a_background_rewrites_contrast_references() {
    let mut project = Project::new();
    project
        .append(CollectionId::Contrasts, basic_contrast("D2O Up").into())
        .unwrap();

    project
        .set_fields(
            CollectionId::Backgrounds,
            "Background 1",
            &[(Field::Name, Value::text("D2O Background"))],
        )
        .unwrap();

    let Some(Entry::Contrast(contrast)) =
        project.collection(CollectionId::Contrasts).get("D2O Up")
    else {
        panic!("contrast vanished");
    };
    assert_eq!(contrast.background, "D2O Background");
}

#[test]
fn deleting_a_referenced_parameter_is_not_a_rename() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);
    let before = project.collection(CollectionId::Parameters).entries().to_vec();

    // A length change propagates nothing; the stale reference is caught
    // by the cross-reference pass and the whole edit rolls back.
    let err = project
        .remove(CollectionId::Parameters, "Oxide Thickness")
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ReferenceViolation {
            field: Field::Thickness,
            ..
        })
    ));
    assert_eq!(
        project.collection(CollectionId::Parameters).entries(),
        &before[..]
    );
    assert_eq!(layer_of(&project, "Oxide").thickness, "Oxide Thickness");
}

// ---- variant conversion ------------------------------------------------

#[test]
fn toggling_absorption_converts_layers_both_ways() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);

    project.set_absorption(true).unwrap();

    let layers = project.collection(CollectionId::Layers);
    assert_eq!(layers.variant(), VariantTag::AbsorptionLayer);
    let Some(Entry::AbsorptionLayer(absorbing)) = layers.get("Oxide") else {
        panic!("layer was not converted");
    };
    assert_eq!(absorbing.sld_real, "Oxide SLD");
    assert_eq!(absorbing.sld_imaginary, "");

    // Fill the new reference, then drop it by toggling back: the round
    // trip is documented as lossy.
    project
        .set_fields(
            CollectionId::Layers,
            "Oxide",
            &[(Field::SldImaginary, Value::text("Oxide SLD"))],
        )
        .unwrap();
    project.set_absorption(false).unwrap();

    let layer = layer_of(&project, "Oxide");
    assert_eq!(layer.sld, "Oxide SLD");

    project.set_absorption(true).unwrap();
    let Some(Entry::AbsorptionLayer(again)) =
        project.collection(CollectionId::Layers).get("Oxide")
    else {
        panic!("layer was not converted back");
    };
    assert_eq!(again.sld_imaginary, "", "imaginary reference must not resurrect");
}

#[test]
fn switching_to_domains_seeds_ratio_and_widens_contrasts() {
    let mut project = Project::new();
    project
        .append(CollectionId::Contrasts, basic_contrast("D2O Up").into())
        .unwrap();

    project.set_calculation(Calculation::Domains).unwrap();

    assert_eq!(
        project.names(CollectionId::DomainRatios),
        vec![DEFAULT_DOMAIN_RATIO.to_string()]
    );
    let contrasts = project.collection(CollectionId::Contrasts);
    assert_eq!(contrasts.variant(), VariantTag::ContrastWithRatio);
    let Some(Entry::ContrastWithRatio(contrast)) = contrasts.get("D2O Up") else {
        panic!("contrast was not widened");
    };
    assert_eq!(contrast.domain_ratio, DEFAULT_DOMAIN_RATIO);
    assert_eq!(contrast.background, "Background 1");
}

#[test]
fn switching_back_from_domains_narrows_contrasts() {
    let mut project = Project::new();
    project
        .append(CollectionId::Contrasts, basic_contrast("D2O Up").into())
        .unwrap();
    project.set_calculation(Calculation::Domains).unwrap();

    project.set_calculation(Calculation::NonPolarised).unwrap();

    let contrasts = project.collection(CollectionId::Contrasts);
    assert_eq!(contrasts.variant(), VariantTag::Contrast);
    assert!(matches!(contrasts.get("D2O Up"), Some(Entry::Contrast(_))));
    assert!(project.collection(CollectionId::DomainRatios).is_empty());
}

// ---- cross references --------------------------------------------------

#[test]
fn reference_violations_roll_back_append_set_fields_and_extend() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);
    let before = project.collection(CollectionId::Layers).entries().to_vec();

    let mut dangling = Layer::new("Dangling");
    dangling.thickness = "No Such Parameter".into();
    let err = project
        .append(CollectionId::Layers, dangling.clone().into())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ReferenceViolation {
            collection: CollectionId::Layers,
            target: CollectionId::Parameters,
            ..
        })
    ));
    assert_eq!(project.collection(CollectionId::Layers).entries(), &before[..]);

    let err = project
        .set_fields(
            CollectionId::Layers,
            "Oxide",
            &[(Field::Thickness, Value::text("No Such Parameter"))],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ReferenceViolation { .. })
    ));
    assert_eq!(project.collection(CollectionId::Layers).entries(), &before[..]);

    let mut fine = Layer::new("Oxide 2");
    fine.roughness = SUBSTRATE_ROUGHNESS.into();
    let err = project
        .extend(CollectionId::Layers, vec![fine.into(), dangling.into()])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ReferenceViolation { .. })
    ));
    // The valid first entry must not survive the failed batch.
    assert_eq!(project.collection(CollectionId::Layers).entries(), &before[..]);
}

#[test]
fn appending_to_a_forced_empty_collection_is_discarded() {
    let mut project = Project::new();

    project
        .append(
            CollectionId::DomainRatios,
            Parameter::new("Stray Ratio").into(),
        )
        .unwrap();

    // Not an error: the forced-empty pass swallows the entry instead.
    assert!(project.collection(CollectionId::DomainRatios).is_empty());
}

#[test]
fn data_kind_backgrounds_draw_from_the_data_collection() {
    let mut project = Project::new();

    project
        .set_fields(
            CollectionId::Backgrounds,
            "Background 1",
            &[
                (Field::Kind, Value::text("data")),
                (Field::Value1, Value::text(SIMULATION)),
            ],
        )
        .unwrap();

    let err = project
        .set_fields(
            CollectionId::Backgrounds,
            "Background 1",
            &[(Field::Value1, Value::text("Background Param 1"))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ReferenceViolation {
            collection: CollectionId::Backgrounds,
            target: CollectionId::Data,
            ..
        })
    ));
}

#[test]
fn function_kind_backgrounds_are_unsupported() {
    let mut project = Project::new();

    let err = project
        .set_fields(
            CollectionId::Backgrounds,
            "Background 1",
            &[(Field::Kind, Value::text("function"))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::UnsupportedKind {
            kind: SourceKind::Function,
            ..
        })
    ));
    let Some(Entry::Background(background)) =
        project.collection(CollectionId::Backgrounds).get("Background 1")
    else {
        panic!("background vanished");
    };
    assert_eq!(background.kind, SourceKind::Constant);
}

// ---- contrast model lists ----------------------------------------------

#[test]
fn standard_domains_contrast_models_come_in_pairs() {
    let mut project = Project::new();
    project
        .append(CollectionId::Contrasts, basic_contrast("D2O Up").into())
        .unwrap();
    project.set_calculation(Calculation::Domains).unwrap();
    project
        .append(CollectionId::DomainContrasts, DomainContrast::new("Up").into())
        .unwrap();
    project
        .append(CollectionId::DomainContrasts, DomainContrast::new("Down").into())
        .unwrap();

    let err = project
        .set_fields(
            CollectionId::Contrasts,
            "D2O Up",
            &[(Field::Model, Value::text_list(["Up"]))],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ModelLengthViolation {
            rule: ModelLengthRule::ExactlyTwo,
            len: 1,
            ..
        })
    ));

    project
        .set_fields(
            CollectionId::Contrasts,
            "D2O Up",
            &[(Field::Model, Value::text_list(["Up", "Down"]))],
        )
        .unwrap();
}

#[test]
fn custom_model_contrasts_take_at_most_one_model_value() {
    let mut project = Project::new();
    project.set_model(LayerModel::CustomFiles).unwrap();
    project
        .append(CollectionId::CustomFiles, CustomFile::new("model.py").into())
        .unwrap();
    project
        .append(CollectionId::CustomFiles, CustomFile::new("other.py").into())
        .unwrap();

    let mut contrast = basic_contrast("D2O Up");
    contrast.model = vec!["model.py".into(), "other.py".into()];
    let err = project
        .append(CollectionId::Contrasts, contrast.into())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::ModelLengthViolation {
            rule: ModelLengthRule::AtMostOne,
            len: 2,
            ..
        })
    ));

    let mut contrast = basic_contrast("D2O Up");
    contrast.model = vec!["model.py".into()];
    project.append(CollectionId::Contrasts, contrast.into()).unwrap();
}

#[test]
fn changing_the_model_source_resets_contrast_models() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);
    let mut contrast = basic_contrast("D2O Up");
    contrast.model = vec!["Oxide".into()];
    project.append(CollectionId::Contrasts, contrast.into()).unwrap();

    project.set_model(LayerModel::CustomFiles).unwrap();

    let Some(Entry::Contrast(contrast)) =
        project.collection(CollectionId::Contrasts).get("D2O Up")
    else {
        panic!("contrast vanished");
    };
    assert!(
        contrast.model.is_empty(),
        "stale model references must be cleared, not reinterpreted"
    );
    assert!(project.collection(CollectionId::Layers).is_empty());
}

#[test]
fn renaming_a_layer_used_in_a_contrast_model_fails() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);
    let mut contrast = basic_contrast("D2O Up");
    contrast.model = vec!["Oxide".into()];
    project.append(CollectionId::Contrasts, contrast.into()).unwrap();

    // Model lists have no rename registration; the stale reference fails
    // the cross-reference pass and the rename rolls back.
    let err = project
        .set_fields(
            CollectionId::Layers,
            "Oxide",
            &[(Field::Name, Value::text("Oxide 2"))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ModelValuesViolation {
            collection: CollectionId::Contrasts,
            target: CollectionId::Layers,
            ..
        })
    ));
    assert_eq!(project.names(CollectionId::Layers), vec!["Oxide".to_string()]);
}

// ---- raw-operation errors ----------------------------------------------

#[test]
fn unknown_field_edits_roll_back() {
    let mut project = Project::new();
    let before = project.collection(CollectionId::Parameters).entries().to_vec();

    let err = project
        .set_fields(
            CollectionId::Parameters,
            SUBSTRATE_ROUGHNESS,
            &[(Field::Thickness, Value::text("x"))],
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Collection(CollectionError::Field(FieldError::Unknown {
            field: Field::Thickness,
            ..
        }))
    ));
    assert_eq!(
        project.collection(CollectionId::Parameters).entries(),
        &before[..]
    );
}

#[test]
fn wrong_variant_appends_are_rejected_before_validation() {
    let mut project = Project::new();

    let err = project
        .append(CollectionId::Parameters, Layer::new("L").into())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Collection(CollectionError::ShapeMismatch {
            expected: VariantTag::Parameter,
            found: VariantTag::Layer,
            ..
        })
    ));
}

// ---- persistence -------------------------------------------------------

#[test]
fn reconstruction_promotes_lowercase_substrate_roughness() {
    let mut state = ProjectState::default();
    state.collections.insert(
        CollectionId::Parameters,
        vec![
            Parameter::new("Oxide Thickness").into(),
            Parameter::new("substrate roughness")
                .with_range(2.0, 4.0, 6.0)
                .into(),
        ],
    );

    let project = Project::from_state(state).unwrap();

    let entries = project.collection(CollectionId::Parameters).entries();
    let Entry::Parameter(first) = &entries[0] else {
        panic!("parameters must hold Parameter entries");
    };
    // Title-cased recognition: the stored spelling is kept, the entry is
    // promoted to the protected slot at the front with its values intact.
    assert_eq!(first.name, "substrate roughness");
    assert!(first.protected);
    assert_eq!((first.min, first.value, first.max), (2.0, 4.0, 6.0));

    // The simulation entry is seeded when absent.
    assert_eq!(project.names(CollectionId::Data), vec![SIMULATION.to_string()]);
}

#[test]
fn state_round_trip_is_exact() {
    let mut project = Project::new();
    push_oxide_stack(&mut project);
    project
        .append(CollectionId::Contrasts, basic_contrast("D2O Up").into())
        .unwrap();
    project.set_absorption(true).unwrap();
    project.set_name("DSPC bilayer").unwrap();
    project.set_geometry(Geometry::SubstrateLiquid).unwrap();

    let state = project.to_state();
    let json = serde_json::to_string(&state).unwrap();
    let restored: ProjectState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    let rebuilt = Project::from_state(restored).unwrap();
    assert_eq!(rebuilt.to_state(), state);
    assert!(rebuilt.absorption());
    assert_eq!(rebuilt.geometry(), Geometry::SubstrateLiquid);
}

#[test]
fn from_state_rejects_wrong_variants() {
    let mut state = ProjectState::default();
    state
        .collections
        .insert(CollectionId::Layers, vec![Parameter::new("P").into()]);

    let err = Project::from_state(state).unwrap_err();

    assert!(matches!(
        err,
        Error::Collection(CollectionError::ShapeMismatch {
            collection: CollectionId::Layers,
            ..
        })
    ));
}

#[test]
fn from_state_rejects_duplicate_names() {
    let mut state = ProjectState::default();
    state.collections.insert(
        CollectionId::Data,
        vec![
            Data::new("Bilayer Data").into(),
            Data::new("bilayer data").into(),
        ],
    );

    let err = Project::from_state(state).unwrap_err();

    assert!(matches!(
        err,
        Error::Collection(CollectionError::DuplicateName { .. })
    ));
}

// ---- randomized mutations ----------------------------------------------

mod properties {
    use super::*;
    use crate::collection::title_key;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        AppendParameter(u8),
        RemoveParameter(u8),
        RenameParameter(u8, u8),
        AppendLayer(u8, u8),
        RemoveLayer(u8),
        AppendContrast(u8),
        SetDomains(bool),
        SetAbsorption(bool),
        SetModel(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::AppendParameter),
            any::<u8>().prop_map(Op::RemoveParameter),
            (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Op::RenameParameter(a, b)),
            (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Op::AppendLayer(a, b)),
            any::<u8>().prop_map(Op::RemoveLayer),
            any::<u8>().prop_map(Op::AppendContrast),
            any::<bool>().prop_map(Op::SetDomains),
            any::<bool>().prop_map(Op::SetAbsorption),
            any::<u8>().prop_map(Op::SetModel),
        ]
    }

    fn param_name(i: u8) -> String {
        format!("P{}", i % 5)
    }

    fn layer_name(i: u8) -> String {
        format!("L{}", i % 4)
    }

    fn apply(project: &mut Project, op: &Op) -> Result<(), Error> {
        match op {
            Op::AppendParameter(i) => project.append(
                CollectionId::Parameters,
                Parameter::new(param_name(*i)).into(),
            ),
            Op::RemoveParameter(i) => project
                .remove(CollectionId::Parameters, param_name(*i).as_str())
                .map(|_| ()),
            Op::RenameParameter(i, j) => project.set_fields(
                CollectionId::Parameters,
                param_name(*i).as_str(),
                &[(Field::Name, Value::text(param_name(*j)))],
            ),
            Op::AppendLayer(i, j) => {
                let mut layer = Layer::new(layer_name(*i));
                layer.thickness = param_name(*j);
                layer.roughness = SUBSTRATE_ROUGHNESS.into();
                project.append(CollectionId::Layers, layer.into())
            }
            Op::RemoveLayer(i) => project
                .remove(CollectionId::Layers, layer_name(*i).as_str())
                .map(|_| ()),
            Op::AppendContrast(i) => project.append(
                CollectionId::Contrasts,
                basic_contrast(&format!("C{}", i % 3)).into(),
            ),
            Op::SetDomains(flag) => project.set_calculation(if *flag {
                Calculation::Domains
            } else {
                Calculation::NonPolarised
            }),
            Op::SetAbsorption(flag) => project.set_absorption(*flag),
            Op::SetModel(k) => project.set_model(match k % 3 {
                0 => LayerModel::StandardLayers,
                1 => LayerModel::CustomXy,
                _ => LayerModel::CustomFiles,
            }),
        }
    }

    // The graph invariants that must hold after every successful
    // mutation.
    fn assert_invariants(project: &Project) {
        let flags = project.flags();

        for id in CollectionId::ALL {
            let collection = project.collection(id);

            assert_eq!(
                collection.variant(),
                flags.variant_for(id),
                "variant drift in {id}"
            );
            if flags.forced_empty(id) {
                assert!(collection.is_empty(), "{id} must be forced empty");
            }
            for entry in collection.entries() {
                assert_eq!(entry.tag(), collection.variant(), "stale entry in {id}");
            }

            let mut keys: Vec<String> = collection
                .names()
                .iter()
                .map(|name| title_key(name))
                .collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate names in {id}");
        }

        crate::validate::cross_reference::check(project, flags)
            .expect("all references must resolve after a committed mutation");
        crate::validate::model_field::check_lengths(project, flags)
            .expect("model lists must stay within their mode-dependent bounds");

        for (id, names) in &project.caches.protected {
            for name in names {
                assert!(
                    project.collection(*id).contains_name(name),
                    "protected '{name}' missing from {id}"
                );
            }
        }
    }

    proptest! {
        #[test]
        fn mutations_preserve_invariants_or_roll_back(
            ops in prop::collection::vec(op_strategy(), 1..32),
        ) {
            let mut project = Project::new();

            for op in &ops {
                let before = project.clone();

                if apply(&mut project, op).is_err() {
                    // A rejected edit leaves no trace.
                    prop_assert_eq!(project.to_state(), before.to_state());
                    prop_assert_eq!(&project.caches.names, &before.caches.names);
                    prop_assert_eq!(&project.caches.protected, &before.caches.protected);
                }

                assert_invariants(&project);
            }
        }
    }
}
