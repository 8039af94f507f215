use crate::{error::ValidationError, project::Project, resolver::ModeFlags};
use lamella_model::{
    entry::Entry,
    registry::{CollectionId, VALUE_SLOTS, reference_targets, source_slot_target},
};

/// Verify every non-empty reference field against the current name set of
/// its declared target collection.
pub(crate) fn check(project: &Project, flags: ModeFlags) -> Result<(), ValidationError> {
    check_source_slots(project, CollectionId::Backgrounds)?;
    check_source_slots(project, CollectionId::Resolutions)?;
    check_declared(project, CollectionId::Layers)?;
    check_declared(project, CollectionId::Contrasts)?;

    check_model_values(project, CollectionId::Contrasts, flags.model_source())?;
    check_model_values(project, CollectionId::DomainContrasts, CollectionId::Layers)?;

    Ok(())
}

// Check the statically declared reference fields of every entry in a
// collection.
fn check_declared(project: &Project, id: CollectionId) -> Result<(), ValidationError> {
    for entry in project.collection(id).entries() {
        for (field, target) in reference_targets(entry.tag()) {
            let Some(value) = entry.get(*field) else {
                continue;
            };
            let Some(value) = value.as_text() else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if !project.collection(*target).contains_name(value) {
                return Err(ValidationError::ReferenceViolation {
                    collection: id,
                    field: *field,
                    value: value.to_string(),
                    target: *target,
                });
            }
        }
    }

    Ok(())
}

// Backgrounds and resolutions resolve their slots against a collection
// chosen by their own source kind; kinds without slot support are
// rejected outright.
fn check_source_slots(project: &Project, id: CollectionId) -> Result<(), ValidationError> {
    for entry in project.collection(id).entries() {
        let (name, kind, slots) = match entry {
            Entry::Background(background) => (
                &background.name,
                background.kind,
                [
                    &background.value_1,
                    &background.value_2,
                    &background.value_3,
                    &background.value_4,
                    &background.value_5,
                ],
            ),
            Entry::Resolution(resolution) => (
                &resolution.name,
                resolution.kind,
                [
                    &resolution.value_1,
                    &resolution.value_2,
                    &resolution.value_3,
                    &resolution.value_4,
                    &resolution.value_5,
                ],
            ),
            _ => continue,
        };

        let Some(target) = source_slot_target(id, kind) else {
            return Err(ValidationError::UnsupportedKind {
                collection: id,
                name: name.clone(),
                kind,
            });
        };

        for (field, value) in VALUE_SLOTS.iter().zip(slots) {
            if !value.is_empty() && !project.collection(target).contains_name(value) {
                return Err(ValidationError::ReferenceViolation {
                    collection: id,
                    field: *field,
                    value: value.clone(),
                    target,
                });
            }
        }
    }

    Ok(())
}

// Every name in a model list must exist in the list's source collection.
fn check_model_values(
    project: &Project,
    id: CollectionId,
    target: CollectionId,
) -> Result<(), ValidationError> {
    for entry in project.collection(id).entries() {
        let model = match entry {
            Entry::Contrast(contrast) => &contrast.model,
            Entry::ContrastWithRatio(contrast) => &contrast.model,
            Entry::DomainContrast(contrast) => &contrast.model,
            _ => continue,
        };
        if model.is_empty() {
            continue;
        }

        let resolved = |value: &String| project.collection(target).contains_name(value);
        if !model.iter().all(resolved) {
            return Err(ValidationError::ModelValuesViolation {
                collection: id,
                values: model.clone(),
                target,
            });
        }
    }

    Ok(())
}
