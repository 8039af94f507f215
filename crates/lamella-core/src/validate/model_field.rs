use crate::{
    error::{ModelLengthRule, ValidationError},
    project::Project,
    resolver::ModeFlags,
};
use lamella_model::{
    entry::Entry,
    registry::CollectionId,
    types::{Calculation, LayerModel},
};

/// Resolve the model-source collection and, when it differs from the one
/// recorded at the last successful validation, clear every contrast's
/// model list: stale references are never silently reinterpreted against
/// the new source.
pub(crate) fn apply_source(project: &mut Project, flags: ModeFlags) -> CollectionId {
    let source = flags.model_source();
    if source == project.caches.model_source {
        return source;
    }

    let contrasts = project.collection_mut(CollectionId::Contrasts);
    for index in 0..contrasts.len() {
        match contrasts.entry_mut(index) {
            Some(Entry::Contrast(contrast)) => contrast.model.clear(),
            Some(Entry::ContrastWithRatio(contrast)) => contrast.model.clear(),
            _ => {}
        }
    }

    source
}

/// Enforce the mode-dependent bound on contrast model lists: exactly two
/// names for a standard-layers domains calculation (when non-empty), at
/// most one name for any custom layer model.
pub(crate) fn check_lengths(project: &Project, flags: ModeFlags) -> Result<(), ValidationError> {
    let standard = matches!(flags.model, LayerModel::StandardLayers);
    let domains = matches!(flags.calculation, Calculation::Domains);

    for entry in project.collection(CollectionId::Contrasts).entries() {
        let (name, len) = match entry {
            Entry::Contrast(contrast) => (&contrast.name, contrast.model.len()),
            Entry::ContrastWithRatio(contrast) => (&contrast.name, contrast.model.len()),
            _ => continue,
        };

        if standard && domains {
            if len != 0 && len != 2 {
                return Err(ValidationError::ModelLengthViolation {
                    name: name.clone(),
                    rule: ModelLengthRule::ExactlyTwo,
                    len,
                });
            }
        } else if !standard && len > 1 {
            return Err(ValidationError::ModelLengthViolation {
                name: name.clone(),
                rule: ModelLengthRule::AtMostOne,
                len,
            });
        }
    }

    Ok(())
}
