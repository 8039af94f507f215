//! The staged validation pipeline. Repair passes (forced-empty, variant
//! conversion, model-source reset, rename propagation) run before check
//! passes (model length, cross-reference, protected entries), preserving
//! the pass order the graph's consumers depend on. Caches are committed
//! only after the whole pipeline succeeds.

pub(crate) mod cross_reference;
pub(crate) mod model_field;
pub(crate) mod protected;
pub(crate) mod rename;

use crate::{
    convert::convert,
    error::ValidationError,
    project::{Caches, Project},
    resolver::ModeFlags,
};
use lamella_model::{
    entry::{Entry, VariantTag},
    registry::{self, CollectionId},
};

/// Run the full pipeline over the graph. On success the pipeline-computed
/// caches (name index, protected sets, model-source key) are committed; on
/// failure the caches keep their last-successful values and the caller is
/// expected to roll the mutation back.
pub(crate) fn run(project: &mut Project) -> Result<(), ValidationError> {
    let flags = project.flags();

    apply_forced_empty(project, flags);
    apply_calculation(project, flags);
    let model_source = model_field::apply_source(project, flags);
    model_field::check_lengths(project, flags)?;
    apply_absorption(project, flags);
    let names = rename::propagate(project);
    cross_reference::check(project, flags)?;
    let protected = protected::check(project)?;

    project.caches = Caches {
        names,
        protected,
        model_source,
    };

    Ok(())
}

// Clear any collection whose forced-empty rule is active. Entries placed
// in such a collection are discarded, not rejected.
fn apply_forced_empty(project: &mut Project, flags: ModeFlags) {
    for id in [
        CollectionId::DomainRatios,
        CollectionId::DomainContrasts,
        CollectionId::Layers,
    ] {
        if flags.forced_empty(id) {
            project.collection_mut(id).clear();
        }
    }
}

// Convert contrasts between the plain and ratio variants when the
// calculation kind changed. Switching to domains also seeds the default
// domain ratio and points each converted contrast at it.
fn apply_calculation(project: &mut Project, flags: ModeFlags) {
    let prescribed = flags.variant_for(CollectionId::Contrasts);
    if project.collection(CollectionId::Contrasts).variant() == prescribed {
        return;
    }

    convert_collection(project, CollectionId::Contrasts, prescribed);

    if prescribed == VariantTag::ContrastWithRatio {
        project
            .collection_mut(CollectionId::DomainRatios)
            .replace_entries(vec![registry::default_domain_ratio().into()]);

        let contrasts = project.collection_mut(CollectionId::Contrasts);
        for index in 0..contrasts.len() {
            if let Some(Entry::ContrastWithRatio(contrast)) = contrasts.entry_mut(index) {
                if contrast.domain_ratio.is_empty() {
                    contrast.domain_ratio = registry::DEFAULT_DOMAIN_RATIO.to_string();
                }
            }
        }
    }
}

// Convert layers between the plain and absorption variants when the
// absorption flag changed.
fn apply_absorption(project: &mut Project, flags: ModeFlags) {
    let prescribed = flags.variant_for(CollectionId::Layers);
    if project.collection(CollectionId::Layers).variant() == prescribed {
        return;
    }

    convert_collection(project, CollectionId::Layers, prescribed);
}

// Map every entry of a collection into the prescribed variant and retag
// the collection. Entries with no defined conversion are kept as-is.
fn convert_collection(project: &mut Project, id: CollectionId, to: VariantTag) {
    let converted: Vec<Entry> = project
        .collection(id)
        .entries()
        .iter()
        .map(|entry| convert(entry, to).unwrap_or_else(|| entry.clone()))
        .collect();

    let collection = project.collection_mut(id);
    collection.replace_entries(converted);
    collection.set_variant(to);
}
