use crate::{
    collection::{Collection, title_key},
    project::Project,
    resolver::ModeFlags,
};
use lamella_model::{
    entry::Entry,
    registry::{self, CollectionId, SIMULATION, SUBSTRATE_ROUGHNESS},
    types::{Calculation, Geometry, LayerModel},
};

/// Assemble the default graph: bootstrap entries everywhere the default
/// flags allow them, caches primed to match. The result is already in the
/// steady state the pipeline would produce, so no validation run is
/// needed.
pub(crate) fn default_project() -> Project {
    let flags = ModeFlags::default();

    let collections = CollectionId::ALL.map(|id| {
        let mut collection = Collection::new(id, flags.variant_for(id));
        if !flags.forced_empty(id) {
            collection.replace_entries(registry::bootstrap(id));
        }
        collection
    });

    let mut project = Project::assemble(
        String::new(),
        Calculation::default(),
        LayerModel::default(),
        Geometry::default(),
        false,
        collections,
    );
    project.prime_caches();

    project
}

/// Re-establish the protected bootstrap entries on a reconstructed graph:
/// a missing substrate roughness parameter is inserted at the front, an
/// unprotected one is promoted there; the simulation data entry is seeded
/// or marked the same way. Name recognition is title-cased.
pub(crate) fn repair(project: &mut Project) {
    ensure_substrate_roughness(project);
    ensure_simulation_entry(project);
}

fn ensure_substrate_roughness(project: &mut Project) {
    let collection = project.collection_mut(CollectionId::Parameters);
    let mut entries = collection.entries().to_vec();

    let position = entries
        .iter()
        .position(|entry| title_key(entry.name()) == SUBSTRATE_ROUGHNESS);

    match position {
        None => entries.insert(0, registry::substrate_roughness().into()),
        Some(index) => {
            if !entries[index].is_protected() {
                let mut entry = entries.remove(index);
                if let Entry::Parameter(parameter) = &mut entry {
                    parameter.protected = true;
                }
                entries.insert(0, entry);
            }
        }
    }

    collection.replace_entries(entries);
}

fn ensure_simulation_entry(project: &mut Project) {
    let collection = project.collection_mut(CollectionId::Data);
    let mut entries = collection.entries().to_vec();

    let position = entries
        .iter()
        .position(|entry| title_key(entry.name()) == SIMULATION);

    match position {
        None => entries.insert(0, registry::simulation_data().into()),
        Some(index) => {
            if let Entry::Data(data) = &mut entries[index] {
                data.protected = true;
            }
        }
    }

    collection.replace_entries(entries);
}
