use crate::{
    collection::Collection,
    error::Error,
    project::{Project, bootstrap},
    resolver::ModeFlags,
};
use lamella_model::{
    entry::Entry,
    registry::CollectionId,
    types::{Calculation, Geometry, LayerModel},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// ProjectState
///
/// The plain nested persistence form of a graph: flags plus the non-empty
/// collections in graph order. Round-trips exactly through any serde
/// format for every valid project.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ProjectState {
    pub name: String,
    pub calculation: Calculation,
    pub model: LayerModel,
    pub geometry: Geometry,
    pub absorption: bool,
    pub collections: BTreeMap<CollectionId, Vec<Entry>>,
}

impl Project {
    /// Capture the graph as its plain persisted form. Empty collections
    /// are omitted.
    #[must_use]
    pub fn to_state(&self) -> ProjectState {
        let collections = CollectionId::ALL
            .iter()
            .filter(|id| !self.collection(**id).is_empty())
            .map(|id| (*id, self.collection(*id).entries().to_vec()))
            .collect();

        ProjectState {
            name: self.name().to_string(),
            calculation: self.calculation(),
            model: self.model(),
            geometry: self.geometry(),
            absorption: self.absorption(),
            collections,
        }
    }
}

// Rebuild a graph from persisted state. Entries load through the raw
// collection checks (shape, naming), bootstrap repair re-establishes the
// protected entries, and one full pipeline run validates the result.
pub(crate) fn build(state: ProjectState) -> Result<Project, Error> {
    let flags = ModeFlags {
        calculation: state.calculation,
        model: state.model,
        absorption: state.absorption,
    };

    let collections = CollectionId::ALL.map(|id| Collection::new(id, flags.variant_for(id)));
    let mut project = Project::assemble(
        state.name,
        state.calculation,
        state.model,
        state.geometry,
        state.absorption,
        collections,
    );

    for (id, entries) in state.collections {
        project.collection_mut(id).extend(entries)?;
    }

    bootstrap::repair(&mut project);
    project.prime_caches();
    project.revalidate()?;

    Ok(project)
}
