mod bootstrap;
mod state;

#[cfg(test)]
mod tests;

pub use state::ProjectState;

use crate::{
    collection::{Collection, Selector},
    error::Error,
    resolver::ModeFlags,
    validate,
};
use lamella_model::{
    entry::Entry,
    field::{Field, Value},
    registry::{COLLECTION_COUNT, CollectionId},
    types::{Calculation, Geometry, LayerModel},
};
use std::collections::BTreeMap;

///
/// Caches
///
/// Pipeline-computed state recorded at the last successful validation:
/// the per-collection name index (rename detection baseline), the
/// protected name sets, and the resolved model-source key. A failed
/// mutation leaves all three at their last-successful values.
///

#[derive(Clone, Debug)]
pub(crate) struct Caches {
    pub names: BTreeMap<CollectionId, Vec<String>>,
    pub protected: BTreeMap<CollectionId, Vec<String>>,
    pub model_source: CollectionId,
}

///
/// Project
///
/// The whole configuration graph: mode flags plus the fixed set of
/// collections, kept consistent by running the validation pipeline after
/// every mutation. Every mutating operation is transactional — either the
/// edit and all its consequences leave the graph valid, or the graph is
/// restored exactly to its pre-edit state and a structured error is
/// returned.
///

#[derive(Clone, Debug)]
pub struct Project {
    name: String,
    calculation: Calculation,
    model: LayerModel,
    geometry: Geometry,
    absorption: bool,
    collections: [Collection; COLLECTION_COUNT],
    pub(crate) caches: Caches,
}

impl Project {
    // ======================================================================
    // Construction
    // ======================================================================

    /// A graph populated with the default bootstrap entries.
    #[must_use]
    pub fn new() -> Self {
        bootstrap::default_project()
    }

    /// Rebuild a graph from its plain persisted form. Bootstrap repair
    /// runs first (protected entries are re-seeded or promoted), then the
    /// full pipeline validates the result.
    pub fn from_state(state: ProjectState) -> Result<Self, Error> {
        state::build(state)
    }

    pub(crate) fn assemble(
        name: String,
        calculation: Calculation,
        model: LayerModel,
        geometry: Geometry,
        absorption: bool,
        collections: [Collection; COLLECTION_COUNT],
    ) -> Self {
        let flags = ModeFlags {
            calculation,
            model,
            absorption,
        };

        Self {
            name,
            calculation,
            model,
            geometry,
            absorption,
            collections,
            caches: Caches {
                names: BTreeMap::new(),
                protected: BTreeMap::new(),
                model_source: flags.model_source(),
            },
        }
    }

    // ======================================================================
    // Read surface
    // ======================================================================

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn calculation(&self) -> Calculation {
        self.calculation
    }

    #[must_use]
    pub const fn model(&self) -> LayerModel {
        self.model
    }

    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub const fn absorption(&self) -> bool {
        self.absorption
    }

    /// The structural mode flags, re-derived from current field values.
    #[must_use]
    pub const fn flags(&self) -> ModeFlags {
        ModeFlags {
            calculation: self.calculation,
            model: self.model,
            absorption: self.absorption,
        }
    }

    /// The collection contrast model lists currently draw their names
    /// from.
    #[must_use]
    pub const fn model_source(&self) -> CollectionId {
        self.flags().model_source()
    }

    #[must_use]
    pub const fn collection(&self, id: CollectionId) -> &Collection {
        &self.collections[id.index()]
    }

    /// The ordered name list of a collection.
    #[must_use]
    pub fn names(&self, id: CollectionId) -> Vec<String> {
        self.collection(id).names()
    }

    pub(crate) const fn collection_mut(&mut self, id: CollectionId) -> &mut Collection {
        &mut self.collections[id.index()]
    }

    pub(crate) fn name_index(&self) -> BTreeMap<CollectionId, Vec<String>> {
        CollectionId::ALL
            .iter()
            .map(|id| (*id, self.collection(*id).names()))
            .collect()
    }

    pub(crate) fn protected_names(&self, id: CollectionId) -> Vec<String> {
        self.collection(id)
            .entries()
            .iter()
            .filter(|entry| entry.is_protected())
            .map(|entry| entry.name().to_string())
            .collect()
    }

    pub(crate) fn protected_index(&self) -> BTreeMap<CollectionId, Vec<String>> {
        CollectionId::PROTECTED_ELIGIBLE
            .iter()
            .map(|id| (*id, self.protected_names(*id)))
            .collect()
    }

    // Record the current graph as the last-successful baseline. Used at
    // construction, before the first pipeline run.
    pub(crate) fn prime_caches(&mut self) {
        self.caches = Caches {
            names: self.name_index(),
            protected: self.protected_index(),
            model_source: self.flags().model_source(),
        };
    }

    pub(crate) fn revalidate(&mut self) -> Result<(), crate::error::ValidationError> {
        validate::run(self)
    }

    // ======================================================================
    // Collection mutations (transactional)
    // ======================================================================

    pub fn insert(
        &mut self,
        id: CollectionId,
        index: usize,
        entry: Entry,
    ) -> Result<(), Error> {
        self.transact(|project| {
            project
                .collection_mut(id)
                .insert(index, entry)
                .map_err(Error::from)
        })
    }

    pub fn append(&mut self, id: CollectionId, entry: Entry) -> Result<(), Error> {
        self.transact(|project| project.collection_mut(id).append(entry).map_err(Error::from))
    }

    pub fn extend(&mut self, id: CollectionId, entries: Vec<Entry>) -> Result<(), Error> {
        self.transact(|project| {
            project
                .collection_mut(id)
                .extend(entries)
                .map_err(Error::from)
        })
    }

    pub fn remove<'a>(
        &mut self,
        id: CollectionId,
        selector: impl Into<Selector<'a>>,
    ) -> Result<Entry, Error> {
        let selector = selector.into();
        self.transact(|project| {
            project
                .collection_mut(id)
                .remove(selector)
                .map_err(Error::from)
        })
    }

    pub fn pop(&mut self, id: CollectionId, index: usize) -> Result<Entry, Error> {
        self.transact(|project| project.collection_mut(id).pop(index).map_err(Error::from))
    }

    pub fn clear(&mut self, id: CollectionId) -> Result<(), Error> {
        self.transact(|project| {
            project.collection_mut(id).clear();
            Ok(())
        })
    }

    pub fn set_fields<'a>(
        &mut self,
        id: CollectionId,
        selector: impl Into<Selector<'a>>,
        patches: &[(Field, Value)],
    ) -> Result<(), Error> {
        let selector = selector.into();
        self.transact(|project| {
            project
                .collection_mut(id)
                .set_fields(selector, patches)
                .map_err(Error::from)
        })
    }

    // ======================================================================
    // Flag mutations (transactional)
    // ======================================================================

    pub fn set_calculation(&mut self, calculation: Calculation) -> Result<(), Error> {
        self.transact(|project| {
            project.calculation = calculation;
            Ok(())
        })
    }

    pub fn set_model(&mut self, model: LayerModel) -> Result<(), Error> {
        self.transact(|project| {
            project.model = model;
            Ok(())
        })
    }

    pub fn set_absorption(&mut self, absorption: bool) -> Result<(), Error> {
        self.transact(|project| {
            project.absorption = absorption;
            Ok(())
        })
    }

    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<(), Error> {
        self.transact(|project| {
            project.geometry = geometry;
            Ok(())
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), Error> {
        let name = name.into();
        self.transact(|project| {
            project.name = name;
            Ok(())
        })
    }

    // ======================================================================
    // Mutation guard
    // ======================================================================

    // Run a raw mutation, then the full pipeline. Flag changes convert
    // sibling collections and renames rewrite consumers, so the snapshot
    // covers the whole graph rather than a single collection: restoring
    // it discards every consequence of a failed edit.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let snapshot = self.snapshot();

        let result = op(self).and_then(|value| {
            self.revalidate().map_err(Error::from)?;
            Ok(value)
        });

        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                self.restore(snapshot);
                Err(err)
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name.clone(),
            calculation: self.calculation,
            model: self.model,
            geometry: self.geometry,
            absorption: self.absorption,
            collections: self.collections.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.name = snapshot.name;
        self.calculation = snapshot.calculation;
        self.model = snapshot.model;
        self.geometry = snapshot.geometry;
        self.absorption = snapshot.absorption;
        self.collections = snapshot.collections;
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

///
/// Snapshot
///
/// Deep copy of the mutable graph state taken before a transactional
/// mutation. Caches are not included: they only advance on success.
///

struct Snapshot {
    name: String,
    calculation: Calculation,
    model: LayerModel,
    geometry: Geometry,
    absorption: bool,
    collections: [Collection; COLLECTION_COUNT],
}
