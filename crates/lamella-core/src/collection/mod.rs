#[cfg(test)]
mod tests;

use crate::error::CollectionError;
use convert_case::{Case, Casing};
use lamella_model::{
    entry::{Entry, VariantTag},
    field::{Field, Value},
    registry::CollectionId,
};

/// Human title-casing used for name comparisons: duplicate detection and
/// bootstrap-entry recognition both normalize through this transform.
pub(crate) fn title_key(name: &str) -> String {
    name.to_case(Case::Title)
}

///
/// Selector
///
/// Addresses an entry by position or by exact name.
///

#[derive(Clone, Copy, Debug)]
pub enum Selector<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for Selector<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

///
/// Collection
///
/// An ordered, name-addressable container of entries of one variant
/// family. Raw operations enforce local shape only (variant match, name
/// uniqueness, index bounds); graph-wide consistency is the validation
/// pipeline's job.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    id: CollectionId,
    variant: VariantTag,
    entries: Vec<Entry>,
}

impl Collection {
    #[must_use]
    pub(crate) const fn new(id: CollectionId, variant: VariantTag) -> Self {
        Self {
            id,
            variant,
            entries: Vec::new(),
        }
    }

    // ======================================================================
    // Read surface
    // ======================================================================

    #[must_use]
    pub const fn id(&self) -> CollectionId {
        self.id
    }

    /// The variant this collection currently accepts.
    #[must_use]
    pub const fn variant(&self) -> VariantTag {
        self.variant
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The ordered name list.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }

    #[must_use]
    pub fn get<'a>(&self, selector: impl Into<Selector<'a>>) -> Option<&Entry> {
        match selector.into() {
            Selector::Index(index) => self.entries.get(index),
            Selector::Name(name) => self.position(name).map(|index| &self.entries[index]),
        }
    }

    /// Every `(index, field)` pair whose current field value equals `name`.
    /// Rename propagation filters this down to its registered fields.
    #[must_use]
    pub fn all_matches(&self, name: &str) -> Vec<(usize, Field)> {
        let mut matches = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            for field in entry.fields() {
                if let Some(Value::Text(text)) = entry.get(*field) {
                    if text == name {
                        matches.push((index, *field));
                    }
                }
            }
        }

        matches
    }

    // ======================================================================
    // Raw mutations (no validation side effects)
    // ======================================================================

    pub(crate) fn insert(&mut self, index: usize, entry: Entry) -> Result<(), CollectionError> {
        if index > self.entries.len() {
            return Err(CollectionError::IndexOutOfRange {
                collection: self.id,
                index,
                len: self.entries.len(),
            });
        }
        self.check_admissible(&entry, None)?;
        self.entries.insert(index, entry);

        Ok(())
    }

    pub(crate) fn append(&mut self, entry: Entry) -> Result<(), CollectionError> {
        self.insert(self.entries.len(), entry)
    }

    /// Append a batch. Fail-fast; a failed batch may be partially applied,
    /// which the mutation guard's snapshot undoes.
    pub(crate) fn extend(&mut self, entries: Vec<Entry>) -> Result<(), CollectionError> {
        for entry in entries {
            self.append(entry)?;
        }

        Ok(())
    }

    pub(crate) fn remove(&mut self, selector: Selector<'_>) -> Result<Entry, CollectionError> {
        let index = self.resolve(selector)?;

        Ok(self.entries.remove(index))
    }

    pub(crate) fn pop(&mut self, index: usize) -> Result<Entry, CollectionError> {
        if index >= self.entries.len() {
            return Err(CollectionError::IndexOutOfRange {
                collection: self.id,
                index,
                len: self.entries.len(),
            });
        }

        Ok(self.entries.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply a bulk field patch to one entry. The patch is staged on a
    /// copy so a mid-patch failure leaves the entry untouched.
    pub(crate) fn set_fields(
        &mut self,
        selector: Selector<'_>,
        patches: &[(Field, Value)],
    ) -> Result<(), CollectionError> {
        let index = self.resolve(selector)?;

        let mut entry = self.entries[index].clone();
        for (field, value) in patches {
            entry.set(*field, value.clone())?;
        }
        self.check_admissible(&entry, Some(index))?;
        self.entries[index] = entry;

        Ok(())
    }

    // ======================================================================
    // Pipeline access
    // ======================================================================

    /// Replace the whole entry sequence. Reserved for the validation
    /// pipeline's repair passes and bootstrap, which produce shapes the
    /// raw checks already hold for.
    pub(crate) fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub(crate) const fn set_variant(&mut self, variant: VariantTag) {
        self.variant = variant;
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    // ======================================================================
    // Local checks
    // ======================================================================

    fn resolve(&self, selector: Selector<'_>) -> Result<usize, CollectionError> {
        match selector {
            Selector::Index(index) if index < self.entries.len() => Ok(index),
            Selector::Index(index) => Err(CollectionError::IndexOutOfRange {
                collection: self.id,
                index,
                len: self.entries.len(),
            }),
            Selector::Name(name) => {
                self.position(name)
                    .ok_or_else(|| CollectionError::UnknownName {
                        collection: self.id,
                        name: name.to_string(),
                    })
            }
        }
    }

    // Shape and naming rules shared by insert and set_fields. `skip`
    // excludes the entry being replaced from duplicate detection.
    fn check_admissible(
        &self,
        entry: &Entry,
        skip: Option<usize>,
    ) -> Result<(), CollectionError> {
        if entry.tag() != self.variant {
            return Err(CollectionError::ShapeMismatch {
                collection: self.id,
                expected: self.variant,
                found: entry.tag(),
            });
        }
        if entry.name().trim().is_empty() {
            return Err(CollectionError::EmptyName {
                collection: self.id,
            });
        }

        let key = title_key(entry.name());
        let duplicate = self
            .entries
            .iter()
            .enumerate()
            .any(|(index, existing)| Some(index) != skip && title_key(existing.name()) == key);
        if duplicate {
            return Err(CollectionError::DuplicateName {
                collection: self.id,
                name: entry.name().to_string(),
            });
        }

        Ok(())
    }
}
