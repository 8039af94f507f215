use crate::{error::ValidationError, project::Project};
use lamella_model::registry::CollectionId;
use std::collections::BTreeMap;

/// Verify that every entry recorded as protected at the last successful
/// validation is still present, then return the refreshed protected name
/// index.
pub(crate) fn check(
    project: &Project,
) -> Result<BTreeMap<CollectionId, Vec<String>>, ValidationError> {
    let mut index = BTreeMap::new();

    for id in CollectionId::PROTECTED_ELIGIBLE {
        let current = project.protected_names(id);

        if let Some(recorded) = project.caches.protected.get(&id) {
            let removed: Vec<String> = recorded
                .iter()
                .filter(|name| !current.contains(name))
                .cloned()
                .collect();
            if !removed.is_empty() {
                return Err(ValidationError::ProtectedRemoved {
                    collection: id,
                    names: removed,
                });
            }
        }

        index.insert(id, current);
    }

    Ok(index)
}
