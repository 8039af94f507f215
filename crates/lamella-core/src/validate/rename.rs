use crate::project::Project;
use lamella_model::{
    field::Value,
    registry::{CollectionId, RENAME_USES},
};
use std::collections::BTreeMap;

/// Propagate entry renames to the consumer fields registered for each
/// source collection, then return the fresh name index.
///
/// A rename is only inferred when a source collection's name list kept
/// its length since the last successful validation; the positional diff
/// of such a list is treated as a set of renames. A length change (insert
/// or delete) propagates nothing — an edit that renames and resizes at
/// once leaves stale references behind for the cross-reference pass to
/// catch.
pub(crate) fn propagate(project: &mut Project) -> BTreeMap<CollectionId, Vec<String>> {
    for uses in RENAME_USES {
        let Some(old_names) = project.caches.names.get(&uses.source) else {
            continue;
        };
        let new_names = project.collection(uses.source).names();
        if old_names.len() != new_names.len() {
            continue;
        }

        let changed: Vec<(String, String)> = old_names
            .iter()
            .zip(&new_names)
            .filter(|(old, new)| old != new)
            .map(|(old, new)| (old.clone(), new.clone()))
            .collect();

        for (old_name, new_name) in changed {
            let matches = project.collection(uses.consumer).all_matches(&old_name);
            let consumer = project.collection_mut(uses.consumer);
            for (index, field) in matches {
                if !uses.fields.contains(&field) {
                    continue;
                }
                if let Some(entry) = consumer.entry_mut(index) {
                    // Registered rename fields are text-valued on their
                    // consumer variants; the write cannot fail a type check.
                    let _ = entry.set(field, Value::text(new_name.clone()));
                }
            }
        }
    }

    project.name_index()
}
