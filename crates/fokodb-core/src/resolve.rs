// crates/fokodb-core/src/resolve.rs

//! Parent and sibling lookup for search results.
//!
//! Nodes carry no stable identity besides their name, so the parent of a
//! result is found again by name. When two nodes share that name the first
//! one in document order wins; which one is "right" is not decidable from the
//! data.

use crate::accessor::children;
use crate::level::HierarchyLevel;
use crate::model::{AdministrativeNode, HierarchyPath, SearchResult};

/// Finds the node named by the last segment of `path`.
///
/// Pre-order over every region: the region itself, then each district and,
/// right after it, that district's communes. Fokontany are never parents and
/// are not visited. Returns `None` for an empty path or when no name matches.
pub fn locate_parent<'a>(
    path: &HierarchyPath,
    tree: &'a [AdministrativeNode],
) -> Option<&'a AdministrativeNode> {
    let target = path.last()?.name.as_str();

    tree.iter().find_map(|region| {
        if region.name == target {
            return Some(region);
        }
        children(region, HierarchyLevel::District)
            .iter()
            .find_map(|district| {
                if district.name == target {
                    return Some(district);
                }
                children(district, HierarchyLevel::Commune)
                    .iter()
                    .find(|commune| commune.name == target)
            })
    })
}

/// Nodes at the result's level that share its parent, the result excluded.
///
/// Regions have no parent level and therefore no siblings. When the parent
/// cannot be found the set is empty.
pub fn find_siblings<'a>(
    result: &SearchResult<'_>,
    tree: &'a [AdministrativeNode],
) -> Vec<&'a AdministrativeNode> {
    if result.level.parent().is_none() {
        return Vec::new();
    }
    let Some(parent) = locate_parent(&result.hierarchy_path, tree) else {
        return Vec::new();
    };

    children(parent, result.level)
        .iter()
        .filter(|sibling| sibling.name != result.name)
        .collect()
}
