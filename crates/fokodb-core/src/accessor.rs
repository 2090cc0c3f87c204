// crates/fokodb-core/src/accessor.rs

//! # Child Accessor
//!
//! Counting and collecting descendants of a node at a given level. A region's
//! communes are reached through its districts, its fokontany through its
//! districts' communes, and so on. Missing collections read as empty at every
//! step, so none of these functions can fail.

use crate::level::HierarchyLevel;
use crate::model::{AdministrativeNode, ChildrenCount};

/// The collection a node holds for `level`.
///
/// One typed accessor per level; regions are never anyone's children, so
/// asking for them yields an empty slice.
#[inline]
pub fn children(node: &AdministrativeNode, level: HierarchyLevel) -> &[AdministrativeNode] {
    let field = match level {
        HierarchyLevel::Region => None,
        HierarchyLevel::District => node.district.as_deref(),
        HierarchyLevel::Commune => node.commune.as_deref(),
        HierarchyLevel::Fokontany => node.fokontany.as_deref(),
    };
    field.unwrap_or(&[])
}

/// Number of descendants of `node` (sitting at `node_level`) at `target`.
///
/// Returns 0 when `target` is not below `node_level`.
pub fn count_descendants(
    node: &AdministrativeNode,
    node_level: HierarchyLevel,
    target: HierarchyLevel,
) -> usize {
    if node_level.levels_below(target).is_none() {
        return 0;
    }
    let Some(child_level) = node_level.child() else {
        return 0;
    };

    let direct = children(node, child_level);
    if child_level == target {
        return direct.len();
    }
    direct
        .iter()
        .map(|child| count_descendants(child, child_level, target))
        .sum()
}

/// Direct children of `node`, in document order.
pub fn collect_descendants(
    node: &AdministrativeNode,
    node_level: HierarchyLevel,
) -> Vec<&AdministrativeNode> {
    match node_level.child() {
        Some(child_level) => children(node, child_level).iter().collect(),
        None => Vec::new(),
    }
}

/// All descendants of `node` at `target`, flattened.
///
/// Order is document order within each collection, concatenated in the order
/// the intermediate parents appear. Nothing is re-sorted.
pub fn collect_descendants_at(
    node: &AdministrativeNode,
    node_level: HierarchyLevel,
    target: HierarchyLevel,
) -> Vec<&AdministrativeNode> {
    let mut out = Vec::new();
    push_descendants(node, node_level, target, &mut out);
    out
}

fn push_descendants<'a>(
    node: &'a AdministrativeNode,
    node_level: HierarchyLevel,
    target: HierarchyLevel,
    out: &mut Vec<&'a AdministrativeNode>,
) {
    if node_level.levels_below(target).is_none() {
        return;
    }
    let Some(child_level) = node_level.child() else {
        return;
    };

    let direct = children(node, child_level);
    if child_level == target {
        out.extend(direct.iter());
    } else {
        for child in direct {
            push_descendants(child, child_level, target, out);
        }
    }
}

impl ChildrenCount {
    /// District, commune and fokontany counts of `node`.
    pub fn of(node: &AdministrativeNode, level: HierarchyLevel) -> Self {
        Self {
            districts: count_descendants(node, level, HierarchyLevel::District),
            communes: count_descendants(node, level, HierarchyLevel::Commune),
            fokontany: count_descendants(node, level, HierarchyLevel::Fokontany),
        }
    }
}
