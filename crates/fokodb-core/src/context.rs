// crates/fokodb-core/src/context.rs

//! # Hierarchy Context
//!
//! Expands one selected [`SearchResult`] into everything a detail view needs:
//! its ancestors, its direct children and its siblings. Nothing here is
//! cached; every call reads the tree again.

use crate::accessor::collect_descendants;
use crate::level::HierarchyLevel;
use crate::model::{AdministrativeNode, HierarchyPath, PathSegment, SearchResult};
use crate::resolve::find_siblings;
use crate::text::compare_names;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::debug;

/// How many children [`build_tree`] shows unless told otherwise.
pub const DEFAULT_TREE_LIMIT: usize = 10;

/// Navigable view of a single result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyContext<'r, 'a> {
    pub item: &'r SearchResult<'a>,
    /// Copy of the result's ancestor path.
    pub parents: HierarchyPath,
    pub children: Vec<&'a AdministrativeNode>,
    pub siblings: Vec<&'a AdministrativeNode>,
    /// Ancestors, then the result, then one segment per direct child.
    pub complete_hierarchy: Vec<PathSegment>,
}

impl HierarchyContext<'_, '_> {
    /// Plain-text report, see [`format_hierarchy`].
    pub fn to_text(&self) -> String {
        format_hierarchy(self.item, &self.children)
    }
}

/// Builds the context of `result` within `tree`.
pub fn build_context<'r, 'a>(
    result: &'r SearchResult<'a>,
    tree: &'a [AdministrativeNode],
) -> HierarchyContext<'r, 'a> {
    let children = collect_descendants(result.node, result.level);
    let siblings = find_siblings(result, tree);

    let mut complete_hierarchy = Vec::with_capacity(result.hierarchy_path.len() + 1 + children.len());
    complete_hierarchy.extend(result.hierarchy_path.iter().cloned());
    complete_hierarchy.push(result.segment());
    if let Some(child_level) = result.level.child() {
        complete_hierarchy.extend(
            children
                .iter()
                .map(|child| PathSegment::new(child_level, child.name.clone())),
        );
    }

    debug!(
        name = %result.name,
        level = %result.level,
        children = children.len(),
        siblings = siblings.len(),
        "built hierarchy context"
    );

    HierarchyContext {
        item: result,
        parents: result.hierarchy_path.clone(),
        children,
        siblings,
        complete_hierarchy,
    }
}

/// A child entry of a [`HierarchyTree`]; never expanded further.
#[derive(Debug, Clone, Serialize)]
pub struct TreeBranch<'a> {
    pub node: &'a AdministrativeNode,
    pub level: HierarchyLevel,
    pub children: Vec<TreeBranch<'a>>,
}

/// One-level tree under a result, capped at a number of children.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyTree<'r, 'a> {
    pub node: &'r SearchResult<'a>,
    pub children: Vec<TreeBranch<'a>>,
    pub depth: usize,
}

/// The first `limit` direct children of `result`, as a shallow tree.
pub fn build_tree<'r, 'a>(result: &'r SearchResult<'a>, limit: usize) -> HierarchyTree<'r, 'a> {
    let children = match result.level.child() {
        Some(level) => collect_descendants(result.node, result.level)
            .into_iter()
            .take(limit)
            .map(|node| TreeBranch {
                node,
                level,
                children: Vec::new(),
            })
            .collect(),
        None => Vec::new(),
    };

    HierarchyTree {
        node: result,
        children,
        depth: 0,
    }
}

/// A result with its complete list of direct children.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandedResult<'r, 'a> {
    #[serde(flatten)]
    pub result: &'r SearchResult<'a>,
    /// `None` at the fokontany level, which has no children at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<&'a AdministrativeNode>>,
}

/// Attaches every direct child of `result`, without the tree view's limit.
pub fn expand<'r, 'a>(result: &'r SearchResult<'a>) -> ExpandedResult<'r, 'a> {
    let children = result
        .level
        .child()
        .map(|_| collect_descendants(result.node, result.level));
    ExpandedResult { result, children }
}

/// Human-readable report of a result, its ancestry and its children.
///
/// ```text
/// COMMUNE: Alasora
///
/// Part of:
/// country: Madagascar
///   region: Analamanga
///     district: Avaradrano
///
/// Contains:
///   fokontany: Ambodivona
///   fokontany: Ankadievo
/// ```
///
/// Children are listed by name, case-insensitively.
pub fn format_hierarchy(result: &SearchResult<'_>, children: &[&AdministrativeNode]) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = write!(text, "{}: {}\n\n", result.level.as_str().to_uppercase(), result.name);

    if !result.hierarchy_path.is_empty() {
        text.push_str("Part of:\n");
        for (depth, segment) in result.hierarchy_path.iter().enumerate() {
            let _ = writeln!(text, "{}{}: {}", "  ".repeat(depth), segment.level, segment.name);
        }
    }

    if let (Some(child_level), false) = (result.level.child(), children.is_empty()) {
        text.push_str("\nContains:\n");
        let mut sorted = children.to_vec();
        sorted.sort_by(|a, b| compare_names(&a.name, &b.name));
        for child in sorted {
            let _ = writeln!(text, "  {}: {}", child_level, child.name);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelFilter;
    use crate::search::search;
    use HierarchyLevel::*;

    fn node(name: &str) -> AdministrativeNode {
        AdministrativeNode::new(name)
    }

    fn tree() -> Vec<AdministrativeNode> {
        let fokontany: Vec<_> = (1..=12).map(|i| node(&format!("Fkt {i:02}"))).collect();
        vec![node("Analamanga").with_children(
            District,
            vec![node("Avaradrano").with_children(
                Commune,
                vec![
                    node("Alasora").with_children(Fokontany, vec![node("Ankadievo"), node("ambodivona")]),
                    node("Sabotsy Namehana").with_children(Fokontany, fokontany),
                ],
            )],
        )]
    }

    #[test]
    fn context_collects_children_siblings_and_full_chain() {
        let tree = tree();
        let hits = search("alasora", &tree, LevelFilter::All);
        let ctx = build_context(&hits[0], &tree);

        assert_eq!(ctx.parents.len(), 3);
        let children: Vec<&str> = ctx.children.iter().map(|n| n.name()).collect();
        assert_eq!(children, ["Ankadievo", "ambodivona"]);
        let siblings: Vec<&str> = ctx.siblings.iter().map(|n| n.name()).collect();
        assert_eq!(siblings, ["Sabotsy Namehana"]);

        let chain: Vec<String> = ctx
            .complete_hierarchy
            .iter()
            .map(|s| format!("{}:{}", s.level, s.name))
            .collect();
        assert_eq!(
            chain,
            [
                "country:Madagascar",
                "region:Analamanga",
                "district:Avaradrano",
                "commune:Alasora",
                "fokontany:Ankadievo",
                "fokontany:ambodivona",
            ]
        );
    }

    #[test]
    fn tree_view_is_capped() {
        let tree = tree();
        let hits = search("sabotsy", &tree, LevelFilter::All);
        let view = build_tree(&hits[0], DEFAULT_TREE_LIMIT);
        assert_eq!(view.children.len(), 10);
        assert!(view.children.iter().all(|b| b.level == Fokontany && b.children.is_empty()));
        assert_eq!(view.depth, 0);

        let expanded = expand(&hits[0]);
        assert_eq!(expanded.children.map(|c| c.len()), Some(12));
    }

    #[test]
    fn leaf_has_no_children_to_expand() {
        let tree = tree();
        let hits = search("ankadievo", &tree, LevelFilter::All);
        assert!(expand(&hits[0]).children.is_none());
        assert!(build_tree(&hits[0], 5).children.is_empty());
    }

    #[test]
    fn text_report_layout() {
        let tree = tree();
        let hits = search("alasora", &tree, LevelFilter::All);
        let ctx = build_context(&hits[0], &tree);
        let expected = "COMMUNE: Alasora\n\
                        \n\
                        Part of:\n\
                        country: Madagascar\n  \
                        region: Analamanga\n    \
                        district: Avaradrano\n\
                        \n\
                        Contains:\n  \
                        fokontany: ambodivona\n  \
                        fokontany: Ankadievo\n";
        assert_eq!(ctx.to_text(), expected);
    }
}
