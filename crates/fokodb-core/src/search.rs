// crates/fokodb-core/src/search.rs

//! # Hierarchical Search
//!
//! One pre-order walk over the whole tree per call. Every node whose name
//! contains the term (case-insensitively) becomes a [`SearchResult`] carrying
//! a snapshot of its ancestor path, its score and its descendant counts.
//!
//! The walk keeps no state between calls; concurrent searches over the same
//! tree do not interfere.

use crate::level::{HierarchyLevel, LevelFilter};
use crate::model::{AdministrativeNode, ChildrenCount, HierarchyPath, PathSegment, SearchResult};
use crate::score::score;
use crate::text::{compare_names, fold_key, normalize_term};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Terms shorter than this (in characters, after trimming) match nothing.
pub const MIN_TERM_CHARS: usize = 2;

/// Outcome of matching one name against the normalized term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchInfo {
    pub is_match: bool,
    pub is_exact_match: bool,
}

/// Case-insensitive containment and equality of `name` against `term`.
///
/// `term` must already be normalized.
pub fn evaluate_match(name: &str, term: &str) -> MatchInfo {
    let folded = fold_key(name);
    MatchInfo {
        is_match: folded.contains(term),
        is_exact_match: folded == term,
    }
}

/// Searches every level of `tree` for names containing `term`.
///
/// `term` is trimmed and case-folded first; if fewer than
/// [`MIN_TERM_CHARS`] characters remain, nothing is traversed and the result
/// is empty. With a [`LevelFilter::Only`] filter the walk still descends
/// through every level but only reports nodes at that level.
///
/// Results are ordered by [`compare_results`].
///
/// # Examples
///
/// ```
/// use fokodb_core::{search, AdministrativeNode, HierarchyLevel, LevelFilter};
///
/// let tree = vec![AdministrativeNode::new("Analamanga").with_children(
///     HierarchyLevel::District,
///     vec![AdministrativeNode::new("Antananarivo Renivohitra")],
/// )];
///
/// let hits = search("anana", &tree, LevelFilter::All);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].level, HierarchyLevel::District);
/// assert_eq!(hits[0].hierarchy_path.len(), 2);
///
/// assert!(search(" a ", &tree, LevelFilter::All).is_empty());
/// ```
#[instrument(level = "debug", skip(tree), fields(regions = tree.len()))]
pub fn search<'a>(
    term: &str,
    tree: &'a [AdministrativeNode],
    filter: LevelFilter,
) -> Vec<SearchResult<'a>> {
    let term = normalize_term(term);
    if term.chars().count() < MIN_TERM_CHARS {
        debug!("term too short, skipping traversal");
        return Vec::new();
    }

    let mut results = Vec::new();
    let root = HierarchyPath::root();
    for region in tree {
        visit(region, HierarchyLevel::Region, &root, &term, filter, &mut results);
    }

    sort_results(&mut results);
    debug!(matches = results.len(), "search finished");
    results
}

/// Visits `node`, then its direct children.
///
/// `path` holds the ancestors of `node` and is never modified; children get a
/// fresh copy extended with this node's segment.
fn visit<'a>(
    node: &'a AdministrativeNode,
    level: HierarchyLevel,
    path: &HierarchyPath,
    term: &str,
    filter: LevelFilter,
    results: &mut Vec<SearchResult<'a>>,
) {
    let info = evaluate_match(&node.name, term);
    if info.is_match && filter.permits(level) {
        results.push(make_result(node, level, path, info, term));
    }

    let Some(child_level) = level.child() else {
        return;
    };
    let children = crate::accessor::children(node, child_level);
    if children.is_empty() {
        return;
    }

    let child_path = path.appended(PathSegment::new(level, node.name.clone()));
    for child in children {
        visit(child, child_level, &child_path, term, filter, results);
    }
}

fn make_result<'a>(
    node: &'a AdministrativeNode,
    level: HierarchyLevel,
    path: &HierarchyPath,
    info: MatchInfo,
    term: &str,
) -> SearchResult<'a> {
    SearchResult {
        id: node.id.clone().unwrap_or_else(generate_id),
        name: node.name.clone(),
        level,
        is_exact_match: info.is_exact_match,
        match_score: score(&node.name, term),
        hierarchy_path: path.clone(),
        children_count: ChildrenCount::of(node, level),
        node,
    }
}

/// Fresh identifier for nodes that carry none.
fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Ranking order of two results.
///
/// 1. exact matches before partial ones
/// 2. higher score first
/// 3. shorter path (closer to the root) first
/// 4. name, case-insensitive
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.is_exact_match
        .cmp(&a.is_exact_match)
        .then_with(|| b.match_score.cmp(&a.match_score))
        .then_with(|| a.hierarchy_path.len().cmp(&b.hierarchy_path.len()))
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Stable sort by [`compare_results`].
pub fn sort_results(results: &mut [SearchResult<'_>]) {
    results.sort_by(compare_results);
}

/// First result whose name and level match `segment`.
///
/// Lets a caller jump from a path entry (e.g. a context's parent) to that
/// entry's own result, if the search produced one.
pub fn find_result_for_segment<'r, 'a>(
    results: &'r [SearchResult<'a>],
    segment: &PathSegment,
) -> Option<&'r SearchResult<'a>> {
    let level = segment.level.admin()?;
    results
        .iter()
        .find(|r| r.level == level && r.name == segment.name)
}

/// A search together with bookkeeping for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary<'a> {
    pub results: Vec<SearchResult<'a>>,
    pub total_matches: usize,
    /// `None` when every level was searched.
    pub filtered_by: Option<HierarchyLevel>,
    #[serde(rename = "searchTimeMs", serialize_with = "serialize_millis")]
    pub search_time: Duration,
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis().try_into().unwrap_or(u64::MAX))
}

/// Runs [`search`] and records how long it took.
pub fn search_with_summary<'a>(
    term: &str,
    tree: &'a [AdministrativeNode],
    filter: LevelFilter,
) -> SearchSummary<'a> {
    let started = Instant::now();
    let results = search(term, tree, filter);
    SearchSummary {
        total_matches: results.len(),
        filtered_by: filter.level(),
        search_time: started.elapsed(),
        results,
    }
}
