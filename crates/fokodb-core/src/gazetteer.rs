// crates/fokodb-core/src/gazetteer.rs
use crate::accessor::count_descendants;
use crate::common::DbStats;
use crate::context::{build_context, HierarchyContext};
use crate::level::{HierarchyLevel, LevelFilter};
use crate::model::{AdministrativeNode, SearchResult};
use crate::search::{search, search_with_summary, SearchSummary};
use crate::text::{compare_names, fold_key};

/// An owned administrative tree: the list of regions of one source document.
///
/// This is a thin convenience layer over the free functions in
/// [`search`](crate::search), [`context`](crate::context) and
/// [`accessor`](crate::accessor), which work on any `&[AdministrativeNode]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gazetteer {
    regions: Vec<AdministrativeNode>,
}

impl Gazetteer {
    pub fn new(regions: Vec<AdministrativeNode>) -> Self {
        Self { regions }
    }

    /// Regions in document order.
    pub fn regions(&self) -> &[AdministrativeNode] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn into_regions(self) -> Vec<AdministrativeNode> {
        self.regions
    }

    /// Number of nodes at each level.
    pub fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            regions: self.regions.len(),
            ..DbStats::default()
        };
        for region in &self.regions {
            stats.districts += count_descendants(region, HierarchyLevel::Region, HierarchyLevel::District);
            stats.communes += count_descendants(region, HierarchyLevel::Region, HierarchyLevel::Commune);
            stats.fokontany += count_descendants(region, HierarchyLevel::Region, HierarchyLevel::Fokontany);
        }
        stats
    }

    /// Regions ordered by name, case-insensitively.
    pub fn sorted_regions(&self) -> Vec<&AdministrativeNode> {
        let mut out: Vec<&AdministrativeNode> = self.regions.iter().collect();
        out.sort_by(|a, b| compare_names(&a.name, &b.name));
        out
    }

    /// Regions whose name contains `query`, case-insensitively, by name.
    ///
    /// A blank query returns every region.
    pub fn filter_regions(&self, query: &str) -> Vec<&AdministrativeNode> {
        let q = fold_key(query.trim());
        let mut out = self.sorted_regions();
        if !q.is_empty() {
            out.retain(|r| fold_key(&r.name).contains(&q));
        }
        out
    }

    /// See [`search`](crate::search::search).
    pub fn search(&self, term: &str, filter: LevelFilter) -> Vec<SearchResult<'_>> {
        search(term, &self.regions, filter)
    }

    /// See [`search_with_summary`](crate::search::search_with_summary).
    pub fn search_with_summary(&self, term: &str, filter: LevelFilter) -> SearchSummary<'_> {
        search_with_summary(term, &self.regions, filter)
    }

    /// See [`build_context`](crate::context::build_context).
    pub fn context<'r, 'a>(&'a self, result: &'r SearchResult<'a>) -> HierarchyContext<'r, 'a> {
        build_context(result, &self.regions)
    }
}

impl From<Vec<AdministrativeNode>> for Gazetteer {
    fn from(regions: Vec<AdministrativeNode>) -> Self {
        Self::new(regions)
    }
}
