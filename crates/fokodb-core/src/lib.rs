// crates/fokodb-core/src/lib.rs

//! # fokodb-core
//!
//! Search over Madagascar's administrative tree:
//! region → district → commune → fokontany.
//!
//! The engine takes an already-parsed tree and a term, walks every level once
//! and returns ranked matches, each with its ancestor path and descendant
//! counts. A selected match can then be expanded into its parents, children
//! and siblings.
//!
//! ```
//! use fokodb_core::{AdministrativeNode, Gazetteer, HierarchyLevel, LevelFilter};
//!
//! let db = Gazetteer::new(vec![AdministrativeNode::new("Analamanga").with_children(
//!     HierarchyLevel::District,
//!     vec![AdministrativeNode::new("Avaradrano")],
//! )]);
//!
//! let hits = db.search("avara", LevelFilter::All);
//! assert_eq!(hits[0].name, "Avaradrano");
//! assert_eq!(hits[0].hierarchy_path.len(), 2); // country, region
//!
//! let ctx = db.context(&hits[0]);
//! assert!(ctx.siblings.is_empty());
//! ```

pub mod accessor;
pub mod common;
pub mod context;
pub mod error;
pub mod gazetteer;
pub mod level;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod resolve;
pub mod score;
pub mod search;
pub mod text;

// Re-exports
pub use crate::accessor::{collect_descendants, collect_descendants_at, count_descendants};
pub use crate::common::DbStats;
pub use crate::context::{
    build_context, build_tree, expand, format_hierarchy, ExpandedResult, HierarchyContext,
    HierarchyTree, DEFAULT_TREE_LIMIT,
};
pub use crate::error::{FokoError, Result};
pub use crate::gazetteer::Gazetteer;
pub use crate::level::{HierarchyLevel, LevelFilter};
pub use crate::model::{
    AdministrativeNode, ChildrenCount, HierarchyPath, PathSegment, SearchResult, SegmentLevel,
};
pub use crate::resolve::{find_siblings, locate_parent};
pub use crate::search::{search, search_with_summary, SearchSummary};
