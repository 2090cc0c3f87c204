use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a dataset.
///
/// Returned by [`Gazetteer::stats`](crate::Gazetteer::stats); each count is the
/// number of nodes present at that level anywhere in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub regions: usize,
    pub districts: usize,
    pub communes: usize,
    pub fokontany: usize,
}
