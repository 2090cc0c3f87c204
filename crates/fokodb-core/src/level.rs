// crates/fokodb-core/src/level.rs

//! # Hierarchy Schema
//!
//! The four administrative levels of Madagascar and how they nest:
//!
//! ```text
//! region ⊃ district ⊃ commune ⊃ fokontany
//! ```
//!
//! `country` only ever appears as the synthetic first segment of a result's
//! path; it is not a level of the tree.

use crate::error::{FokoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four administrative levels, ordered by containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyLevel {
    Region,
    District,
    Commune,
    Fokontany,
}

impl HierarchyLevel {
    /// All levels, outermost first.
    pub const ALL: [HierarchyLevel; 4] = [
        HierarchyLevel::Region,
        HierarchyLevel::District,
        HierarchyLevel::Commune,
        HierarchyLevel::Fokontany,
    ];

    /// The level directly contained in this one (`None` for fokontany).
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Region => Some(Self::District),
            Self::District => Some(Self::Commune),
            Self::Commune => Some(Self::Fokontany),
            Self::Fokontany => None,
        }
    }

    /// The level directly containing this one (`None` for region).
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Region => None,
            Self::District => Some(Self::Region),
            Self::Commune => Some(Self::District),
            Self::Fokontany => Some(Self::Commune),
        }
    }

    /// Depth below the synthetic country root: region = 1 … fokontany = 4.
    ///
    /// This is also the length of the hierarchy path of a node at this level.
    pub const fn depth(self) -> usize {
        match self {
            Self::Region => 1,
            Self::District => 2,
            Self::Commune => 3,
            Self::Fokontany => 4,
        }
    }

    /// How many levels `target` lies below `self`, if it does.
    pub fn levels_below(self, target: Self) -> Option<usize> {
        (target > self).then(|| target.depth() - self.depth())
    }

    /// Lowercase tag as used in the source document field names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::District => "district",
            Self::Commune => "commune",
            Self::Fokontany => "fokontany",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HierarchyLevel {
    type Err = FokoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(Self::Region),
            "district" => Ok(Self::District),
            "commune" => Ok(Self::Commune),
            "fokontany" => Ok(Self::Fokontany),
            _ => Err(FokoError::UnknownLevel(s.to_string())),
        }
    }
}

/// String-keyed variant of [`HierarchyLevel::child`].
///
/// Anything outside the four levels (including `"country"`) yields `None`.
pub fn child_level(name: &str) -> Option<HierarchyLevel> {
    name.parse::<HierarchyLevel>().ok().and_then(HierarchyLevel::child)
}

/// String-keyed variant of [`HierarchyLevel::parent`].
pub fn parent_level(name: &str) -> Option<HierarchyLevel> {
    name.parse::<HierarchyLevel>().ok().and_then(HierarchyLevel::parent)
}

/// Restricts which levels a search may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Every level is reported.
    #[default]
    All,
    /// Only nodes at exactly this level are reported.
    Only(HierarchyLevel),
}

impl LevelFilter {
    /// True if a node at `level` may appear in the results.
    #[inline]
    pub fn permits(self, level: HierarchyLevel) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == level,
        }
    }

    /// The restricting level, or `None` for [`LevelFilter::All`].
    pub fn level(self) -> Option<HierarchyLevel> {
        match self {
            Self::All => None,
            Self::Only(level) => Some(level),
        }
    }
}

impl From<HierarchyLevel> for LevelFilter {
    fn from(level: HierarchyLevel) -> Self {
        Self::Only(level)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(level) => level.fmt(f),
        }
    }
}

impl FromStr for LevelFilter {
    type Err = FokoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
