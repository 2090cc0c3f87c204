// crates/fokodb-core/src/model.rs
use crate::error::FokoError;
use crate::level::HierarchyLevel;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Name of the synthetic root every hierarchy path starts from.
pub const COUNTRY_NAME: &str = "Madagascar";

/// A node of the administrative tree, exactly as it comes from the source JSON.
///
/// Children are keyed by the *next* level's name: a region holds `district`, a
/// district holds `commune`, a commune holds `fokontany`. Absent collections
/// and a missing `name` are tolerated; they read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdministrativeNode {
    #[serde(
        default,
        deserialize_with = "de_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<Vec<AdministrativeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commune: Option<Vec<AdministrativeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fokontany: Option<Vec<AdministrativeNode>>,
}

impl AdministrativeNode {
    /// A childless node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attaches `children` as the collection for `level`.
    ///
    /// `Region` has no collection on any node and is ignored.
    pub fn with_children(mut self, level: HierarchyLevel, children: Vec<AdministrativeNode>) -> Self {
        match level {
            HierarchyLevel::Region => {}
            HierarchyLevel::District => self.district = Some(children),
            HierarchyLevel::Commune => self.commune = Some(children),
            HierarchyLevel::Fokontany => self.fokontany = Some(children),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn de_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Ids show up both as strings and as numbers in the wild.
fn de_opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<RawId>::deserialize(d)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    }))
}

/// The level tag carried by a [`PathSegment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SegmentLevel {
    /// The synthetic root.
    Country,
    Admin(HierarchyLevel),
}

impl SegmentLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Admin(level) => level.as_str(),
        }
    }

    pub fn admin(self) -> Option<HierarchyLevel> {
        match self {
            Self::Country => None,
            Self::Admin(level) => Some(level),
        }
    }
}

impl fmt::Display for SegmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HierarchyLevel> for SegmentLevel {
    fn from(level: HierarchyLevel) -> Self {
        Self::Admin(level)
    }
}

impl From<SegmentLevel> for String {
    fn from(level: SegmentLevel) -> Self {
        level.as_str().to_string()
    }
}

impl TryFrom<String> for SegmentLevel {
    type Error = FokoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.eq_ignore_ascii_case("country") {
            Ok(Self::Country)
        } else {
            s.parse().map(Self::Admin)
        }
    }
}

/// One `{level, name}` step of a hierarchy path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub level: SegmentLevel,
    pub name: String,
}

impl PathSegment {
    pub fn new(level: impl Into<SegmentLevel>, name: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            name: name.into(),
        }
    }

    /// The `{country, "Madagascar"}` root segment.
    pub fn country() -> Self {
        Self::new(SegmentLevel::Country, COUNTRY_NAME)
    }
}

/// Ancestor chain from the synthetic country root down to (excluding) a node.
///
/// Paths are values: [`HierarchyPath::appended`] returns a new path and never
/// touches the one it was called on, so a path stored in a result cannot be
/// altered by the rest of the traversal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HierarchyPath(Vec<PathSegment>);

impl HierarchyPath {
    /// A path holding only the country root.
    pub fn root() -> Self {
        Self(vec![PathSegment::country()])
    }

    pub fn appended(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }

    /// The immediate parent of the node this path leads to.
    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.0.iter()
    }
}

impl From<Vec<PathSegment>> for HierarchyPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl<'p> IntoIterator for &'p HierarchyPath {
    type Item = &'p PathSegment;
    type IntoIter = std::slice::Iter<'p, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Descendant counts of a node, each aggregated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildrenCount {
    pub districts: usize,
    pub communes: usize,
    pub fokontany: usize,
}

/// One match produced by a search.
///
/// Immutable once built. `node` points back into the caller's tree; it is not
/// serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub id: String,
    pub name: String,
    pub level: HierarchyLevel,
    pub is_exact_match: bool,
    pub match_score: u32,
    pub hierarchy_path: HierarchyPath,
    pub children_count: ChildrenCount,
    #[serde(skip)]
    pub node: &'a AdministrativeNode,
}

impl SearchResult<'_> {
    /// The segment this result would occupy in a descendant's path.
    pub fn segment(&self) -> PathSegment {
        PathSegment::new(self.level, self.name.clone())
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn node_tolerates_missing_and_odd_fields() {
        let json = r#"[
            {"id": 12, "name": "Analamanga", "district": [
                {"name": "Avaradrano", "extra": true, "commune": null},
                {"id": "d-2"}
            ]},
            {"name": null}
        ]"#;
        let nodes: Vec<AdministrativeNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes[0].id.as_deref(), Some("12"));
        let districts = nodes[0].district.as_ref().unwrap();
        assert_eq!(districts[0].name, "Avaradrano");
        assert!(districts[0].commune.is_none());
        assert_eq!(districts[1].name, "");
        assert_eq!(districts[1].id.as_deref(), Some("d-2"));
        assert_eq!(nodes[1].name, "");
    }

    #[test]
    fn segment_level_serializes_as_plain_string() {
        let path = HierarchyPath::root().appended(PathSegment::new(HierarchyLevel::Region, "Analamanga"));
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(
            json,
            r#"[{"level":"country","name":"Madagascar"},{"level":"region","name":"Analamanga"}]"#
        );
        let back: HierarchyPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn appended_leaves_the_base_path_untouched() {
        let root = HierarchyPath::root();
        let longer = root.appended(PathSegment::new(HierarchyLevel::Region, "Boeny"));
        assert_eq!(root.len(), 1);
        assert_eq!(longer.len(), 2);
        assert_eq!(longer.last().map(|s| s.name.as_str()), Some("Boeny"));
    }
}
