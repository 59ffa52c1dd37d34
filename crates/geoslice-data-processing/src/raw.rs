//! Serialisable description of an address hierarchy.
//!
//! A hierarchy is a tree of [`NodeSpec`]s. Interior nodes are partitions that route a query by
//! exact name; leaves are pools holding the searchable entries. The JSON form is tagged by
//! `"kind"`:
//!
//! ```json
//! {
//!   "root": {
//!     "kind": "partition",
//!     "name": "",
//!     "children": [
//!       { "kind": "pool", "name": "NEW YORK", "entries": [
//!           { "name": "101 C", "address": ["PEARL STREET"] }
//!       ] }
//!     ]
//!   }
//! }
//! ```

use std::{fs::File, io::BufReader, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{DataError, Result};

/// Top level hierarchy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySpec {
    pub root: NodeSpec,
}

/// One node of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSpec {
    /// Routes on the exact name of one of its children.
    Partition {
        name: String,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    /// Leaf collection searched by entry name.
    Pool {
        name: String,
        #[serde(default)]
        entries: Vec<EntrySpec>,
    },
}

/// A searchable leaf record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySpec {
    pub name: String,
    /// Context inside the owning pool, most-significant first, excluding `name`.
    #[serde(default)]
    pub address: Vec<String>,
}

impl EntrySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: Vec::new(),
        }
    }

    pub fn with_address<I, S>(name: impl Into<String>, address: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            address: address.into_iter().map(Into::into).collect(),
        }
    }
}

/// Node and entry counts of a hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyStats {
    pub partitions: usize,
    pub pools: usize,
    pub entities: usize,
}

impl NodeSpec {
    pub fn partition(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Partition {
            name: name.into(),
            children,
        }
    }

    pub fn pool(name: impl Into<String>, entries: Vec<EntrySpec>) -> Self {
        Self::Pool {
            name: name.into(),
            entries,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Partition { name, .. } | Self::Pool { name, .. } => name,
        }
    }

    fn accumulate_stats(&self, stats: &mut HierarchyStats) {
        match self {
            Self::Partition { children, .. } => {
                stats.partitions += 1;
                for child in children {
                    child.accumulate_stats(stats);
                }
            }
            Self::Pool { entries, .. } => {
                stats.pools += 1;
                stats.entities += entries.len();
            }
        }
    }

    fn validate_children(&self) -> Result<()> {
        match self {
            Self::Partition { name, children } => {
                if children.iter().any(|c| c.name().is_empty()) {
                    return Err(DataError::EmptyName {
                        parent: name.clone(),
                    });
                }
                if let Some(dup) = children.iter().map(Self::name).duplicates().next() {
                    return Err(DataError::DuplicateName {
                        parent: name.clone(),
                        name: dup.to_string(),
                    });
                }
                children.iter().try_for_each(Self::validate_children)
            }
            Self::Pool { name, entries } => {
                if entries.iter().any(|e| e.name.is_empty()) {
                    return Err(DataError::EmptyName {
                        parent: name.clone(),
                    });
                }
                // Same-named entries are fine as long as their context differs.
                if let Some(dup) = entries
                    .iter()
                    .duplicates_by(|e| (e.address.clone(), e.name.clone()))
                    .next()
                {
                    return Err(DataError::DuplicateName {
                        parent: name.clone(),
                        name: dup.address.iter().chain([&dup.name]).join(","),
                    });
                }
                Ok(())
            }
        }
    }
}

impl HierarchySpec {
    pub fn new(root: NodeSpec) -> Self {
        Self { root }
    }

    /// Check the naming rules a hierarchy must satisfy before it can be searched.
    ///
    /// Only the root may be anonymous. Children of a partition must have distinct names, since
    /// the name is the routing key. Pool entries must be distinct on their full address.
    pub fn validate(&self) -> Result<()> {
        self.root.validate_children()
    }

    #[must_use]
    pub fn stats(&self) -> HierarchyStats {
        let mut stats = HierarchyStats::default();
        self.root.accumulate_stats(&mut stats);
        stats
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.validate()?;
        Ok(spec)
    }

    #[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let spec: Self = serde_json::from_reader(reader)?;
        spec.validate()?;
        debug!(stats = ?spec.stats(), "Loaded hierarchy spec");
        Ok(spec)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HierarchySpec {
        HierarchySpec::new(NodeSpec::partition(
            "",
            vec![NodeSpec::partition(
                "USA",
                vec![
                    NodeSpec::pool(
                        "NEW YORK",
                        vec![
                            EntrySpec::new("PEARL STREET"),
                            EntrySpec::with_address("101 C", ["PEARL STREET"]),
                        ],
                    ),
                    NodeSpec::pool("CALIFORNIA", vec![EntrySpec::new("PEARL STREET")]),
                ],
            )],
        ))
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.partitions, 2);
        assert_eq!(stats.pools, 2);
        assert_eq!(stats.entities, 3);
    }

    #[test]
    fn test_valid_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "root": {
                "kind": "partition",
                "name": "",
                "children": [
                    { "kind": "pool", "name": "NEW YORK", "entries": [
                        { "name": "TIME SQUARE" },
                        { "name": "101 C", "address": ["TIME SQUARE"] }
                    ] }
                ]
            }
        }"#;
        let spec = HierarchySpec::from_json_str(json).expect("Should parse");
        let NodeSpec::Partition { children, .. } = &spec.root else {
            panic!("root should be a partition");
        };
        assert_eq!(children[0].name(), "NEW YORK");
        assert_eq!(spec.stats().entities, 2);
    }

    #[test]
    fn test_duplicate_child_rejected() {
        let spec = HierarchySpec::new(NodeSpec::partition(
            "USA",
            vec![
                NodeSpec::pool("NEW YORK", vec![]),
                NodeSpec::partition("NEW YORK", vec![]),
            ],
        ));
        let err = spec.validate().unwrap_err();
        assert!(matches!(err, DataError::DuplicateName { ref name, .. } if name == "NEW YORK"));
    }

    #[test]
    fn test_same_name_different_context_allowed() {
        let spec = HierarchySpec::new(NodeSpec::pool(
            "NEW YORK",
            vec![
                EntrySpec::with_address("101 C", ["PEARL STREET"]),
                EntrySpec::with_address("101 C", ["TIME SQUARE"]),
            ],
        ));
        assert!(spec.validate().is_ok());

        let spec = HierarchySpec::new(NodeSpec::pool(
            "NEW YORK",
            vec![
                EntrySpec::with_address("101 C", ["PEARL STREET"]),
                EntrySpec::with_address("101 C", ["PEARL STREET"]),
            ],
        ));
        let err = spec.validate().unwrap_err();
        assert!(
            matches!(err, DataError::DuplicateName { ref name, .. } if name == "PEARL STREET,101 C")
        );
    }

    #[test]
    fn test_empty_names_rejected() {
        let spec = HierarchySpec::new(NodeSpec::partition(
            "",
            vec![NodeSpec::pool("", vec![])],
        ));
        assert!(matches!(
            spec.validate(),
            Err(DataError::EmptyName { .. })
        ));

        let spec = HierarchySpec::new(NodeSpec::pool("X", vec![EntrySpec::new("")]));
        assert!(matches!(
            spec.validate(),
            Err(DataError::EmptyName { ref parent }) if parent == "X"
        ));
    }
}
