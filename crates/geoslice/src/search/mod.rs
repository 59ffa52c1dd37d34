//! Partitioned search over the address hierarchy.
//!
//! A query is a list of tokens, most-significant first (`["USA", "NEW YORK", "PEARL STREET"]`).
//! It enters the root [`Partition`], which consumes the outermost token when it names one of
//! its children and fans out to all of them when it does not. A [`Pool`] terminates the
//! descent by looking up the innermost token. On the way back up every level records its own
//! name on each [`MatchResult`](crate::MatchResult).

pub use error::SearchError;
mod partition;
mod pool;

use geoslice_data_processing::HierarchyStats;
pub use partition::Partition;
pub use pool::Pool;

use crate::{LocationEntity, MatchResult};
use error::Result;

/// Options for a single search.
///
/// Build one with [`LocateConfig::builder`] or [`crate::LocateConfigBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocateConfig {
    /// Emit a placeholder result for every pool the search reached without a match.
    pub return_empty: bool,
    /// Maximum number of results, `None` for unbounded.
    ///
    /// This is enforced exactly by each pool's lookup. A partition fanning out checks the
    /// remaining budget only between children, so the total can overshoot by one child's batch.
    pub limit: Option<usize>,
    /// Drop ranked results whose distance from the query is above this value.
    pub max_rank: Option<u8>,
}

impl LocateConfig {
    pub fn builder() -> crate::LocateConfigBuilder {
        crate::LocateConfigBuilder::new()
    }
}

/// A node of the hierarchy: either an interior [`Partition`] or a leaf [`Pool`].
#[derive(Debug)]
pub enum SearchNode {
    Partition(Partition),
    Pool(Pool),
}

impl SearchNode {
    /// Resolve `query` against this subtree.
    ///
    /// An empty query is a wildcard: partitions pass it to every child and pools list their
    /// entries, subject to `limit`.
    pub fn locate<S: AsRef<str>>(
        &self,
        query: &[S],
        return_empty: bool,
        limit: Option<usize>,
    ) -> Result<Vec<MatchResult<'_>>> {
        match self {
            Self::Partition(partition) => partition.locate(query, return_empty, limit),
            Self::Pool(pool) => pool.locate(query, return_empty, limit),
        }
    }

    #[must_use]
    pub fn entity(&self) -> &LocationEntity {
        match self {
            Self::Partition(partition) => partition.entity(),
            Self::Pool(pool) => pool.entity(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.entity().name()
    }

    #[must_use]
    pub fn stats(&self) -> HierarchyStats {
        let mut stats = HierarchyStats::default();
        self.accumulate_stats(&mut stats);
        stats
    }

    fn accumulate_stats(&self, stats: &mut HierarchyStats) {
        match self {
            Self::Partition(partition) => {
                stats.partitions += 1;
                for child in partition.children() {
                    child.accumulate_stats(stats);
                }
            }
            Self::Pool(pool) => {
                stats.pools += 1;
                stats.entities += pool.len();
            }
        }
    }
}

impl From<Partition> for SearchNode {
    fn from(partition: Partition) -> Self {
        Self::Partition(partition)
    }
}

impl From<Pool> for SearchNode {
    fn from(pool: Pool) -> Self {
        Self::Pool(pool)
    }
}

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SearchError {
        #[error("Lookup error: {0}")]
        Lookup(#[from] crate::lookup::LookupError),
    }
    pub type Result<T> = std::result::Result<T, SearchError>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::BTreeLookup;

    /// The USA/INDIA demo tree, built by hand so search tests do not depend on the loader.
    pub(crate) fn demo_tree() -> SearchNode {
        let new_york = Pool::with_lookup(
            LocationEntity::new("NEW YORK"),
            [
                LocationEntity::new("PEARL STREET"),
                LocationEntity::new("TIME SQUARE"),
                LocationEntity::with_ancestors("101 C", ["PEARL STREET"]),
                LocationEntity::with_ancestors("101 C", ["TIME SQUARE"]),
            ]
            .into_iter()
            .collect::<BTreeLookup>(),
        );
        let california = Pool::with_lookup(
            LocationEntity::new("CALIFORNIA"),
            std::iter::once(LocationEntity::new("PEARL STREET")).collect::<BTreeLookup>(),
        );
        let west_bengal = Pool::with_lookup(
            LocationEntity::new("WEST BENGAL"),
            [
                LocationEntity::new("KOLKATA"),
                LocationEntity::with_ancestors("BARA BAZAR", ["KOLKATA"]),
                LocationEntity::with_ancestors("101 C", ["KOLKATA", "BARA BAZAR"]),
            ]
            .into_iter()
            .collect::<BTreeLookup>(),
        );

        Partition::new(LocationEntity::new(""))
            .with_child(
                Partition::new(LocationEntity::new("USA"))
                    .with_child(new_york)
                    .with_child(california),
            )
            .with_child(Partition::new(LocationEntity::new("INDIA")).with_child(west_bengal))
            .into()
    }

    pub(crate) fn paths(results: &[MatchResult<'_>]) -> Vec<String> {
        results.iter().map(MatchResult::str_address).collect()
    }
}
