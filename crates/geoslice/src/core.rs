//! Core location lookup for the geoslice library.
//!
//! This module provides the main [`Locator`] interface. It owns a built hierarchy and runs the
//! full pipeline on it: optional normalisation of free text, partitioned search, then ranking.
//!
//! # Quick Start
//!
//! ```rust
//! use geoslice::{LocateConfig, Locator};
//!
//! let locator = Locator::new_embedded()?;
//!
//! // Tokens, most-significant first
//! let results = locator.locate(&["USA", "NEW YORK"])?;
//! assert_eq!(results[0].str_address(), "NEW YORK,USA");
//!
//! // Free text, as a person would write it
//! let config = LocateConfig::builder().max_rank(70).build();
//! let results = locator.locate_str("101 C, Alley A, Pearl Street, New York", &config)?;
//! assert_eq!(results.len(), 2);
//! # Ok::<(), geoslice::error::GeosliceError>(())
//! ```

use geoslice_data_processing::{DataSource, HierarchySpec, HierarchyStats, load_spec};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    MatchResult,
    error::Result,
    hierarchy::build_hierarchy,
    normalize::normalize_query,
    rank::post_process,
    search::{LocateConfig, SearchNode},
};

pub type MatchResults<'a> = Vec<MatchResult<'a>>;

/// Owns a read-only hierarchy and answers location queries against it.
///
/// The hierarchy is fully built before a `Locator` exists and is never modified afterwards, so
/// a single instance can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use geoslice::{LocateConfigBuilder, Locator};
///
/// let locator = Locator::new_embedded()?;
/// let config = LocateConfigBuilder::trace().build();
/// let results = locator.locate_with_config(&["USA", "NEW YORK", "103 ALKAZAM"], &config)?;
/// assert!(results[0].is_placeholder());
/// # Ok::<(), geoslice::error::GeosliceError>(())
/// ```
#[derive(Debug)]
pub struct Locator {
    root: SearchNode,
}

impl Locator {
    /// Create a `Locator` over the demo hierarchy bundled with the library.
    #[instrument(name = "Create Locator with Embedded Data", level = "info")]
    pub fn new_embedded() -> Result<Self> {
        Self::from_source(&DataSource::Embedded)
    }

    /// Create a `Locator` from whichever source `GEOSLICE_HIERARCHY` selects.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&DataSource::from_env()?)
    }

    #[instrument(name = "Create Locator", level = "info")]
    pub fn from_source(source: &DataSource) -> Result<Self> {
        let t_init = std::time::Instant::now();
        let spec = load_spec(source)?;
        let locator = Self::from_spec(spec)?;
        info!(
            elapsed_seconds = ?t_init.elapsed(),
            stats = ?locator.stats(),
            "Locator initialization complete"
        );
        Ok(locator)
    }

    pub fn from_spec(spec: HierarchySpec) -> Result<Self> {
        Ok(Self::from_root(build_hierarchy(spec)?))
    }

    /// Wrap an already built hierarchy.
    pub fn from_root(root: impl Into<SearchNode>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &SearchNode {
        &self.root
    }

    #[must_use]
    pub fn stats(&self) -> HierarchyStats {
        self.root.stats()
    }

    /// Run the partitioned search only; results are unranked and in search order.
    pub fn locate_raw<S: AsRef<str>>(
        &self,
        query: &[S],
        return_empty: bool,
        limit: Option<usize>,
    ) -> Result<MatchResults<'_>> {
        Ok(self.root.locate(query, return_empty, limit)?)
    }

    /// Search with the default configuration and rank the results.
    pub fn locate<S: AsRef<str>>(&self, query: &[S]) -> Result<MatchResults<'_>> {
        self.locate_with_config(query, &LocateConfig::default())
    }

    #[instrument(level = "debug", skip_all, fields(terms = query.len(), config = ?config))]
    pub fn locate_with_config<S: AsRef<str>>(
        &self,
        query: &[S],
        config: &LocateConfig,
    ) -> Result<MatchResults<'_>> {
        let found = self.locate_raw(query, config.return_empty, config.limit)?;
        debug!(found = found.len(), "Search complete");
        Ok(post_process(found, query, config.max_rank))
    }

    /// Normalise free text (see [`normalize_query`]) and search for it.
    pub fn locate_str(&self, query: &str, config: &LocateConfig) -> Result<MatchResults<'_>> {
        let tokens = normalize_query(query);
        debug!(query, ?tokens, "Normalised query");
        self.locate_with_config(&tokens, config)
    }

    /// Search several queries in parallel. Output order matches input order.
    #[instrument(level = "info", skip_all, fields(queries = queries.len()))]
    pub fn locate_bulk<Q, S>(
        &self,
        queries: &[Q],
        config: &LocateConfig,
    ) -> Result<Vec<MatchResults<'_>>>
    where
        Q: AsRef<[S]> + Sync,
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.locate_with_config(query.as_ref(), config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use geoslice_data_processing::{EntrySpec, NodeSpec, create_test_hierarchy_file};

    use super::*;
    use crate::{LocateConfigBuilder, error::GeosliceError, search::test_support::paths};

    fn setup_test_env() {
        let _ = crate::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_locator_creation() {
        setup_test_env();
        let locator = Locator::new_embedded().expect("Embedded locator should build");
        assert_eq!(locator.stats().entities, 8);
    }

    #[test]
    fn test_from_file() {
        setup_test_env();
        let spec = HierarchySpec::new(NodeSpec::partition(
            "",
            vec![NodeSpec::pool("OHIO", vec![EntrySpec::new("MAIN STREET")])],
        ));
        let file = create_test_hierarchy_file(&spec).unwrap();
        let locator = Locator::from_source(&DataSource::Path(file.path().into())).unwrap();
        let results = locator.locate(&["MAIN STREET"]).unwrap();
        assert_eq!(paths(&results), ["MAIN STREET,OHIO"]);
    }

    #[test]
    fn test_missing_file_error() {
        let err = Locator::from_source(&DataSource::Path("/no/such/hierarchy.json".into()))
            .unwrap_err();
        assert!(matches!(err, GeosliceError::DataProcessing(_)));
    }

    #[test]
    fn test_locate_str_matches_tokens() {
        setup_test_env();
        let locator = Locator::new_embedded().unwrap();
        let config = LocateConfig::default();
        let from_text = locator.locate_str("Pearl Street, New York, USA", &config).unwrap();
        let from_tokens = locator
            .locate_with_config(&["USA", "NEW YORK", "PEARL STREET"], &config)
            .unwrap();
        assert_eq!(from_text, from_tokens);
        assert_eq!(paths(&from_text), ["PEARL STREET,NEW YORK,USA"]);
    }

    #[test]
    fn test_limit_config() {
        let locator = Locator::new_embedded().unwrap();
        let config = LocateConfigBuilder::new().limit(2).build();
        let results = locator.locate_str("101 C", &config).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_bulk_matches_sequential() {
        setup_test_env();
        let locator = Locator::new_embedded().unwrap();
        let queries = vec![
            vec!["USA", "NEW YORK"],
            vec!["PEARL STREET"],
            vec!["101 C"],
            vec![],
        ];
        let config = LocateConfigBuilder::trace().build();
        let bulk = locator.locate_bulk(&queries, &config).unwrap();
        assert_eq!(bulk.len(), queries.len());
        for (query, batch) in queries.iter().zip(&bulk) {
            assert_eq!(batch, &locator.locate_with_config(query, &config).unwrap());
        }
    }
}
