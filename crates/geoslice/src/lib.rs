//! Geoslice - Partitioned Location Resolution
//!
//! Geoslice resolves partial, loosely ordered address fragments against a fixed geographic
//! hierarchy. The hierarchy is a tree of *partitions* (country, state, ...) whose leaves are
//! *pools* of named locations. A query walks the partitions it names, fans out across the ones
//! it does not, and asks each pool it reaches for its finest-grained term.
//!
//! # Quick Start
//!
//! **Important**: query tokens go from most to least significant: `["Country", "State",
//! "Street"]`. [`normalize_query`] turns a written address into that order.
//!
//! ```rust
//! use geoslice::{LocateConfig, Locator};
//!
//! // Create a locator over the bundled demo hierarchy
//! let locator = Locator::new_embedded()?;
//!
//! // Exact path
//! let results = locator.locate(&["USA", "NEW YORK"])?;
//! assert_eq!(results[0].str_address(), "NEW YORK,USA");
//!
//! // A bare street name is looked for everywhere
//! for result in locator.locate(&["PEARL STREET"])? {
//!     println!("{result}");
//! }
//!
//! // Free text, ranked and filtered
//! let config = LocateConfig::builder().max_rank(70).build();
//! let results = locator.locate_str("101 C, Alley A, Pearl Street, New York", &config)?;
//! assert_eq!(results[0].str_address(), "101 C,PEARL STREET,NEW YORK,USA");
//! # Ok::<(), geoslice::error::GeosliceError>(())
//! ```
//!
//! # Ranking
//!
//! Search is exact and unranked. Ranking runs afterwards and scores each result by the share
//! of query tokens its address does not account for, so 0 is a perfect match and 100 shares
//! nothing with the query.
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
mod entity;
pub mod error;
pub mod hierarchy;
pub mod lookup;
mod normalize;
pub mod rank;
mod search;

pub use core::{Locator, MatchResults};

pub use config::LocateConfigBuilder;
pub use entity::{LocationEntity, MatchResult, SEPARATOR};
pub use geoslice_data_processing as data_processing;
pub use geoslice_data_processing::{DataSource, HierarchySpec, HierarchyStats};
pub use hierarchy::{build_hierarchy, build_hierarchy_with};
pub use lookup::{BTreeLookup, LookupError, OrderedLookup};
pub use normalize::normalize_query;
pub use search::{LocateConfig, Partition, Pool, SearchError, SearchNode};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Geoslice library.
///
/// Sets up a `tracing` subscriber that honours `RUST_LOG` and otherwise logs at `level`.
/// Only the first call installs anything; later calls are no-ops.
///
/// # Examples
///
/// ```rust
/// use geoslice::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), geoslice::error::GeosliceError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::GeosliceError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?;

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;
        Ok(())
    })
}
