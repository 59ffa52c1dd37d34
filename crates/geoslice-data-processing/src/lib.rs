//! Hierarchy data for the geoslice location resolver.
//!
//! This crate owns everything about *where a hierarchy comes from*: the serialisable
//! [`HierarchySpec`] format, its validation rules, the bundled demo dataset and helpers for
//! writing fixtures. Turning a [`HierarchySpec`] into a searchable tree happens in the
//! `geoslice` crate.
use std::path::PathBuf;

use tracing::{info, warn};

mod error;
pub mod embedded;
pub mod raw;
pub mod test_data;

pub use error::{DataError, Result};
pub use raw::{EntrySpec, HierarchySpec, HierarchyStats, NodeSpec};
pub use test_data::create_test_hierarchy_file;

/// Environment variable naming a hierarchy JSON file to load instead of the embedded demo.
pub const HIERARCHY_ENV_VAR: &str = "GEOSLICE_HIERARCHY";

/// Where a hierarchy is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The demo hierarchy compiled into the crate.
    #[default]
    Embedded,
    /// A JSON hierarchy file on disk.
    Path(PathBuf),
}

impl DataSource {
    /// Pick the source from [`HIERARCHY_ENV_VAR`], defaulting to the embedded dataset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(HIERARCHY_ENV_VAR) {
            Some(v) if v.is_empty() => Err(DataError::EnvVar {
                var: HIERARCHY_ENV_VAR,
            }),
            Some(v) => Ok(Self::Path(PathBuf::from(v))),
            None => Ok(Self::Embedded),
        }
    }
}

/// Load and validate the hierarchy described by `source`.
pub fn load_spec(source: &DataSource) -> Result<HierarchySpec> {
    match source {
        DataSource::Embedded => embedded::demo_spec(),
        DataSource::Path(path) => {
            info!(path = %path.display(), "Loading hierarchy from file");
            HierarchySpec::load_from_path(path).inspect_err(|e| {
                warn!(path = %path.display(), error = %e, "Failed to load hierarchy");
            })
        }
    }
}
