use std::io::Write;

use tempfile::NamedTempFile;
use tracing::info;

use super::{HierarchySpec, error::Result};

/// Write `spec` as JSON into a temporary file.
///
/// The file is removed when the returned handle is dropped, so keep it alive for as long as
/// the path is needed.
pub fn create_test_hierarchy_file(spec: &HierarchySpec) -> Result<NamedTempFile> {
    info!(stats = ?spec.stats(), "Creating test hierarchy file");
    let mut file = NamedTempFile::new()?;
    file.write_all(spec.to_json_string()?.as_bytes())?;
    file.flush()?;
    Ok(file)
}
