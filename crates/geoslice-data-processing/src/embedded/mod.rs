//! Hierarchy bundled with the library.
//!
//! The demo covers two countries, three states and a handful of streets and buildings, enough
//! to exercise partition routing, fan-out and ranking:
//!
//! ```text
//!                     (root)
//!                       |
//!         +-------------+--------------+
//!        USA                         INDIA
//!         |                            |
//!   +-----+------+               WEST BENGAL (pool)
//! NEW YORK    CALIFORNIA           KOLKATA
//!  (pool)       (pool)             BARA BAZAR, KOLKATA
//!  PEARL STREET PEARL STREET       101 C, BARA BAZAR, KOLKATA
//!  TIME SQUARE
//!  101 C, PEARL STREET
//!  101 C, TIME SQUARE
//! ```

use tracing::debug;

use crate::{HierarchySpec, Result};

const DEMO_HIERARCHY: &str = include_str!("demo_hierarchy.json");

/// Parse and validate the bundled demo hierarchy.
pub fn demo_spec() -> Result<HierarchySpec> {
    debug!(bytes = DEMO_HIERARCHY.len(), "Loading embedded demo hierarchy");
    HierarchySpec::from_json_str(DEMO_HIERARCHY)
}
