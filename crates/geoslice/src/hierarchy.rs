//! Building a searchable tree from a [`HierarchySpec`].

use geoslice_data_processing::{DataError, EntrySpec, HierarchySpec, NodeSpec};
use tracing::{debug, instrument};

use crate::{BTreeLookup, LocationEntity, OrderedLookup, Partition, Pool, SearchNode};

/// Build the hierarchy described by `spec`, backing every pool with a [`BTreeLookup`].
pub fn build_hierarchy(spec: HierarchySpec) -> Result<SearchNode, DataError> {
    build_hierarchy_with(spec, BTreeLookup::new)
}

/// Build the hierarchy described by `spec`, creating each pool's lookup with `new_lookup`.
///
/// The hierarchy is validated first, so every partition key in the result is unique.
#[instrument(level = "debug", skip_all, fields(stats = ?spec.stats()))]
pub fn build_hierarchy_with<F, L>(
    spec: HierarchySpec,
    mut new_lookup: F,
) -> Result<SearchNode, DataError>
where
    F: FnMut() -> L,
    L: OrderedLookup + 'static,
{
    spec.validate()?;
    let root = build_node(spec.root, &mut new_lookup);
    debug!(root = root.name(), "Hierarchy built");
    Ok(root)
}

fn build_node<F, L>(node: NodeSpec, new_lookup: &mut F) -> SearchNode
where
    F: FnMut() -> L,
    L: OrderedLookup + 'static,
{
    match node {
        NodeSpec::Partition { name, children } => {
            let mut partition = Partition::new(LocationEntity::new(name));
            for child in children {
                partition.insert(build_node(child, new_lookup));
            }
            partition.into()
        }
        NodeSpec::Pool { name, entries } => {
            let mut lookup = new_lookup();
            for EntrySpec { name, address } in entries {
                lookup.insert(LocationEntity::with_ancestors(name, address));
            }
            Pool::with_lookup(LocationEntity::new(name), lookup).into()
        }
    }
}
