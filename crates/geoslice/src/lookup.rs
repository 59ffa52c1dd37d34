//! Leaf-level exact lookup.
//!
//! A [`Pool`](crate::Pool) does not search its entries itself; it hands the innermost query
//! token to an [`OrderedLookup`]. Matching rules, ordering and tie-breaking are owned by the
//! implementation. [`BTreeLookup`] is the default.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use crate::LocationEntity;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup backend unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LookupError>;

/// Exact-key, limit-bounded lookup over a set of [`LocationEntity`] values.
///
/// `limit` of `None` means unbounded. Implementations must be safe to read from several
/// threads at once; entries are only inserted while the hierarchy is being built.
pub trait OrderedLookup: fmt::Debug + Send + Sync {
    fn insert(&mut self, entity: LocationEntity);

    /// Entities whose name equals `key`, at most `limit` of them.
    fn find(&self, key: &str, limit: Option<usize>) -> Result<Vec<&LocationEntity>>;

    /// Every entity in lookup order, at most `limit` of them.
    fn entries(&self, limit: Option<usize>) -> Result<Vec<&LocationEntity>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered map from entity name to the entities carrying it.
///
/// Keys iterate in byte order. Entities sharing a name are returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct BTreeLookup {
    by_name: BTreeMap<String, Vec<LocationEntity>>,
    len: usize,
}

impl BTreeLookup {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderedLookup for BTreeLookup {
    fn insert(&mut self, entity: LocationEntity) {
        self.by_name
            .entry(entity.name().to_string())
            .or_default()
            .push(entity);
        self.len += 1;
    }

    fn find(&self, key: &str, limit: Option<usize>) -> Result<Vec<&LocationEntity>> {
        Ok(self.by_name.get(key).map_or_else(Vec::new, |same_name| {
            same_name
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .collect()
        }))
    }

    fn entries(&self, limit: Option<usize>) -> Result<Vec<&LocationEntity>> {
        Ok(self
            .by_name
            .values()
            .flatten()
            .take(limit.unwrap_or(usize::MAX))
            .collect())
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl FromIterator<LocationEntity> for BTreeLookup {
    fn from_iter<T: IntoIterator<Item = LocationEntity>>(iter: T) -> Self {
        let mut lookup = Self::new();
        for entity in iter {
            lookup.insert(entity);
        }
        lookup
    }
}
