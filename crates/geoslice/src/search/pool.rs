use tracing::trace;

use super::Result;
use crate::{BTreeLookup, LocationEntity, MatchResult, OrderedLookup};

/// Leaf node holding an unpartitioned set of entities behind an [`OrderedLookup`].
#[derive(Debug)]
pub struct Pool {
    entity: LocationEntity,
    lookup: Box<dyn OrderedLookup>,
}

impl Pool {
    /// An empty pool backed by a [`BTreeLookup`].
    pub fn new(entity: LocationEntity) -> Self {
        Self::with_lookup(entity, BTreeLookup::new())
    }

    pub fn with_lookup(entity: LocationEntity, lookup: impl OrderedLookup + 'static) -> Self {
        Self {
            entity,
            lookup: Box::new(lookup),
        }
    }

    pub fn insert(&mut self, entity: LocationEntity) {
        self.lookup.insert(entity);
    }

    #[must_use]
    pub fn entity(&self) -> &LocationEntity {
        &self.entity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Resolve the innermost token of `query` against this pool's entities.
    ///
    /// The tokens before it are accepted as context but do not narrow the lookup; same-named
    /// entities are all returned and told apart by ranking.
    pub fn locate<S: AsRef<str>>(
        &self,
        query: &[S],
        return_empty: bool,
        limit: Option<usize>,
    ) -> Result<Vec<MatchResult<'_>>> {
        let matches = match query.split_last() {
            Some((name, context)) => {
                trace!(
                    pool = self.entity.name(),
                    name = name.as_ref(),
                    context = ?context.iter().map(|t| t.as_ref()).collect::<Vec<&str>>(),
                    ?limit,
                    "Pool lookup"
                );
                self.lookup.find(name.as_ref(), limit)?
            }
            None => self.lookup.entries(limit)?,
        };

        if matches.is_empty() {
            return Ok(if return_empty {
                vec![MatchResult::placeholder(self.entity.name())]
            } else {
                Vec::new()
            });
        }

        Ok(matches
            .into_iter()
            .map(|entity| {
                let mut result = MatchResult::found(entity);
                result.push_parent(self.entity.name());
                result
            })
            .collect())
    }
}
