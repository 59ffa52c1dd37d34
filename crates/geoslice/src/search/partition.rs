use ahash::AHashMap as HashMap;
use tracing::{debug, trace};

use super::{Result, SearchNode};
use crate::{LocationEntity, MatchResult};

/// Interior node that routes a query by the exact name of one of its children.
///
/// Children are keyed by their own name and keep insertion order, which is the order they are
/// visited in when a query has to fan out.
#[derive(Debug)]
pub struct Partition {
    entity: LocationEntity,
    children: Vec<SearchNode>,
    by_key: HashMap<String, usize>,
}

impl Partition {
    pub fn new(entity: LocationEntity) -> Self {
        Self {
            entity,
            children: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    /// Add a child under its own name, returning the child it replaced, if any.
    pub fn insert(&mut self, child: impl Into<SearchNode>) -> Option<SearchNode> {
        let child = child.into();
        match self.by_key.get(child.name()) {
            Some(&idx) => Some(std::mem::replace(&mut self.children[idx], child)),
            None => {
                self.by_key
                    .insert(child.name().to_string(), self.children.len());
                self.children.push(child);
                None
            }
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<SearchNode>) -> Self {
        self.insert(child);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SearchNode> {
        self.by_key.get(key).map(|&idx| &self.children[idx])
    }

    pub fn children(&self) -> impl Iterator<Item = &SearchNode> {
        self.children.iter()
    }

    #[must_use]
    pub fn entity(&self) -> &LocationEntity {
        &self.entity
    }

    /// Resolve `query` by its outermost token.
    ///
    /// When the token names a child, the rest of the query continues in that child; if nothing
    /// is left, the child itself is the match. Otherwise the whole, unreduced query is offered
    /// to every child in turn, since a different child may read the tokens at another offset.
    pub fn locate<S: AsRef<str>>(
        &self,
        query: &[S],
        return_empty: bool,
        limit: Option<usize>,
    ) -> Result<Vec<MatchResult<'_>>> {
        let routed = query
            .split_first()
            .and_then(|(head, rest)| Some((self.get(head.as_ref())?, rest)));

        let mut results = match routed {
            Some((child, [])) => {
                trace!(partition = self.entity.name(), child = child.name(), "Query ends at child");
                vec![MatchResult::found(child.entity())]
            }
            Some((child, rest)) => {
                trace!(partition = self.entity.name(), child = child.name(), "Routing into child");
                child.locate(rest, return_empty, limit)?
            }
            None => self.fan_out(query, return_empty, limit)?,
        };

        // Nothing to annotate when empty; placeholders, when requested, are already in `results`.
        for result in &mut results {
            result.push_parent(self.entity.name());
        }
        Ok(results)
    }

    fn fan_out<S: AsRef<str>>(
        &self,
        query: &[S],
        return_empty: bool,
        limit: Option<usize>,
    ) -> Result<Vec<MatchResult<'_>>> {
        debug!(
            partition = self.entity.name(),
            children = self.children.len(),
            ?limit,
            "No partition key matched, fanning out"
        );
        let mut results = Vec::new();
        let mut budget = limit;
        // The first child is always asked, so a zero budget still yields placeholders.
        for child in &self.children {
            let found = child.locate(query, return_empty, budget)?;
            budget = budget.map(|b| b.saturating_sub(found.len()));
            results.extend(found);
            if budget == Some(0) {
                debug!(partition = self.entity.name(), "Result budget exhausted");
                break;
            }
        }
        Ok(results)
    }
}
