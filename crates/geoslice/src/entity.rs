use std::fmt;

use itertools::Itertools;

/// Separator used when rendering an address as a single string.
pub const SEPARATOR: &str = ",";

/// An immutable, named location in the hierarchy.
///
/// `ancestor_address` holds the context *inside the owning container*, most-significant first
/// and excluding `name`. A building "101 C" on "PEARL STREET" inside the "NEW YORK" pool has
/// the ancestor address `["PEARL STREET"]`; the pool and everything above it are added while a
/// search unwinds. Partition and pool entities therefore have an empty ancestor address.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocationEntity {
    name: String,
    ancestor_address: Vec<String>,
}

impl LocationEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ancestor_address: Vec::new(),
        }
    }

    pub fn with_ancestors<I, S>(name: impl Into<String>, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ancestor_address: ancestors.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ancestor_address(&self) -> &[String] {
        &self.ancestor_address
    }

    /// `ancestor_address ++ [name]`.
    pub fn full_address(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.ancestor_address
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }
}

impl fmt::Display for LocationEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.full_address().rev().join(SEPARATOR))
    }
}

/// One candidate produced by a search.
///
/// A result borrows the entity it matched from the hierarchy; it never owns it. A result with
/// no entity is a placeholder recording that the search reached a pool and found nothing there.
///
/// The address is accumulated while the search unwinds, so it is stored least-significant
/// first: the matched name, then its context, then every enclosing pool and partition.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    entity: Option<&'a LocationEntity>,
    address: Vec<&'a str>,
    pub(crate) rank: u8,
}

impl<'a> MatchResult<'a> {
    pub(crate) fn found(entity: &'a LocationEntity) -> Self {
        Self {
            entity: Some(entity),
            address: entity.full_address().rev().collect(),
            rank: 0,
        }
    }

    pub(crate) fn placeholder(container: &'a str) -> Self {
        Self {
            entity: None,
            address: vec![container],
            rank: 0,
        }
    }

    /// Record an enclosing level. Anonymous levels (such as an unnamed root) leave no trace.
    pub(crate) fn push_parent(&mut self, name: &'a str) {
        if !name.is_empty() {
            self.address.push(name);
        }
    }

    #[must_use]
    pub fn entity(&self) -> Option<&'a LocationEntity> {
        self.entity
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.entity.is_none()
    }

    /// Distance from the query, 0 (exact) to 100. Zero until ranked.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// Address, least-significant first.
    #[must_use]
    pub fn address(&self) -> &[&'a str] {
        &self.address
    }

    /// Address, most-significant first; the order queries are written in.
    #[must_use]
    pub fn address_path(&self) -> Vec<&'a str> {
        self.address.iter().rev().copied().collect()
    }

    #[must_use]
    pub fn str_address(&self) -> String {
        self.address.join(SEPARATOR)
    }
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_placeholder() {
            "NoResult:"
        } else {
            "Result:"
        };
        write!(f, "{tag} {} ({})", self.str_address(), self.rank)
    }
}
