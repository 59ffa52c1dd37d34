use crate::{rank::MAX_RANK, search::LocateConfig};

/// Builder for creating locate configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct LocateConfigBuilder {
    config: LocateConfig,
}

impl LocateConfigBuilder {
    /// Create a new builder: no placeholders, unbounded, no rank filter
    pub fn new() -> Self {
        Self {
            config: LocateConfig::default(),
        }
    }

    /// Create a builder that reports every pool a query reached, matched or not
    pub fn trace() -> Self {
        Self::new().return_empty(true)
    }

    /// Create a builder that only keeps results matching at least half of the query
    pub fn strict() -> Self {
        Self::new().max_rank(50)
    }

    /// Emit placeholder results for pools where nothing matched
    pub fn return_empty(mut self, enabled: bool) -> Self {
        self.config.return_empty = enabled;
        self
    }

    /// Set the maximum number of results to return
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Remove any result limit
    pub fn unbounded(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Drop results ranked above `max_rank` (0-100)
    pub fn max_rank(mut self, max_rank: u8) -> Self {
        self.config.max_rank = Some(max_rank.min(MAX_RANK));
        self
    }

    /// Keep results of any rank
    pub fn no_rank_filter(mut self) -> Self {
        self.config.max_rank = None;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> LocateConfig {
        self.config
    }
}
