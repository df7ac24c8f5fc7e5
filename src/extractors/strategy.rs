//! Ordered fallback strategies for a single field.
//!
//! A field is recognized by trying strategies from most to least trusted
//! (typically geometric strict, geometric loose, then line regex). The first
//! strategy that returns a value wins; `None` means "not found, try the next".

use crate::page::PageContent;

/// One way of recognizing a field on a page.
pub trait FieldStrategy: Send + Sync {
    /// Short name for logs and tests.
    fn name(&self) -> &'static str;

    /// Try to extract the field. Must not fail; `None` means not found.
    fn extract(&self, page: &PageContent) -> Option<String>;
}

/// Value produced by a chain, with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHit {
    /// Name of the winning strategy
    pub strategy: &'static str,
    /// Extracted value
    pub value: String,
}

/// Prioritized list of strategies for one field.
pub struct StrategyChain {
    field: &'static str,
    strategies: Vec<Box<dyn FieldStrategy>>,
}

impl StrategyChain {
    /// Create an empty chain for `field`.
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            strategies: Vec::new(),
        }
    }

    /// Append a strategy at the lowest priority.
    pub fn then(mut self, strategy: impl FieldStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Strategy names in priority order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run strategies in order and return the first non-empty hit.
    pub fn run(&self, page: &PageContent) -> Option<ChainHit> {
        for strategy in &self.strategies {
            match strategy.extract(page) {
                Some(value) if !value.is_empty() => {
                    log::debug!("{}: '{}' via {}", self.field, value, strategy.name());
                    return Some(ChainHit {
                        strategy: strategy.name(),
                        value,
                    });
                },
                _ => log::trace!("{}: {} found nothing", self.field, strategy.name()),
            }
        }
        None
    }
}

impl std::fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyChain")
            .field("field", &self.field)
            .field("strategies", &self.names())
            .finish()
    }
}
