//! Best-effort persistence of imported items.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::PortfolioItem;

/// Receives the items of every upload that produced at least one item,
/// including partial imports where some rows were rejected.
///
/// Calls are fire-and-forget: the context never waits for them and a
/// failure is only logged.
#[async_trait]
pub trait PortfolioSink: Send + Sync {
    async fn save_items(&self, items: Vec<PortfolioItem>) -> Result<()>;
}

/// Sink that discards everything.
#[derive(Clone, Default)]
pub struct NoOpPortfolioSink;

#[async_trait]
impl PortfolioSink for NoOpPortfolioSink {
    async fn save_items(&self, _items: Vec<PortfolioItem>) -> Result<()> {
        Ok(())
    }
}

/// Sink that records every batch it receives.
#[derive(Clone, Default)]
pub struct MockPortfolioSink {
    batches: Arc<Mutex<Vec<Vec<PortfolioItem>>>>,
}

impl MockPortfolioSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all received batches.
    pub fn batches(&self) -> Vec<Vec<PortfolioItem>> {
        self.batches.lock().map(|b| b.clone()).unwrap_or_default()
    }

    /// Returns the number of received batches.
    pub fn len(&self) -> usize {
        self.batches.lock().map(|b| b.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PortfolioSink for MockPortfolioSink {
    async fn save_items(&self, items: Vec<PortfolioItem>) -> Result<()> {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(items);
        }
        Ok(())
    }
}
