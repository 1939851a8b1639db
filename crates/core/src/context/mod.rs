//! The stateful holder around the pure pipeline.
//!
//! `PortfolioContext` owns the current snapshot of imported items, the
//! allocation and era targets, and the dismissed-insight set. Every read
//! recomputes aggregates from those inputs.

mod context_model;
mod context_service;
mod sink;


pub use context_model::{PortfolioDashboard, PortfolioSnapshot, PortfolioTargets};
pub use context_service::PortfolioContext;
pub use sink::{MockPortfolioSink, NoOpPortfolioSink, PortfolioSink};
