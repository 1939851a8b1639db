//! Allocation breakdowns by asset type, era and liquidity, plus targets and
//! rebalance suggestions measured against them.

mod allocation_model;
mod allocation_service;
mod target_model;

#[cfg(test)]
mod allocation_service_tests;

pub use allocation_model::*;
pub use allocation_service::*;
pub use target_model::*;
