//! Portfolio holdings and the pure aggregates derived from them.
//!
//! Every function in these modules takes an item slice (plus a target where
//! noted) and returns a fresh aggregate; none of them mutate items.

pub mod allocation;
pub mod concentration;
pub mod holdings;
pub mod milestones;
pub mod summary;

pub use allocation::*;
pub use concentration::*;
pub use holdings::*;
pub use milestones::*;
pub use summary::*;
