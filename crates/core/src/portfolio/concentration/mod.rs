//! Concentration of value in the largest rows, positions and categories.

mod concentration_model;
mod concentration_service;

pub use concentration_model::*;
pub use concentration_service::*;
