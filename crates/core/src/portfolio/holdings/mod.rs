//! Portfolio holdings: one classified, fully computed record per CSV row.

mod holdings_model;


pub use holdings_model::{
    assign_portfolio_weights, percent_of, total_market_value, NewPortfolioItem, PortfolioItem,
};
