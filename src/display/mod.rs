//! Display formatting for terminal output

pub mod plan;

pub use plan::{format_balances, format_plan, format_settlements};
