//! Service layer for tripsplit
//!
//! One module per stage of the planning engine. Every stage is a pure
//! function of its inputs; `plan` wires them together.

pub mod allocation;
pub mod balance;
pub mod per_day;
pub mod plan;
pub mod settlement;
pub mod share;
pub mod split;

pub use allocation::{allocate_categories, AllocationMode};
pub use balance::compute_balances;
pub use per_day::day_budget;
pub use plan::{plan, PlanService};
pub use settlement::settle;
pub use share::compute_shares;
pub use split::split_evenly;
