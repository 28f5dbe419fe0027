//! tripsplit - trip budget allocation and group expense settlement
//!
//! Given a trip's declared budget, date range, spending categories,
//! participants and recorded expenses, the engine allocates the budget across
//! categories, computes each participant's fair share, nets it against what
//! they actually paid, and suggests the transfers that settle everyone up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, budget requests and the derived plan entities
//! - `services`: The planning engine, one module per stage
//! - `display`: Terminal rendering of plans
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command handlers for the `tripsplit` binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use tripsplit::models::{BudgetRequest, Expense, Money};
//!
//! let request = BudgetRequest::new(Money::from_units(300))
//!     .with_participants(["A", "B", "C"])
//!     .add_expense(Expense::new("A", Money::from_units(300), "Hotel"));
//!
//! let plan = tripsplit::services::plan(&request)?;
//! assert_eq!(plan.settlements.len(), 2);
//! # Ok::<(), tripsplit::TripError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{TripError, TripResult};
