//! Core data models for tripsplit
//!
//! This module contains the planning inputs (budget request, categories,
//! expenses) and the derived entities collected into a `Plan`.

pub mod ids;
pub mod money;
pub mod plan;
pub mod request;

pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use plan::{
    AllocatedCategory, Balance, BalanceStatus, DayBudget, ParticipantShare, Plan, Transfer,
    SETTLEMENT_EPSILON,
};
pub use request::{BudgetRequest, CategoryInput, Expense};
