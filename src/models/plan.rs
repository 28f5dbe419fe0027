//! Plan model
//!
//! The derived entities produced by one planning call and the `Plan`
//! aggregate that bundles them. A plan is never patched: any change to the
//! request means computing a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Remainders at or below this amount count as settled
pub const SETTLEMENT_EPSILON: Money = Money::from_cents(1);

/// A category with its share of the total budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedCategory {
    pub name: String,
    pub amount: Money,
}

impl AllocatedCategory {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Trip length and the daily spend it allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBudget {
    pub days: u32,
    pub per_day: Money,
}

/// What one participant should fairly pay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantShare {
    pub name: String,
    pub share: Money,
}

/// Net position of one participant: positive is owed, negative owes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub participant: String,

    /// Sum of the participant's recorded payments
    pub paid: Money,

    pub amount: Money,
}

impl Balance {
    pub fn status(&self) -> BalanceStatus {
        if self.amount.is_negative() {
            BalanceStatus::Owes(self.amount.abs())
        } else if self.amount.is_positive() {
            BalanceStatus::IsOwed(self.amount)
        } else {
            BalanceStatus::Settled
        }
    }
}

/// Human-facing reading of a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Owes(Money),
    IsOwed(Money),
    Settled,
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceStatus::Owes(amount) => write!(f, "owes {}", amount),
            BalanceStatus::IsOwed(amount) => write!(f, "is owed {}", amount),
            BalanceStatus::Settled => write!(f, "settled"),
        }
    }
}

/// A suggested payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} {}", self.from, self.to, self.amount)
    }
}

/// Result of a planning call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub summary: String,
    pub name: String,
    pub currency: String,
    pub total: Money,
    pub day_budget: DayBudget,
    pub categories: Vec<AllocatedCategory>,
    pub shares: Vec<ParticipantShare>,
    pub balances: Vec<Balance>,
    pub settlements: Vec<Transfer>,
    pub generated_at: DateTime<Utc>,
}

impl Plan {
    /// Sum of all allocated category amounts
    pub fn allocated_total(&self) -> Money {
        self.categories.iter().map(|c| c.amount).sum()
    }

    /// Sum of all recorded payments
    pub fn paid_total(&self) -> Money {
        self.balances.iter().map(|b| b.paid).sum()
    }

    /// Check the structural guarantees of a plan, returning every violation found
    pub fn verify(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.categories.is_empty() && self.allocated_total() != self.total {
            problems.push(format!(
                "categories sum to {} but the budget is {}",
                self.allocated_total(),
                self.total
            ));
        }

        let limit = self.balances.len().saturating_sub(1);
        if self.settlements.len() > limit {
            problems.push(format!(
                "{} transfers for {} participants",
                self.settlements.len(),
                self.balances.len()
            ));
        }

        let mut owed_left = None;
        let mut owing_left = None;
        for balance in &self.balances {
            let outgoing: Money = self
                .settlements
                .iter()
                .filter(|t| t.from == balance.participant)
                .map(|t| t.amount)
                .sum();
            let incoming: Money = self
                .settlements
                .iter()
                .filter(|t| t.to == balance.participant)
                .map(|t| t.amount)
                .sum();

            // Same sign as the balance unless a transfer overshot it
            let residual = balance.amount + outgoing - incoming;
            let overshot = (balance.amount.is_positive() && residual.is_negative())
                || (balance.amount.is_negative() && residual.is_positive())
                || (balance.amount.is_zero() && !residual.is_zero());
            if overshot {
                problems.push(format!(
                    "transfers overshoot {} by {}",
                    balance.participant,
                    residual.abs()
                ));
            } else if residual > SETTLEMENT_EPSILON {
                owed_left.get_or_insert((&balance.participant, residual));
            } else if residual < -SETTLEMENT_EPSILON {
                owing_left.get_or_insert((&balance.participant, residual.abs()));
            }
        }

        // Settlement stops once either side is exhausted, never before
        if let (Some((creditor, owed)), Some((debtor, owing))) = (owed_left, owing_left) {
            problems.push(format!(
                "{} is still owed {} while {} still owes {}",
                creditor, owed, debtor, owing
            ));
        }

        problems
    }
}
