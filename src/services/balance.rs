//! Balance calculation
//!
//! Nets what each participant paid against their fair share. Payers that
//! are not in the share list are ignored here; the plan service rejects such
//! expenses before balances are computed.

use std::collections::HashMap;

use crate::error::{TripError, TripResult};
use crate::models::{Balance, Expense, Money, ParticipantShare};

/// Total paid per payer name
///
/// Fails with `MalformedExpense` when one payer's payments overflow.
pub fn paid_totals(expenses: &[Expense]) -> TripResult<HashMap<&str, Money>> {
    let mut totals: HashMap<&str, Money> = HashMap::new();
    for expense in expenses {
        let total = totals.entry(expense.payer.as_str()).or_default();
        *total = total.checked_add(expense.amount).ok_or_else(|| {
            TripError::malformed_expense(
                &expense.payer,
                "payments exceed the supported range",
            )
        })?;
    }
    Ok(totals)
}

/// Compute the signed balance of every participant in `shares`
pub fn compute_balances(
    expenses: &[Expense],
    shares: &[ParticipantShare],
) -> TripResult<Vec<Balance>> {
    let totals = paid_totals(expenses)?;

    shares
        .iter()
        .map(|share| {
            let paid = totals.get(share.name.as_str()).copied().unwrap_or_default();
            let amount = paid.checked_sub(share.share).ok_or_else(|| {
                TripError::InvalidBudget(format!(
                    "balance of {} exceeds the supported range",
                    share.name
                ))
            })?;
            Ok(Balance {
                participant: share.name.clone(),
                paid,
                amount,
            })
        })
        .collect()
}
