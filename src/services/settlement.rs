//! Settlement suggestions
//!
//! Greedy debt simplification: the largest remaining debtor pays the largest
//! remaining creditor as much as either side allows, repeatedly, until one
//! side runs out. Every transfer clears at least one party, so the number of
//! transfers never exceeds the number of participants minus one. This is a
//! heuristic; it is not guaranteed to find the fewest possible transfers.
//!
//! A party whose remainder drops to `SETTLEMENT_EPSILON` or below counts as
//! settled, which also absorbs cent-level residue from share rounding.

use tracing::debug;

use crate::models::{Balance, Money, Transfer, SETTLEMENT_EPSILON};

#[derive(Debug)]
struct Party<'a> {
    name: &'a str,
    remaining: Money,
}

/// Split balances into creditors and debtors, largest magnitude first
///
/// Equal magnitudes keep their original participant order.
fn partition(balances: &[Balance]) -> (Vec<Party<'_>>, Vec<Party<'_>>) {
    let mut creditors: Vec<Party<'_>> = balances
        .iter()
        .filter(|b| b.amount.is_positive())
        .map(|b| Party {
            name: &b.participant,
            remaining: b.amount,
        })
        .collect();
    let mut debtors: Vec<Party<'_>> = balances
        .iter()
        .filter(|b| b.amount.is_negative())
        .map(|b| Party {
            name: &b.participant,
            remaining: b.amount.abs(),
        })
        .collect();

    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    (creditors, debtors)
}

/// Produce the transfers that settle `balances`
pub fn settle(balances: &[Balance]) -> Vec<Transfer> {
    let (mut creditors, mut debtors) = partition(balances);
    let mut transfers = Vec::new();

    let mut ci = 0;
    let mut di = 0;
    while ci < creditors.len() && di < debtors.len() {
        let creditor = &mut creditors[ci];
        let debtor = &mut debtors[di];

        let amount = creditor.remaining.min(debtor.remaining);
        transfers.push(Transfer {
            from: debtor.name.to_string(),
            to: creditor.name.to_string(),
            amount,
        });

        creditor.remaining -= amount;
        debtor.remaining -= amount;

        if creditor.remaining <= SETTLEMENT_EPSILON {
            ci += 1;
        }
        if debtor.remaining <= SETTLEMENT_EPSILON {
            di += 1;
        }
    }

    debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = transfers.len(),
        "settled balances"
    );

    transfers
}
