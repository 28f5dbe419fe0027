//! Fair share calculation
//!
//! Each category is divided evenly across participants and rounded to the
//! cent, then added to every running share, which is itself kept at cent
//! precision after each addition. Because rounding happens per category the
//! shares can drift from the allocated total by up to a cent per category.

use crate::error::{TripError, TripResult};
use crate::models::{AllocatedCategory, Money, ParticipantShare};

/// Compute every participant's share of the allocated categories
///
/// Returns shares in participant order; no shares for an empty list.
pub fn compute_shares(
    categories: &[AllocatedCategory],
    participants: &[String],
) -> TripResult<Vec<ParticipantShare>> {
    let divisor = participants.len().max(1) as i64;

    let mut shares: Vec<ParticipantShare> = participants
        .iter()
        .map(|name| ParticipantShare {
            name: name.clone(),
            share: Money::zero(),
        })
        .collect();

    for category in categories {
        let each = category.amount.div_round(divisor);
        for participant in shares.iter_mut() {
            participant.share = participant.share.checked_add(each).ok_or_else(|| {
                TripError::InvalidBudget(format!(
                    "share of {} exceeds the supported range",
                    participant.name
                ))
            })?;
        }
    }

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_even_split() {
        let categories = vec![
            AllocatedCategory::new("Accommodation", Money::from_units(450)),
            AllocatedCategory::new("Food", Money::from_units(250)),
            AllocatedCategory::new("Transport", Money::from_units(150)),
            AllocatedCategory::new("Activities", Money::from_units(150)),
        ];
        let shares = compute_shares(&categories, &names(&["p1", "p2"])).unwrap();

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].name, "p1");
        assert!(shares.iter().all(|s| s.share == Money::from_units(500)));
    }

    #[test]
    fn test_rounding_is_applied_per_category() {
        // 100 / 3 = 33.33 twice -> 66.66, not round(200 / 3) = 66.67
        let categories = vec![
            AllocatedCategory::new("A", Money::from_units(100)),
            AllocatedCategory::new("B", Money::from_units(100)),
        ];
        let shares = compute_shares(&categories, &names(&["x", "y", "z"])).unwrap();
        assert!(shares.iter().all(|s| s.share.cents() == 6666));
    }

    #[test]
    fn test_half_cent_rounds_up_each_time() {
        // 0.05 / 2 = 0.025 -> 0.03 per category
        let categories = vec![
            AllocatedCategory::new("A", Money::from_cents(5)),
            AllocatedCategory::new("B", Money::from_cents(5)),
        ];
        let shares = compute_shares(&categories, &names(&["x", "y"])).unwrap();
        assert!(shares.iter().all(|s| s.share.cents() == 6));
    }

    #[test]
    fn test_duplicate_names_are_separate_shares() {
        let categories = vec![AllocatedCategory::new("A", Money::from_units(90))];
        let shares = compute_shares(&categories, &names(&["x", "x", "y"])).unwrap();
        assert_eq!(shares.len(), 3);
        assert!(shares.iter().all(|s| s.share == Money::from_units(30)));
    }

    #[test]
    fn test_no_participants_yields_no_shares() {
        let categories = vec![AllocatedCategory::new("A", Money::from_units(90))];
        assert!(compute_shares(&categories, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_share_overflow_is_an_error() {
        // Reconciliation can leave a large positive and a large negative category
        let categories = vec![
            AllocatedCategory::new("A", Money::from_cents(i64::MAX)),
            AllocatedCategory::new("B", Money::from_cents(i64::MAX)),
            AllocatedCategory::new("C", Money::from_cents(-i64::MAX)),
        ];
        let result = compute_shares(&categories, &names(&["solo"]));
        assert!(matches!(result, Err(TripError::InvalidBudget(_))));
    }
}
