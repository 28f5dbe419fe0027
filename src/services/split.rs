//! Quick even split of a single amount

use crate::error::{TripError, TripResult};
use crate::models::Money;

/// What each of `parts` people pays for `amount`, rounded to the cent
pub fn split_evenly(amount: Money, parts: usize) -> TripResult<Money> {
    if parts == 0 {
        return Err(TripError::EmptyParticipants);
    }
    if amount.is_negative() {
        return Err(TripError::Validation(format!(
            "Cannot split a negative amount: {}",
            amount
        )));
    }
    let parts = i64::try_from(parts)
        .map_err(|_| TripError::Validation(format!("Too many parts: {}", parts)))?;
    Ok(amount.div_round(parts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_evenly() {
        assert_eq!(
            split_evenly(Money::from_units(120), 3).unwrap(),
            Money::from_units(40)
        );
        assert_eq!(split_evenly(Money::from_units(100), 3).unwrap().cents(), 3333);
    }

    #[test]
    fn test_split_into_zero_parts() {
        assert!(matches!(
            split_evenly(Money::from_units(10), 0),
            Err(TripError::EmptyParticipants)
        ));
    }

    #[test]
    fn test_split_negative_amount() {
        assert!(split_evenly(Money::from_units(-10), 2).is_err());
    }
}
