//! Per-day budget
//!
//! Inverted or missing date ranges are not an error: they yield zero days
//! and a zero daily figure.

use chrono::NaiveDate;

use crate::models::{DayBudget, Money};

/// Number of days between `start` and `end`, clamped at zero
pub fn trip_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> u32 {
    match (start, end) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days();
            u32::try_from(days.max(0)).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

/// Daily spend allowed by `total` over the trip
pub fn day_budget(start: Option<NaiveDate>, end: Option<NaiveDate>, total: Money) -> DayBudget {
    let days = trip_days(start, end);
    let per_day = if days > 0 {
        total.div_round(i64::from(days))
    } else {
        Money::zero()
    };
    DayBudget { days, per_day }
}
