//! Category allocation
//!
//! Splits the total budget across categories. Supplied amounts are used as
//! entered; when there are no categories, or none carries a positive amount,
//! the default weight table is applied by position. The rounding residual
//! always lands on the last category, so the allocation sums to the budget
//! exactly even if that makes the last category look lopsided.

use tracing::debug;

use crate::error::{TripError, TripResult};
use crate::models::{AllocatedCategory, CategoryInput, Money};

/// Default categories used when the request names none
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Accommodation", "Food", "Transport", "Activities"];

/// Positional default weights, in basis points
pub const DEFAULT_WEIGHTS: [i64; 4] = [4500, 2500, 1500, 1500];

/// Weight for any category past the end of `DEFAULT_WEIGHTS`
pub const FALLBACK_WEIGHT: i64 = 1000;

/// Name given to categories entered without one
pub const UNNAMED_CATEGORY: &str = "Other";

/// How the amounts of an allocation were chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationMode {
    /// No categories supplied; the default four were synthesized
    Defaults,
    /// Categories supplied without amounts; default weights applied by position
    Weighted,
    /// Supplied amounts used verbatim
    Supplied,
}

/// Weight of the category at `position`
pub fn default_weight(position: usize) -> i64 {
    DEFAULT_WEIGHTS
        .get(position)
        .copied()
        .unwrap_or(FALLBACK_WEIGHT)
}

/// Decide how `categories` will be allocated
pub fn allocation_mode(categories: &[CategoryInput]) -> AllocationMode {
    if categories.is_empty() {
        AllocationMode::Defaults
    } else if categories.iter().any(|c| c.amount.is_positive()) {
        AllocationMode::Supplied
    } else {
        AllocationMode::Weighted
    }
}

/// Allocate `total` across `categories`
///
/// The returned amounts always sum to `total`. Fails with `InvalidBudget`
/// when the amounts cannot be represented in cents.
pub fn allocate_categories(
    categories: &[CategoryInput],
    total: Money,
) -> TripResult<Vec<AllocatedCategory>> {
    let mode = allocation_mode(categories);
    debug!(?mode, count = categories.len(), %total, "allocating categories");

    let mut allocated: Vec<AllocatedCategory> = match mode {
        AllocationMode::Defaults => DEFAULT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                AllocatedCategory::new(*name, total.weighted_whole_units(default_weight(i)))
            })
            .collect(),
        AllocationMode::Weighted => categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                AllocatedCategory::new(
                    category_name(c),
                    total.weighted_whole_units(default_weight(i)),
                )
            })
            .collect(),
        AllocationMode::Supplied => categories
            .iter()
            .map(|c| AllocatedCategory::new(category_name(c), c.amount))
            .collect(),
    };

    let count = allocated.len();
    let out_of_range = move || {
        TripError::InvalidBudget(format!(
            "allocating {} across {} categories exceeds the supported range",
            total, count
        ))
    };

    let sum = Money::checked_sum(allocated.iter().map(|c| c.amount)).ok_or_else(out_of_range)?;
    if sum != total {
        let residual = total.checked_sub(sum).ok_or_else(out_of_range)?;
        if let Some(last) = allocated.last_mut() {
            debug!(%residual, category = %last.name, "reconciling allocation");
            last.amount = last.amount.checked_add(residual).ok_or_else(out_of_range)?;
        }
    }

    Ok(allocated)
}

fn category_name(category: &CategoryInput) -> String {
    let name = category.name.trim();
    if name.is_empty() {
        UNNAMED_CATEGORY.to_string()
    } else {
        name.to_string()
    }
}
