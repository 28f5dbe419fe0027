//! Plan service
//!
//! Validates a budget request and runs the engine components in order:
//! allocation, per-day budget, shares, balances, settlements. Validation
//! happens before anything is derived, so a request either yields a whole
//! plan or a single error.

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::error::{TripError, TripResult};
use crate::models::{BudgetRequest, CategoryInput, Money, Plan};
use crate::services::{allocation, balance, per_day, settlement, share};

/// Summary name used when the request has none
pub const DEFAULT_TRIP_NAME: &str = "Trip";

/// Service for building plans
pub struct PlanService<'a> {
    settings: &'a Settings,
}

impl<'a> PlanService<'a> {
    /// Create a new plan service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the plan for `request`
    pub fn plan(&self, request: &BudgetRequest) -> TripResult<Plan> {
        validate(request)?;

        let total = request.total_budget;
        let categories = normalize_categories(&request.categories);

        let allocated = allocation::allocate_categories(&categories, total)?;
        let day_budget = per_day::day_budget(request.start_date, request.end_date, total);
        let shares = share::compute_shares(&allocated, &request.participants)?;
        let balances = balance::compute_balances(&request.expenses, &shares)?;
        let settlements = settlement::settle(&balances);

        let name = self.trip_name(request);
        let currency = self.currency(request);
        let summary = format!(
            "{} - Total {} {} - {} people",
            name,
            currency,
            total,
            request.participants.len()
        );

        debug!(
            %summary,
            categories = allocated.len(),
            transfers = settlements.len(),
            "built plan"
        );

        Ok(Plan {
            summary,
            name,
            currency,
            total,
            day_budget,
            categories: allocated,
            shares,
            balances,
            settlements,
            generated_at: Utc::now(),
        })
    }

    fn trip_name(&self, request: &BudgetRequest) -> String {
        let name = request.name.trim();
        if name.is_empty() {
            DEFAULT_TRIP_NAME.to_string()
        } else {
            name.to_string()
        }
    }

    fn currency(&self, request: &BudgetRequest) -> String {
        let currency = request.currency.trim();
        if currency.is_empty() {
            self.settings.default_currency.clone()
        } else {
            currency.to_string()
        }
    }
}

/// Build a plan with default settings
pub fn plan(request: &BudgetRequest) -> TripResult<Plan> {
    let settings = Settings::default();
    PlanService::new(&settings).plan(request)
}

/// Reject requests that cannot produce a consistent plan
pub fn validate(request: &BudgetRequest) -> TripResult<()> {
    if request.total_budget.is_negative() {
        return Err(TripError::InvalidBudget(format!(
            "total budget cannot be negative ({})",
            request.total_budget
        )));
    }

    if request.participants.is_empty() {
        return Err(TripError::EmptyParticipants);
    }

    if request.participants.iter().any(|p| p.trim().is_empty()) {
        return Err(TripError::Validation(
            "Participant names cannot be empty".into(),
        ));
    }

    for expense in &request.expenses {
        if !expense.amount.is_positive() {
            return Err(TripError::malformed_expense(
                &expense.payer,
                format!("amount must be positive, got {}", expense.amount),
            ));
        }
        if !request.participants.iter().any(|p| *p == expense.payer) {
            return Err(TripError::malformed_expense(
                &expense.payer,
                "payer is not a participant",
            ));
        }
    }

    Ok(())
}

/// Coerce negative category amounts to zero
fn normalize_categories(categories: &[CategoryInput]) -> Vec<CategoryInput> {
    categories
        .iter()
        .map(|c| {
            if c.amount.is_negative() {
                warn!(category = %c.name, amount = %c.amount, "negative category amount treated as zero");
                CategoryInput::new(c.name.clone(), Money::zero())
            } else {
                c.clone()
            }
        })
        .collect()
}
