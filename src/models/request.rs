//! Budget request model
//!
//! Everything the planning engine reads about a trip: the declared budget,
//! its date range, the spending categories, the participants and the
//! expenses recorded so far.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{TripError, TripResult};

/// A spending category as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,

    /// Zero for every category means "use the default weights"
    #[serde(default)]
    pub amount: Money,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// A payment made by one participant on behalf of the group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default)]
    pub id: ExpenseId,

    /// Name of the participant who paid
    pub payer: String,

    pub amount: Money,

    #[serde(default)]
    pub description: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Record a new expense now
    pub fn new(payer: impl Into<String>, amount: Money, description: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            payer: payer.into(),
            amount,
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

/// Input to a planning call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    /// Trip name, used in the plan summary
    #[serde(default)]
    pub name: String,

    #[serde(alias = "budget")]
    pub total_budget: Money,

    /// Currency code; the configured default is used when blank
    #[serde(default)]
    pub currency: String,

    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub categories: Vec<CategoryInput>,

    /// Participant names; order breaks ties in settlement
    #[serde(default)]
    pub participants: Vec<String>,

    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl BudgetRequest {
    /// Create a request with only a total budget
    pub fn new(total_budget: Money) -> Self {
        Self {
            name: String::new(),
            total_budget,
            currency: String::new(),
            start_date: None,
            end_date: None,
            categories: Vec::new(),
            participants: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryInput>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Record an expense; the caller re-plans with the returned request
    pub fn add_expense(mut self, expense: Expense) -> Self {
        self.expenses.push(expense);
        self
    }

    /// Delete a recorded expense by ID
    pub fn remove_expense(mut self, id: ExpenseId) -> TripResult<Self> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| TripError::Validation(format!("Expense not found: {}", id)))?;
        self.expenses.remove(position);
        Ok(self)
    }
}

/// Dates arrive as `YYYY-MM-DD`; an empty string means "not set"
fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
