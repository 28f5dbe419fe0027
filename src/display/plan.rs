//! Plan display formatting
//!
//! Renders a plan for the terminal: headline figures, then one table per
//! section (categories, shares, balances) and the suggested transfers.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Balance, Plan, Transfer};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "%")]
    percent: i64,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Participant")]
    name: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Paid")]
    paid: String,
    #[tabled(rename = "Balance")]
    status: String,
}

/// Format a whole plan
pub fn format_plan(plan: &Plan) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", plan.summary));
    output.push_str(&format!("{}\n", "=".repeat(plan.summary.chars().count().max(20))));

    if plan.day_budget.days > 0 {
        output.push_str(&format!(
            "Per day: {} ({} days)\n",
            plan.day_budget.per_day.format_with_currency(&plan.currency),
            plan.day_budget.days
        ));
    } else {
        output.push_str("Per day: - (no date range)\n");
    }
    output.push_str(&format!(
        "Paid so far: {}\n",
        plan.paid_total().format_with_currency(&plan.currency)
    ));

    output.push_str("\nCategories\n");
    let rows: Vec<CategoryRow> = plan
        .categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            amount: c.amount.to_string(),
            percent: c.amount.percent_of(plan.total),
        })
        .collect();
    output.push_str(&Table::new(rows).with(Style::psql()).to_string());
    output.push('\n');

    output.push_str("\nBalances\n");
    let rows: Vec<BalanceRow> = plan
        .balances
        .iter()
        .zip(plan.shares.iter())
        .map(|(b, s)| BalanceRow {
            name: b.participant.clone(),
            share: s.share.to_string(),
            paid: b.paid.to_string(),
            status: b.status().to_string(),
        })
        .collect();
    output.push_str(&Table::new(rows).with(Style::psql()).to_string());
    output.push('\n');

    output.push_str("\nSettlements\n");
    output.push_str(&format_settlements(&plan.settlements, &plan.currency));

    output
}

/// One "who owes" line per participant, e.g. `Ben: USD owes 100.00`
pub fn format_balances(balances: &[Balance], currency: &str) -> String {
    if balances.is_empty() {
        return "No balance data available.\n".to_string();
    }

    let mut output = String::new();
    for balance in balances {
        output.push_str(&format!(
            "{}: {} {}\n",
            balance.participant,
            currency,
            balance.status()
        ));
    }
    output
}

/// Suggested transfers, one per line
pub fn format_settlements(transfers: &[Transfer], currency: &str) -> String {
    if transfers.is_empty() {
        return "No settlement suggestions available.\n".to_string();
    }

    let mut output = String::new();
    for transfer in transfers {
        output.push_str(&format!(
            "  {} -> {} {}\n",
            transfer.from,
            transfer.to,
            transfer.amount.format_with_currency(currency)
        ));
    }
    output
}
