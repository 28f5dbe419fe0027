//! CSV export of suggested transfers

use std::io::Write;

use crate::error::TripResult;
use crate::models::Plan;

/// Write one row per transfer: `From,To,Amount,Currency`
pub fn export_settlements_csv<W: Write>(plan: &Plan, writer: &mut W) -> TripResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["From", "To", "Amount", "Currency"])?;

    for transfer in &plan.settlements {
        let amount = transfer.amount.to_string();
        csv_writer.write_record([
            transfer.from.as_str(),
            transfer.to.as_str(),
            amount.as_str(),
            plan.currency.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRequest, Expense, Money};
    use crate::services::plan;

    #[test]
    fn test_settlements_csv() {
        let request = BudgetRequest::new(Money::from_units(300))
            .with_currency("EUR")
            .with_participants(["A", "B, Jr.", "C"])
            .add_expense(Expense::new("A", Money::from_units(300), "Hotel"));
        let plan = plan(&request).unwrap();

        let mut buffer = Vec::new();
        export_settlements_csv(&plan, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();

        assert_eq!(
            csv,
            "From,To,Amount,Currency\n\"B, Jr.\",A,100.00,EUR\nC,A,100.00,EUR\n"
        );
    }

    #[test]
    fn test_no_settlements_writes_header_only() {
        let request = BudgetRequest::new(Money::from_units(10)).with_participants(["A"]);
        let plan = plan(&request).unwrap();

        let mut buffer = Vec::new();
        export_settlements_csv(&plan, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "From,To,Amount,Currency\n");
    }
}
