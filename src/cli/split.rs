//! Quick split CLI command

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{TripError, TripResult};
use crate::models::Money;
use crate::services::split_evenly;

/// Arguments of `tripsplit split`
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Amount to split (e.g., "120" or "120.50")
    pub amount: String,

    /// Number of people sharing it
    pub parts: usize,

    /// Currency code (defaults to the configured one)
    #[arg(short, long)]
    pub currency: Option<String>,
}

/// Handle `tripsplit split`
pub fn handle_split_command(settings: &Settings, args: SplitArgs) -> TripResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| TripError::Validation(e.to_string()))?;
    let each = split_evenly(amount, args.parts)?;
    let currency = args
        .currency
        .unwrap_or_else(|| settings.default_currency.clone());

    println!(
        "Split {} between {}: each pays {}",
        amount.format_with_currency(&currency),
        args.parts,
        each.format_with_currency(&currency)
    );
    Ok(())
}
