//! Plan CLI command
//!
//! Reads a budget request from a JSON or YAML file, builds the plan and
//! prints it, optionally exporting it as well.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};

use crate::config::settings::{OutputFormat, Settings};
use crate::display::{format_balances, format_plan};
use crate::error::{TripError, TripResult};
use crate::export::{export_plan_json, export_plan_to_file, export_plan_yaml};
use crate::models::BudgetRequest;
use crate::services::PlanService;

/// Arguments of `tripsplit plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Budget request file (.json, .yaml or .yml)
    pub request: PathBuf,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the plan to this file (.json, .yaml or .csv for transfers)
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Only print who owes and who is owed
    #[arg(short, long)]
    pub balances: bool,
}

/// Load a budget request, choosing the parser from the file extension
pub fn read_request(path: &Path) -> TripResult<BudgetRequest> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| TripError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&contents)?),
        _ => Ok(serde_json::from_str(&contents)?),
    }
}

/// Handle `tripsplit plan`
pub fn handle_plan_command(settings: &Settings, args: PlanArgs) -> TripResult<()> {
    let request = read_request(&args.request)?;
    let plan = PlanService::new(settings).plan(&request)?;

    let problems = plan.verify();
    if !problems.is_empty() {
        debug!(?problems, "plan invariants not met");
    }

    if args.balances {
        print!("{}", format_balances(&plan.balances, &plan.currency));
    } else {
        match args.format.unwrap_or(settings.output_format) {
            OutputFormat::Table => print!("{}", format_plan(&plan)),
            OutputFormat::Json => {
                let mut stdout = std::io::stdout().lock();
                export_plan_json(&plan, &mut stdout, true)?;
                println!();
            }
            OutputFormat::Yaml => {
                let mut stdout = std::io::stdout().lock();
                export_plan_yaml(&plan, &mut stdout)?;
            }
        }
    }

    if let Some(path) = args.export {
        let format = export_plan_to_file(&plan, &path)?;
        info!(path = %path.display(), ?format, "exported plan");
        println!("Plan exported to: {}", path.display());
    }

    Ok(())
}
