//! YAML export of a plan

use std::io::Write;

use crate::error::{TripError, TripResult};
use crate::models::Plan;

/// Write `plan` as YAML with a short header comment
pub fn export_plan_yaml<W: Write>(plan: &Plan, writer: &mut W) -> TripResult<()> {
    writeln!(writer, "# tripsplit plan: {}", plan.summary)
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", plan.generated_at)
        .map_err(|e| TripError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, plan)?;
    Ok(())
}
