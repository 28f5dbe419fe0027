//! JSON export of a plan

use std::io::Write;

use crate::error::TripResult;
use crate::models::Plan;

/// Write `plan` as JSON
pub fn export_plan_json<W: Write>(plan: &Plan, writer: &mut W, pretty: bool) -> TripResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, plan)?;
    } else {
        serde_json::to_writer(writer, plan)?;
    }
    Ok(())
}
