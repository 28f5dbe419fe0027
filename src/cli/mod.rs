//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod plan;
pub mod split;

pub use plan::{handle_plan_command, read_request, PlanArgs};
pub use split::{handle_split_command, SplitArgs};
