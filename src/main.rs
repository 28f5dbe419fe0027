use anyhow::Result;
use clap::{Parser, Subcommand};

use tripsplit::cli::{handle_plan_command, handle_split_command, PlanArgs, SplitArgs};
use tripsplit::config::{paths::TripPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "tripsplit",
    version,
    about = "Trip budget allocation and group expense settlement",
    long_about = "tripsplit divides a trip budget across spending categories, works out \
                  each traveller's fair share, and suggests the transfers that settle \
                  what everyone paid."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a plan from a budget request file
    Plan(PlanArgs),

    /// Split a single amount evenly
    Split(SplitArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TripPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    tripsplit::logging::init_tracing(&settings.log_level);

    match cli.command {
        Some(Commands::Plan(args)) => handle_plan_command(&settings, args)?,
        Some(Commands::Split(args)) => handle_split_command(&settings, args)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Already initialized, keeping: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("tripsplit Configuration");
            println!("=======================");
            println!("Config directory:  {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Output format:    {:?}", settings.output_format);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("tripsplit - trip budgets and settlements");
            println!();
            println!("Run 'tripsplit --help' for usage information.");
            println!("Run 'tripsplit plan <request.json>' to build a plan.");
        }
    }

    Ok(())
}
