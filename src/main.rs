mod calc;
mod cmd;
mod data;
mod logging;
mod state;
mod ui;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use data::{AppSettings, LabelLayout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dayplan", about = "plan a day's activities by time slot")]
struct Cli {
    /// Path to the data directory containing config.yaml and the log file (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Date to open (YYYY-MM-DD, default: today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Schedule type to open: standard, extended or non-instructional
    #[arg(long, global = true)]
    schedule_type: Option<String>,

    /// Use start/end label pairs instead of a single time label
    #[arg(long, global = true)]
    paired: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config.yaml
    Init,
    /// Print the generated time slots for a schedule type
    Slots {
        /// Schedule type token (unknown tokens fall back to standard)
        #[arg(default_value = "standard")]
        token: String,
        /// Only list slots that finish by the end of the day
        #[arg(long)]
        end_within_day: bool,
    },
    /// Print the export document of a freshly generated schedule
    Export,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    match cli.command {
        None => logging::init_file(&data_dir)?,
        Some(_) => logging::init_stderr()?,
    }

    // Auto-init when the data directory has no config.yaml and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command {
        ensure_initialized(&data_dir)?;
    }

    let layout_override = cli.paired.then_some(LabelLayout::Paired);
    match cli.command {
        None => cmd::root::run(cli.date, cli.schedule_type.as_deref(), cli.paired),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Slots {
            token,
            end_within_day,
        }) => {
            let settings = AppSettings::load()?;
            let policy = if end_within_day {
                calc::BoundaryPolicy::SlotEndWithinDay
            } else {
                calc::BOUNDARY_POLICY
            };
            cmd::slots::run(&token, policy, layout_override.unwrap_or(settings.label_layout))
        }
        Some(Commands::Export) => {
            let settings = AppSettings::load()?;
            let startup = cmd::root::resolve_startup(
                &settings,
                Local::now().date_naive(),
                cli.date,
                cli.schedule_type.as_deref(),
                cli.paired,
            );
            cmd::export::run(startup.date, startup.schedule_type, startup.layout)
        }
    }
}

/// Writes the default config when it is missing. Reports on stderr only, so
/// stdout stays clean for `export` and `slots`.
fn ensure_initialized(dir: &std::path::Path) -> anyhow::Result<()> {
    if dir_needs_init(dir) {
        eprintln!(
            "Data directory '{}' has no config.yaml, running init...",
            dir.display()
        );
        cmd::init::run_in_dir(dir)?;
    }
    Ok(())
}

/// Returns true when `dir` has no config.yaml yet.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    !dir.join("config.yaml").exists()
}
