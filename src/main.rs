use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use paysheet::config::ConfigLoader;
use paysheet::report::{build_report, write_report};

#[derive(Parser)]
#[command(
    name = "paysheet",
    version,
    about = "Monthly work-hours and pay reporting from declarative period tables",
    long_about = "Paysheet reads three JSON period tables (work schedule, holidays \
                  and salary rates), replays the weekly work cadence from the \
                  earliest scheduled day up to today, and prints one line per \
                  calendar month with the hours worked and the amount to charge."
)]
struct Cli {
    /// Directory holding schedule.json, holidays.json and salary.json
    #[arg(short, long, default_value = "./config", value_name = "DIR")]
    config: PathBuf,

    /// Report up to this date instead of the current date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    as_of: Option<NaiveDate>,

    /// Print the report as JSON instead of tab separated lines
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Sends log output to stderr so stdout stays a clean report.
/// RUST_LOG overrides the verbosity flags when set.
fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "paysheet=info",
        _ => "paysheet=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loader = ConfigLoader::load(&cli.config)?;
    let today = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let groups = build_report(loader.config(), today)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &groups)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &groups)?;
    }

    Ok(())
}
