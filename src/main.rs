// Computer Club Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/computer-club-simulator day.txt
// ```
//
// Or with statistics and verbose logging:
//
// ```console
// $ ./target/release/computer-club-simulator day.txt --stats --verbose
// ```

use anyhow::Context;
use clap::Parser;
use computer_club_simulator::input::{load_club_day, InputError};
use computer_club_simulator::simulation::{run_club_day, LoggingConfig};
use computer_club_simulator::types::config::CliArgs;
use std::io::{self, Write};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Held until exit so file logs are flushed
    let _logging_guard = match LoggingConfig::from_args(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Computer Club Simulator");

    if let Err(e) = run(&args) {
        error!("Computer Club Simulator failed: {:#}", e);
        process::exit(1);
    }

    info!("Computer Club Simulator completed successfully");
}

/// Load the input, replay the day and write the report to stdout
fn run(args: &CliArgs) -> anyhow::Result<()> {
    let day = match load_club_day(&args.input) {
        Ok(day) => day,
        Err(InputError::InvalidLine { line_number, line, reason }) => {
            // The offending line replaces the report; this is not a failure
            info!(line_number, %reason, "Input rejected");
            println!("{}", line);
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to load club day"),
    };

    if args.print_config {
        let json = day.config.print_json().context("Failed to serialize club configuration")?;
        println!("{}", json);
        return Ok(());
    }

    if args.dry_run {
        day.config.validate().context("Club configuration is invalid")?;
        eprintln!("Input validation successful!");
        eprintln!("Dry run mode - the day will not be replayed.");
        eprintln!(
            "  Tables: {} | Hours: {} - {} | Price per hour: {} | Events: {}",
            day.config.tables_count,
            day.config.opening_time.format("%H:%M"),
            day.config.closing_time.format("%H:%M"),
            day.config.price_per_hour,
            day.events.len()
        );
        return Ok(());
    }

    let outcome = run_club_day(&day).context("Failed to run club day")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(outcome.report.as_bytes()).context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    if args.stats {
        eprintln!("{}", outcome.statistics);
    }

    Ok(())
}
