use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use ride_core::{Dispatcher, Driver, FixedClock, FixturePaths, Trip};
use tracing::{info, Level};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride_dispatch",
    about = "Load ride-share fixtures and dispatch trip requests",
    long_about = "Loads drivers, passengers and trips from CSV fixtures, then\n\
                  requests or assigns trips and prints the outcome."
)]
struct Cli {
    /// Directory holding drivers.csv, passengers.csv and trips.csv.
    ///
    /// Defaults to the fixtures in the ride_core source tree the binary was
    /// built from; pass this when running an installed binary.
    #[arg(long, env = "RIDE_SHARE_DATA")]
    data: Option<PathBuf>,
    /// Fixed RFC 3339 start time for new trips (defaults to now)
    #[arg(long)]
    at: Option<DateTime<Utc>>,
    /// Maximum log level
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print fleet counts and total driver revenue
    Summary,
    /// Give a passenger the first available driver
    Request {
        passenger_id: i64,
    },
    /// Assign one passenger to the longest-idle driver, `count` times, marking each unavailable
    Assign {
        passenger_id: i64,
        /// Number of consecutive assignments for the same passenger
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Show a driver's status and earnings
    Driver {
        id: i64,
    },
}

// ── Helpers ────────────────────────────────────────────────────────

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load(cli: &Cli) -> Result<Dispatcher> {
    let paths = cli
        .data
        .as_ref()
        .map(FixturePaths::in_dir)
        .unwrap_or_default();
    let dispatcher = Dispatcher::load(&paths)
        .with_context(|| format!("loading fixtures from {}", paths.drivers.display()))?;
    Ok(match cli.at {
        Some(at) => dispatcher.with_clock(Box::new(FixedClock(at))),
        None => dispatcher,
    })
}

fn print_trip(trip: &Rc<Trip>) {
    println!(
        "trip {:>4}  driver {:>4}  passenger {:>4}  started {}",
        trip.id(),
        trip.driver(),
        trip.passenger(),
        trip.start_time().to_rfc3339()
    );
}

fn print_driver(driver: &Driver) {
    println!("Driver {} ({})", driver.id(), driver.name());
    println!("  vehicle:          {}", driver.vehicle_id());
    println!("  status:           {}", driver.status().as_str());
    println!("  trips:            {}", driver.trips().len());
    println!("  average rating:   {:.2}", driver.average_rating());
    println!("  total revenue:    {:.2}", driver.total_revenue());
    println!("  revenue per hour: {:.2}", driver.total_revenue_per_hour());
}

// ── Entry point ────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    let mut dispatcher = load(&cli)?;

    match cli.command {
        Commands::Summary => {
            let summary = dispatcher.summary();
            println!("Drivers:              {}", summary.drivers);
            println!("  available:          {}", summary.available_drivers);
            println!("Passengers:           {}", summary.passengers);
            println!("Trips:                {}", summary.trips);
            println!("  pending:            {}", summary.pending_trips);
            println!("Total driver revenue: {:.2}", summary.total_driver_revenue);
        }
        Commands::Request { passenger_id } => match dispatcher.request_trip(passenger_id)? {
            Some(trip) => print_trip(&trip),
            None => println!("No available driver for passenger {passenger_id}"),
        },
        Commands::Assign {
            passenger_id,
            count,
        } => {
            for _ in 0..count {
                match dispatcher.assign_by_driver_status(passenger_id)? {
                    Some(trip) => print_trip(&trip),
                    None => {
                        println!("No available driver for passenger {passenger_id}");
                        break;
                    }
                }
            }
            info!(
                remaining = dispatcher.available_drivers().count(),
                "assignment finished"
            );
        }
        Commands::Driver { id } => match dispatcher.find_driver(id)? {
            Some(driver) => print_driver(driver),
            None => println!("No driver with id {id}"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn data_flag_help_mentions_installed_binaries() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("installed binary"));
    }

    #[test]
    fn assign_help_describes_single_passenger() {
        let mut command = Cli::command();
        let assign = command.find_subcommand_mut("assign").expect("assign subcommand");
        let about = assign.get_about().map(|about| about.to_string()).unwrap_or_default();
        assert!(about.starts_with("Assign one passenger"));
    }

    #[test]
    fn parses_assign_with_count() {
        let cli = Cli::try_parse_from([
            "ride_dispatch",
            "--at",
            "2018-03-01T09:30:00Z",
            "assign",
            "4",
            "--count",
            "3",
        ])
        .expect("valid arguments");
        assert!(cli.at.is_some());
        assert_eq!(cli.log_level, Level::INFO);
        assert!(matches!(
            cli.command,
            Commands::Assign {
                passenger_id: 4,
                count: 3
            }
        ));
    }
}
