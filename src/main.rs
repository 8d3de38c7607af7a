use anyhow::Context;
use clap::Parser;
use ride_planner::utils::{logger, report, validation::Validate};
use ride_planner::{CliConfig, Planner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ride-planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let planner = Planner::new(config);
    let summary = planner.run().context("planning run failed")?;

    println!(
        "Loaded {} rides, {} candidates after filtering",
        summary.catalog_size, summary.candidate_count
    );

    println!("\n=== Greedy selection ===");
    report::print_ride_vector(&summary.greedy);

    println!("\n=== Exhaustive selection ===");
    report::print_ride_vector(&summary.exhaustive);

    if summary.exhaustive_totals.time_minutes > summary.greedy_totals.time_minutes {
        println!(
            "\nExhaustive search beat the greedy heuristic by {} minutes",
            summary.exhaustive_totals.time_minutes - summary.greedy_totals.time_minutes
        );
    }

    Ok(())
}
