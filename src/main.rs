use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use weather_report::{generate_daily_summary, generate_overview_summary, load_dataset, Error};

#[derive(Parser)]
#[command(name = "weather", version)]
#[command(about = "Summarise daily min/max temperatures from a CSV file", long_about = None)]
struct Cli {
    /// CSV file with `date,min,max` rows, temperatures in Fahrenheit
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> miette::Result<()> {
    // stdout only carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    info!(file = %cli.file.display(), "opening");

    let dataset = load_dataset(&cli.file).map_err(Error::from)?;

    print!("{}", generate_overview_summary(&dataset.days)?);
    println!();
    print!("{}", generate_daily_summary(&dataset.days)?);

    Ok(())
}
