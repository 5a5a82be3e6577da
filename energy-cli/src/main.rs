use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use energy_cli::export;
use energy_cli::form::ProfileForm;
use energy_cli::rates_file::{self, LoadedRates};
use energy_cli::report::Report;
use energy_cli::tips::TipsReport;
use energy_core::{ConsumptionWorksheet, ProjectionTable};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Household energy consumption estimator.
///
/// Collects the household profile from the command line, computes the
/// daily energy estimate, and prints it with weekly, monthly, and yearly
/// projections and cost estimates.
#[derive(Debug, Parser)]
struct Cli {
    /// Your full name.
    #[arg(long, default_value = "")]
    name: String,

    /// Age in years.
    #[arg(long, default_value = "25")]
    age: String,

    /// City of residence.
    #[arg(long, default_value = "")]
    city: String,

    /// Area or locality within the city.
    #[arg(long, default_value = "")]
    area: String,

    /// Type of residence: Flat or Tenement.
    #[arg(long, default_value = "Flat")]
    residence: String,

    /// Number of bedrooms: 1BHK, 2BHK, or 3BHK.
    #[arg(long, default_value = "1BHK")]
    bedrooms: String,

    /// The home has an air conditioner.
    #[arg(long)]
    ac: bool,

    /// The home has a refrigerator.
    #[arg(long)]
    fridge: bool,

    /// The home has a washing machine.
    #[arg(long)]
    washing_machine: bool,

    /// TOML file overriding the rate table and unit price.
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Write the projection table to this CSV file.
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Print energy saving tips and exit.
    #[arg(long)]
    tips: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.tips {
        println!("{}", TipsReport);
        return Ok(());
    }

    let mut form = ProfileForm::new();
    form.name = cli.name;
    form.age = cli.age;
    form.city = cli.city;
    form.area = cli.area;
    form.residence_type = cli.residence;
    form.bedroom_tier = cli.bedrooms;
    form.has_air_conditioner = cli.ac;
    form.has_refrigerator = cli.fridge;
    form.has_washing_machine = cli.washing_machine;

    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(()) => {
            for message in &form.errors {
                error!("{message}");
            }
            anyhow::bail!("please fill in all required fields (name, city, area)");
        }
    };

    let loaded = match &cli.rates {
        Some(path) => {
            debug!("loading rates override from {}", path.display());
            rates_file::load_from_file(path)
                .map_err(|e| anyhow::anyhow!("cannot load rates file '{}': {e}", path.display()))?
        }
        None => LoadedRates::default(),
    };

    let worksheet = ConsumptionWorksheet::new(loaded.rates);
    let estimate = worksheet.estimate(profile).with_timestamp(Utc::now());
    let projection = ProjectionTable::new(estimate.total_kw, loaded.unit_price_per_kwh);

    info!("energy consumption calculated successfully");
    println!("{}", Report::new(&estimate, worksheet.rates(), &projection));

    if let Some(path) = &cli.export_csv {
        export::write_to_file(path, &projection)?;
        info!("projection table written to {}", path.display());
    }

    Ok(())
}
