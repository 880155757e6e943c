//! Batch entry point: load a topology file, run the spanning walk, and print
//! the total data-mobilization cost.

use anyhow::{Context, Result};
use cachemesh::{mobilization_report, total_mobilization_cost, TopologySpec};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "mobilize")]
#[command(about = "Compute the total data-mobilization cost for a cache mesh", long_about = None)]
struct Cli {
    /// Topology file: a `units links` header, one `a b weight` line per
    /// link, and a final source line (1-based unit numbers throughout).
    topology: PathBuf,

    /// Emit the full reach report as pretty JSON instead of the one-line
    /// total.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let spec = TopologySpec::load(&cli.topology)
        .with_context(|| format!("failed to load topology {}", cli.topology.display()))?;
    let mut mesh = spec
        .into_mesh()
        .context("topology does not describe a valid mesh")?;
    let ledger = mesh.spanning_walk().context("spanning walk failed")?;

    if cli.json {
        let report = mobilization_report(&mesh, &ledger);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Total mobilization cost = {}",
            total_mobilization_cost(&mesh, ledger.order())
        );
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cachemesh=info,mobilize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
