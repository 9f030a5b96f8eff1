//! Default seed script - creates users, brands and products through the API
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```
//!
//! `SEED_BASE_URL`, `SEED_DATASET` and `SEED_STEPS` override the target,
//! the data and the steps (`signup,signin,brands,products`).

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::from_env()?;

    let dataset = match &config.dataset_path {
        Some(path) => {
            tracing::info!("Loading dataset from {}", path.display());
            Dataset::load(path)?
        }
        None => fixtures::sample_dataset(),
    };

    tracing::info!("Seeding {} ({})", config.base_url, join_steps(&config.steps));

    let seeder = Seeder::new(HttpTransport::new(), config.base_url.clone());
    let mut stdout = std::io::stdout();

    let summary = SeedPlan::new(dataset)
        .with_steps(config.steps)
        .run(&seeder, &mut stdout)
        .await?;

    // Summary output
    tracing::info!("Seed completed in {}ms", summary.elapsed_ms);
    for report in &summary.steps {
        tracing::info!(
            "  {}: {}/{} succeeded",
            report.step,
            report.succeeded,
            report.requests
        );
    }
    tracing::info!("  Known credentials: {}", summary.credentials.len());

    Ok(())
}

fn join_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(Step::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
