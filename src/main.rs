use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vacancy_aggregator::RecordStore;
use vacancy_aggregator::collectors::{build_sources, runner};
use vacancy_aggregator::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vacancy_aggregator=info")),
        )
        .init();

    let config = Config::parse();
    let criteria = config.criteria()?;
    tracing::info!(
        "Searching '{}' in '{}', {} per platform",
        criteria.keyword,
        criteria.region_name,
        criteria.page_size
    );

    let sources = build_sources(&config)?;
    let ranked = runner::aggregate(&sources, &criteria)
        .await
        .context("Vacancy search aborted")?;

    let mut store = RecordStore::new();
    for (i, record) in ranked.top_half().iter().enumerate() {
        println!("{}: {record}", i + 1);
        store.add(record);
    }

    store
        .flush(&config.output)
        .await
        .with_context(|| format!("Failed to write {}", config.output))?;
    println!("Saved {} vacancies to \"{}\"", store.len(), config.output);

    Ok(())
}
