use nodetemp_core::summaries::SummaryBase;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod input;

use config::ReporterConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nodetemp_reporter=debug,nodetemp_db=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ReporterConfig::from_env()?;
    tracing::info!(
        node_id = %config.node_id,
        input = %config.profile_input.display(),
        "Building node thermal summary"
    );

    let profiles = input::load_profiles(&config.profile_input)?;
    let summary = input::assemble(&config.node_id, &config.host_address, profiles);

    println!("{}", serde_json::to_string_pretty(&summary.to_json())?);

    if let Some(database_url) = &config.database_url {
        let pool = nodetemp_db::create_pool(database_url).await?;
        nodetemp_db::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        let id =
            nodetemp_db::repositories::SummaryRepo::insert_with_nested(&pool, &summary).await?;
        tracing::info!(id, "Node thermal summary persisted");
    } else {
        tracing::info!("DATABASE_URL not set, skipping persistence");
    }

    Ok(())
}
