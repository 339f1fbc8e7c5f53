use anyhow::Context;

use ticketing_api::app::{self, services};
use ticketing_infra::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ticketing_observability::init_from_env();

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    let services = services::build_services(&config).await?;
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
