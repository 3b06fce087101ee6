use anyhow::Context;
use storage::BackendClient;

mod config;
mod error;
mod features;
mod middleware;
mod openapi;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting athlete forms server");

    let config = Config::from_env().context("Failed to load server configuration")?;
    tracing::info!("Configuration loaded successfully");

    let backend =
        BackendClient::new(&config.backend()).context("Failed to initialize backend client")?;
    tracing::info!("Backend client configured for {}", backend.base_url());

    let app = routes::router(AppState::new(backend));

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
