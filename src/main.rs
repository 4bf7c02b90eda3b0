use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use sokcho::application::services::{JobRegistry, JobService};
use sokcho::infrastructure::juso::{JusoClient, JusoRowProcessor};
use sokcho::infrastructure::observability::{init_tracing, TracingConfig};
use sokcho::presentation::config::{Environment, Settings};
use sokcho::presentation::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(TracingConfig::from_settings(&settings.logging));
    tracing::info!(%environment, "Starting address refinement service");

    let juso_client = JusoClient::new(&settings.juso)?;
    let processor = Arc::new(JusoRowProcessor::new(juso_client));
    let registry = Arc::new(JobRegistry::new());
    let job_service = Arc::new(JobService::new(
        registry,
        processor,
        Duration::from_millis(settings.juso.throttle_ms),
    ));

    let state = AppState { job_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
