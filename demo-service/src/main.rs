use demo_service::startup::Application;
use demo_service::SERVICE_NAME;
use service_core::config::Config;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let _tracing_guard = init_tracing(
        SERVICE_NAME,
        config.effective_log_level(),
        config.otlp_endpoint.as_deref(),
    )?;

    tracing::info!(
        debug = config.debug,
        "Starting {} v{}",
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
