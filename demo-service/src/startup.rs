use crate::handlers;
use axum::{body::Body, middleware::from_fn, routing::get, Router};
use service_core::config::Config;
use service_core::error::AppError;
use service_core::middleware::{
    make_request_span, request_id_middleware, security_headers_middleware,
};
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Route table. Unknown paths fall through to axum's default 404.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/api/info", get(handlers::info))
        .layer(from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Binds `config.host:config.port`. Port 0 picks a free port. The server
    /// drains and stops on Ctrl+C or SIGTERM.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        Self::build_with_shutdown(config, shutdown_signal()).await
    }

    /// Like [`Application::build`], but stops when `signal` resolves.
    pub async fn build_with_shutdown<F>(config: Config, signal: F) -> Result<Self, AppError>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let address = config.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}:{}", config.host, port);

        let server = axum::serve(listener, build_router()).with_graceful_shutdown(signal);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
