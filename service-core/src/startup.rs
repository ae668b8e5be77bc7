//! Listener lifecycle for a status service.
//!
//! [`StatusService`] is a service that has not bound its listener yet;
//! [`StatusService::listen`] consumes it and yields a running [`Application`].
//! Routes are only attached to a bound listener, so no request ever sees the
//! `Starting` state.

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::middleware::{REQUEST_ID_HEADER, request_id_middleware};
use crate::observability::{init_tracing, shutdown_tracing};
use crate::status::{self, RunState, ServiceIdentity};
use axum::{Router, middleware::from_fn};
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub struct StatusService {
    identity: ServiceIdentity,
}

impl StatusService {
    pub fn new(identity: ServiceIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    pub fn state(&self) -> RunState {
        RunState::Starting
    }

    /// Binds the listener. Failure is final: no retry and no fallback port.
    pub async fn listen(self, config: &ServiceConfig) -> Result<Application, AppError> {
        let port = u16::try_from(config.port).map_err(|_| {
            tracing::error!(port = config.port, "Refusing to bind out-of-range port");
            AppError::InvalidPort(config.port)
        })?;

        // Port 0 binds an ephemeral port. Hostnames resolve here.
        let addr = display_addr(&config.host, port);
        let listener = TcpListener::bind((config.host.as_str(), port)).await.map_err(|source| {
            tracing::error!("Failed to bind listener to {}: {}", addr, source);
            AppError::Bind { addr, source }
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            service = %self.identity.name(),
            port,
            "{} running on port {}",
            self.identity.name(),
            port
        );

        Ok(Application {
            identity: self.identity,
            port,
            listener,
        })
    }
}

fn display_addr(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// A status service whose listener is bound.
pub struct Application {
    identity: ServiceIdentity,
    port: u16,
    listener: TcpListener,
}

impl Application {
    pub async fn build(identity: ServiceIdentity, config: ServiceConfig) -> Result<Self, AppError> {
        StatusService::new(identity).listen(&config).await
    }

    /// The port actually bound, which differs from the configured one when that was 0.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    pub fn state(&self) -> RunState {
        RunState::Running
    }

    /// Serves until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.identity);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

pub fn build_router(identity: ServiceIdentity) -> Router {
    status::routes(identity)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost, so the trace span already sees the request id
        .layer(from_fn(request_id_middleware))
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

/// Entry point shared by every service binary: config, logging, bind, serve.
///
/// Any error here is a startup failure; binaries return it from `main` so the
/// process exits with status 1.
pub async fn launch(identity: ServiceIdentity) -> Result<(), AppError> {
    let config = ServiceConfig::load()?;

    init_tracing(
        identity.name(),
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    let application = StatusService::new(identity).listen(&config).await?;
    let result = application.run_until_stopped().await;

    shutdown_tracing();
    Ok(result?)
}
