//! Server Implementation
//!
//! Router assembly, HTTP middleware stack and server lifecycle.

use std::time::Instant;

use axum::{Router, extract::Request, http::HeaderValue, middleware, response::Response};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{Config, ServerState};
use crate::utils::{AppError, AppResult};

/// Request id generator for the `x-request-id` header
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Request log middleware
///
/// Logs method, uri, status and latency for every request. The request id
/// is set by [`SetRequestIdLayer`] before this middleware runs.
async fn log_request(req: Request, next: middleware::Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    if status.is_server_error() || status.is_client_error() {
        warn!(
            target: "http_access",
            request_id = %request_id,
            latency_ms = %latency.as_millis(),
            "{} {} {}", method, uri, status
        );
    } else {
        info!(
            target: "http_access",
            request_id = %request_id,
            latency_ms = %latency.as_millis(),
            "{} {} {}", method, uri, status
        );
    }

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::employees::router())
        .merge(crate::api::departments::router())
        .merge(crate::api::benefits::router())
        .merge(crate::api::employee_benefits::router())
        .merge(crate::api::payroll::router())
}

/// Build the full application with state and the middleware stack applied
///
/// Also used directly by integration tests, which drive the returned router
/// with `tower::Service::call` instead of binding a socket.
pub fn app(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create a server with an already initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Bind the listener and serve until ctrl-c
    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!("HR server listening on {}", addr);

        axum::serve(listener, app(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down...");
}
