//! Status payload and the two read-only endpoints every service exposes.

use axum::{
    Json, Router,
    extract::State,
    http::{Method, Uri},
    routing::get,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::sync::Arc;

use crate::error::AppError;

pub const HEALTH_BODY: &str = "OK";

/// Fixed name of a deployed service instance, e.g. `"payments"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    name: Arc<str>,
}

impl ServiceIdentity {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Process launched, listener not yet bound.
    Starting,
    /// Listener bound and serving.
    Running,
}

/// Body of `GET /`. Built per request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    #[serde(rename = "service")]
    pub service_name: String,
    pub status: RunState,
    #[serde(rename = "time", serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl ServiceStatus {
    pub fn running(identity: &ServiceIdentity) -> Self {
        Self {
            service_name: identity.name().to_string(),
            status: RunState::Running,
            timestamp: Utc::now(),
        }
    }
}

// 2026-10-16T09:30:12.345Z
fn serialize_millis<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub async fn get_status(State(identity): State<ServiceIdentity>) -> Json<ServiceStatus> {
    Json(ServiceStatus::running(&identity))
}

/// Liveness probe.
pub async fn get_health() -> &'static str {
    HEALTH_BODY
}

/// Unknown paths and unsupported methods on known paths both answer 404.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("{} {}", method, uri.path()))
}

pub fn routes(identity: ServiceIdentity) -> Router {
    Router::new()
        .route("/", get(get_status).fallback(not_found))
        .route("/health", get(get_health).fallback(not_found))
        .fallback(not_found)
        .with_state(identity)
}
