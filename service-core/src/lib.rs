//! service-core: the status/health service shared by every micros stub service.
//!
//! Each service binary only supplies its name; everything else (config,
//! logging, routing, listener lifecycle) lives here.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod startup;
pub mod status;

pub use startup::{Application, StatusService, launch};
pub use status::{RunState, ServiceIdentity, ServiceStatus};

pub use axum;
pub use tokio;
pub use tracing;
