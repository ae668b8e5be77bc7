use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
/// IPv4 wildcard. Set `APP_HOST=::` for a dual-stack listener.
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved settings for one status service instance.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address or hostname to listen on; resolved when the listener binds.
    pub host: String,
    /// Requested listen port. Range is only checked when the listener binds,
    /// so an out-of-range value surfaces as a startup failure.
    pub port: i64,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

/// Settings exactly as they arrive from the file/environment layers.
///
/// Only `PORT` is read unprefixed. Everything else lives under `APP_` so that
/// unrelated inherited variables (a shell's `HOST`, say) are never picked up.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    port: Option<String>,
    #[serde(rename = "app_host")]
    host: Option<String>,
    #[serde(rename = "app_log_level")]
    log_level: Option<String>,
    #[serde(rename = "app_otlp_endpoint")]
    otlp_endpoint: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: i64::from(DEFAULT_PORT),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }
}

impl ServiceConfig {
    /// Loads `.env`, an optional `configuration` file and the process environment.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    pub fn from_environment(env: Environment) -> Result<Self, AppError> {
        let raw: RawSettings = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;

        Ok(raw.resolve())
    }
}

impl RawSettings {
    fn resolve(self) -> ServiceConfig {
        ServiceConfig {
            host: non_empty(self.host.as_deref())
                .unwrap_or(DEFAULT_HOST)
                .to_string(),
            port: resolve_port(self.port.as_deref()),
            log_level: non_empty(self.log_level.as_deref())
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
            otlp_endpoint: non_empty(self.otlp_endpoint.as_deref()).map(str::to_string),
        }
    }
}

/// Port policy: unset, empty or non-numeric values fall back to [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> i64 {
    non_empty(raw)
        .and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(i64::from(DEFAULT_PORT))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
