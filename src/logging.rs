use common::{Console, DataSet, LoadError};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub fn init() {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,csvplot=debug,tower_http=info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
}

/// Reports load outcomes through `tracing`.
pub struct TracingConsole;

impl Console for TracingConsole {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn data(&self, message: &str, data: &DataSet) {
        match serde_json::to_string(data) {
            Ok(json) => info!(rows = data.len(), "{} {}", message, json),
            Err(err) => info!(rows = data.len(), %err, "{}", message),
        }
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str, err: &LoadError) {
        error!(error = %err, "{}", message);
    }
}
