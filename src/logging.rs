//! Tracing bootstrap and the tracing-backed audit logger.

use async_trait::async_trait;
use mail_core::{MailError, MailLogger};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber from [`LoggingConfig`].
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.format == "json" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}

/// [`MailLogger`] that emits the three pipeline checkpoints as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[async_trait]
impl MailLogger for TracingLogger {
    async fn log(&self, message: &str, details: Value) -> Result<(), MailError> {
        info!(details = %details, "{}", message);
        Ok(())
    }
}
