use config::{Config, ConfigError, Environment, File};
use mail_core::{MailError, Mailer, MailerOptions, SenderIdentity};
use mail_sendgrid::SendGridClient;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Default sender identity
    pub sender: SenderConfig,
    /// SendGrid configuration
    pub sendgrid: Option<SendGridConfig>,
    /// Delivery behavior
    pub delivery: DeliveryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Sender identity used as default `from` and default blind-copy target
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SenderConfig {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// SendGrid provider configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SendGridConfig {
    /// SendGrid API key
    pub key: String,
}

/// Delivery behavior
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeliveryConfig {
    /// Redirect all traffic to the sender (default: false)
    pub dry: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (default: info)
    pub level: String,
    /// Log format: json or pretty (default: json)
    pub format: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self { dry: false }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default configuration
            .add_source(Config::try_from(&AppConfig::default())?)
            // Add configuration file based on environment
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local configuration file (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MAILKIT_)
            .add_source(Environment::with_prefix("MAILKIT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build a configured mailer from the loaded settings.
    pub fn mailer(&self) -> Result<Mailer<SendGridClient>, MailError> {
        let sendgrid = self.sendgrid.as_ref().ok_or(MailError::MissingProperty {
            subject: "configure options",
            field: "key",
        })?;

        Mailer::configure(
            MailerOptions {
                key: sendgrid.key.clone(),
                sender: SenderIdentity::new(self.sender.name.clone(), self.sender.email.clone()),
                dry: self.delivery.dry,
            },
            SendGridClient::default(),
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sender: SenderConfig::default(),
            sendgrid: None,
            delivery: DeliveryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
