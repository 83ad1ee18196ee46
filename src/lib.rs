//! # Mail Kit
//!
//! A transactional-email adapter for Rust: it accepts application-level
//! "send this mail" requests and reshapes them into the payload schema of a
//! transactional-email provider.
//!
//! ## Features
//!
//! - **Typed normalization**: recipient groups expand into provider
//!   addressees with per-group de-duplication and stable ordering
//! - **Field validation**: descriptive errors naming the offending subject
//!   and field, fail-fast across whole batches
//! - **Dry-run safety**: real recipients are replaced with the sender and
//!   recorded in the template data, so nobody external is contacted
//! - **Redacted audit logging**: three fixed checkpoints per send, with
//!   attachment content truncated in the logged copies
//! - **Pluggable ports**: narrow [`MailProvider`](mail_core::MailProvider)
//!   and [`MailLogger`](mail_core::MailLogger) contracts so test doubles and
//!   real backends are interchangeable
//! - **Comprehensive configuration**: environment-based configuration
//!   management
//! - **Observability**: structured logging and tracing support
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     init_logging(&config.logging);
//!
//!     let mailer = config.mailer()?;
//!     let logger = TracingLogger;
//!
//!     let message = OutboundMessage::new(
//!         "d-template-id",
//!         RecipientGroup::new("Jo", ["jo@example.com"]),
//!     );
//!     let response = mailer.send("welcome", message, SendOptions::new(&logger)).await?;
//!
//!     println!("Sent with id: {}", response.id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod logging;

pub use config::*;

/// Common imports for Mail Kit usage
pub mod prelude {
    pub use crate::config::{
        AppConfig, DeliveryConfig, LoggingConfig, SendGridConfig, SenderConfig,
    };
    pub use crate::logging::{init_logging, TracingLogger};
    pub use mail_core::*;
    pub use mail_sendgrid::SendGridClient;
}
