//! # Mail Core
//!
//! Core traits and types for the mailkit transactional-email adapter.
//!
//! This crate provides the building blocks for template-driven mail dispatch:
//! - [`MailProvider`] trait for delivering normalized payload batches
//! - [`MailLogger`] trait for the three-checkpoint audit log
//! - [`Mailer`] — the configure/send pipeline
//! - Common types for messages, payloads, and errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use mail_core::{Mailer, MailerOptions, OutboundMessage, RecipientGroup, SendOptions, SenderIdentity};
//!
//! // Any mail provider implements MailProvider
//! let mailer = Mailer::configure(
//!     MailerOptions {
//!         key: "api-key".into(),
//!         sender: SenderIdentity::new("Support", "support@example.com"),
//!         dry: false,
//!     },
//!     client,
//! )?;
//!
//! let message = OutboundMessage::new("d-template", RecipientGroup::new("Jo", ["jo@example.com"]));
//! let response = mailer.send("welcome", message, SendOptions::new(&logger)).await?;
//! ```

mod error;
mod message;
mod payload;
pub mod redact;
mod sender;

pub use error::MailError;
pub use message::{
    Addressee, Attachment, Outbound, OutboundMessage, RecipientGroup, Recipients, SenderIdentity,
};
pub use payload::{BccField, Personalization, ProviderPayload};
pub use sender::{MailLogger, MailProvider, Mailer, MailerOptions, ProviderResponse, SendOptions};

use uuid::Uuid;

/// Utility to create a pseudo id if a provider doesn't return one.
pub fn fallback_id() -> String {
    Uuid::new_v4().to_string()
}
