//! The configure/send pipeline and its collaborator ports.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::MailError;
use crate::message::{Outbound, SenderIdentity};
use crate::payload::ProviderPayload;
use crate::redact;

/// Raw provider response, returned unchanged by [`Mailer::send`].
#[derive(Debug, Clone, Serialize)]
pub struct ProviderResponse {
    pub id: String,
    /// Name of the backend that produced the response, e.g. "sendgrid".
    pub provider: &'static str,
    /// Raw provider payload for debugging / audit.
    pub raw: Value,
}

/// Delivery port. One `send` per pipeline invocation, carrying the full batch.
#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Bind the provider API key. Called once at configure time.
    fn set_api_key(&mut self, key: &str);

    /// Deliver the whole payload batch in a single call.
    async fn send(&self, payloads: &[ProviderPayload]) -> Result<ProviderResponse, MailError>;
}

/// Audit-log port, invoked at the three fixed pipeline checkpoints.
#[async_trait]
pub trait MailLogger: Send + Sync {
    async fn log(&self, message: &str, details: Value) -> Result<(), MailError>;
}

/// Bootstrap options for [`Mailer::configure`].
#[derive(Debug, Clone)]
pub struct MailerOptions {
    /// Provider API key, bound into the client at configure time.
    pub key: String,
    /// Default `from` and default blind-copy target.
    pub sender: SenderIdentity,
    /// Default dry-run flag; OR'd with the per-call flag.
    pub dry: bool,
}

/// Per-call options for [`Mailer::send`].
pub struct SendOptions<'a> {
    pub log: &'a dyn MailLogger,
    pub dry: bool,
}

impl<'a> SendOptions<'a> {
    pub fn new(log: &'a dyn MailLogger) -> Self {
        Self { log, dry: false }
    }

    pub fn dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }
}

/// The configure/send pipeline.
///
/// Read-only after [`configure`](Mailer::configure); a single `Mailer` is safe
/// to share across concurrent sends.
#[derive(Debug)]
pub struct Mailer<P: MailProvider> {
    provider: P,
    sender: SenderIdentity,
    dry: bool,
}

impl<P: MailProvider> Mailer<P> {
    /// Validate the bootstrap options and bind the API key into the provider.
    pub fn configure(options: MailerOptions, mut provider: P) -> Result<Self, MailError> {
        if options.key.is_empty() {
            return Err(MailError::missing("configure options", "key"));
        }
        options.sender.validate()?;

        provider.set_api_key(&options.key);

        Ok(Self {
            provider,
            sender: options.sender,
            dry: options.dry,
        })
    }

    pub fn sender(&self) -> &SenderIdentity {
        &self.sender
    }

    /// Validate, normalize, and deliver one message or a batch.
    ///
    /// Logs redacted copies at three checkpoints (received, sending, sent),
    /// hands the provider the whole batch in one call, and returns its
    /// response unchanged. Any invalid message fails the whole call before
    /// the provider is touched.
    pub async fn send(
        &self,
        kind: &str,
        message: impl Into<Outbound>,
        options: SendOptions<'_>,
    ) -> Result<ProviderResponse, MailError> {
        if kind.is_empty() {
            return Err(MailError::MissingType);
        }

        let originals = message.into().into_batch();
        if originals.is_empty() {
            return Err(MailError::MissingMessage);
        }

        // Call-level false never downgrades a configuration-level true.
        let dry = self.dry || options.dry;
        let suffix = if dry { " (dry run)" } else { "" };

        options
            .log
            .log(
                &format!("Received data for {kind}."),
                json!({ "data": redact::for_logging(&originals) }),
            )
            .await?;

        let mut messages = originals;
        for message in &mut messages {
            message.from = Some(self.sender.clone());
        }
        for message in &messages {
            message.validate()?;
        }

        let payloads = messages
            .iter()
            .map(|message| ProviderPayload::from_message(message, dry, &self.sender))
            .collect::<Result<Vec<_>, _>>()?;

        options
            .log
            .log(
                &format!("Sending {kind}.{suffix}"),
                json!({ "messages": redact::for_logging(&payloads) }),
            )
            .await?;

        let response = self.provider.send(&payloads).await?;

        options
            .log
            .log(
                &format!("Sent {kind}.{suffix}"),
                json!({ "messages": redact::for_logging(&payloads), "response": &response }),
            )
            .await?;

        Ok(response)
    }
}
