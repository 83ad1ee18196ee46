//! # SendGrid Mail Provider
//!
//! SendGrid v3 backend for mailkit.
//!
//! Implements the [`MailProvider`] port over the `POST /v3/mail/send` REST
//! endpoint. The pipeline hands over the whole payload batch in one call;
//! this client dispatches one HTTP request per payload, sequentially, and
//! fails fast on the first error.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mail_core::{Mailer, MailerOptions, SenderIdentity};
//! use mail_sendgrid::SendGridClient;
//!
//! let mailer = Mailer::configure(
//!     MailerOptions {
//!         key: "SG.xxxx".into(),
//!         sender: SenderIdentity::new("Support", "support@example.com"),
//!         dry: false,
//!     },
//!     SendGridClient::default(),
//! )?;
//! ```

use async_trait::async_trait;
use mail_core::{MailError, MailProvider, ProviderPayload, ProviderResponse};
#[cfg(feature = "reqwest")]
use mail_core::fallback_id;
#[cfg(feature = "reqwest")]
use serde_json::json;
#[cfg(feature = "reqwest")]
use tracing::{debug, error, info};

const PROVIDER: &str = "sendgrid";

/// SendGrid v3 REST client.
#[derive(Clone, Debug)]
pub struct SendGridClient {
    /// Bearer API key; rebound by the pipeline at configure time.
    pub api_key: String,
    /// API base URL; override for testing/mocking.
    pub base_url: String,
    #[cfg(feature = "reqwest")]
    http: reqwest::Client,
}

impl SendGridClient {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self::with_base_url(api_key, "https://api.sendgrid.com".to_string())
    }

    pub fn with_base_url<S: Into<String>>(api_key: S, base_url: String) -> Self {
        Self {
            api_key: api_key.into(),
            base_url,
            #[cfg(feature = "reqwest")]
            http: reqwest::Client::new(),
        }
    }
}

impl Default for SendGridClient {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[async_trait]
impl MailProvider for SendGridClient {
    fn set_api_key(&mut self, key: &str) {
        self.api_key = key.to_string();
    }

    async fn send(&self, payloads: &[ProviderPayload]) -> Result<ProviderResponse, MailError> {
        #[cfg(not(feature = "reqwest"))]
        {
            let _ = payloads;
            return Err(MailError::Unexpected("reqwest feature disabled".into()));
        }
        #[cfg(feature = "reqwest")]
        {
            let url = format!("{}/v3/mail/send", self.base_url.trim_end_matches('/'));
            info!("Sending {} mail payload(s) via SendGrid", payloads.len());

            let mut results = Vec::with_capacity(payloads.len());
            for payload in payloads {
                debug!("POST {} with template {}", url, payload.template_id);
                let res = self
                    .http
                    .post(&url)
                    .bearer_auth(&self.api_key)
                    .json(payload)
                    .send()
                    .await
                    .map_err(|e| MailError::Http(e.to_string()))?;

                let status = res.status();
                if status.as_u16() == 401 || status.as_u16() == 403 {
                    error!("SendGrid rejected the API key: HTTP {}", status);
                    let body = res.text().await.unwrap_or_default();
                    return Err(MailError::Auth(format!("HTTP {}: {}", status, body)));
                }
                if !status.is_success() {
                    let body = res.text().await.unwrap_or_default();
                    error!("SendGrid send failed: HTTP {}: {}", status, body);
                    return Err(MailError::Provider(format!("HTTP {}: {}", status, body)));
                }

                let message_id = res
                    .headers()
                    .get("x-message-id")
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string());
                results.push(json!({ "status": status.as_u16(), "message_id": message_id }));
            }

            let id = results
                .first()
                .and_then(|r| r.get("message_id"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(fallback_id);

            Ok(ProviderResponse {
                id,
                provider: PROVIDER,
                raw: serde_json::Value::Array(results),
            })
        }
    }
}
