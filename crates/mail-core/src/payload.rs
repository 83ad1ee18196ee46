//! Provider wire schema and the message-to-payload transformation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MailError;
use crate::message::{Addressee, Attachment, OutboundMessage, SenderIdentity};

/// The provider's per-recipient-context block: recipients, blind-copy list,
/// and template variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<Addressee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<BccField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_template_data: Option<Map<String, Value>>,
}

/// Blind-copy field: an expanded list when the caller supplied one, the bare
/// sender identity when defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BccField {
    Addresses(Vec<Addressee>),
    Sender(SenderIdentity),
}

/// Outbound wire shape for one message. Exactly one personalization per
/// payload; template contexts are never batched together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPayload {
    pub from: SenderIdentity,
    pub template_id: String,
    pub personalizations: Vec<Personalization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl ProviderPayload {
    /// Normalize one message into the provider schema.
    ///
    /// On dry runs the real recipients are recorded in
    /// `dynamic_template_data.originally_to` (and `originally_bcc` when a bcc
    /// was supplied), the `bcc` key is dropped, and the payload is addressed
    /// to the sender alone.
    pub fn from_message(
        message: &OutboundMessage,
        dry: bool,
        sender: &SenderIdentity,
    ) -> Result<Self, MailError> {
        let to = message
            .to
            .as_ref()
            .ok_or(MailError::missing("message", "to"))?
            .expand();

        let mut personalization = Personalization {
            to,
            bcc: None,
            dynamic_template_data: None,
        };

        let attachments = match &message.attachment {
            Some(attachment) => {
                attachment.validate()?;
                Some(vec![attachment.clone()])
            }
            None => None,
        };

        if let Some(bcc) = &message.bcc {
            personalization.bcc = Some(BccField::Addresses(bcc.expand()));
        } else if !dry {
            // The sender always receives a copy of real sends unless a bcc
            // was explicitly supplied.
            personalization.bcc = Some(BccField::Sender(sender.clone()));
        }

        if let Some(data) = &message.data {
            personalization.dynamic_template_data = Some(data.clone());
        }

        if dry {
            let mut data = personalization.dynamic_template_data.take().unwrap_or_default();
            data.insert("debugging".to_string(), Value::Bool(true));
            data.insert(
                "originally_to".to_string(),
                serde_json::to_value(&personalization.to).unwrap_or_default(),
            );
            if let Some(BccField::Addresses(bcc)) = personalization.bcc.take() {
                data.insert(
                    "originally_bcc".to_string(),
                    serde_json::to_value(&bcc).unwrap_or_default(),
                );
            }
            personalization.to = vec![Addressee::from(sender)];
            personalization.dynamic_template_data = Some(data);
        }

        Ok(Self {
            from: sender.clone(),
            template_id: message.template_id.clone(),
            personalizations: vec![personalization],
            attachments,
        })
    }
}
