//! Caller-facing message types and recipient expansion.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MailError;

/// The fixed identity used as default `from` and default blind-copy target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderIdentity {
    pub name: String,
    pub email: String,
}

impl SenderIdentity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), MailError> {
        if self.name.is_empty() {
            return Err(MailError::missing("sender", "name"));
        }
        if self.email.is_empty() {
            return Err(MailError::missing("sender", "email"));
        }
        Ok(())
    }
}

/// A fully expanded, provider-facing recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addressee {
    pub name: String,
    pub email: String,
}

impl From<&SenderIdentity> for Addressee {
    fn from(sender: &SenderIdentity) -> Self {
        Self {
            name: sender.name.clone(),
            email: sender.email.clone(),
        }
    }
}

/// A named group of recipient emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientGroup {
    pub name: String,
    pub emails: Vec<String>,
}

impl RecipientGroup {
    pub fn new(
        name: impl Into<String>,
        emails: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            emails: emails.into_iter().map(Into::into).collect(),
        }
    }

    /// One addressee per unique email, first occurrence wins, all carrying the
    /// group's name.
    pub fn to_addresses(&self) -> Vec<Addressee> {
        let mut seen = HashSet::new();
        self.emails
            .iter()
            .filter(|email| seen.insert(email.as_str()))
            .map(|email| Addressee {
                name: self.name.clone(),
                email: email.clone(),
            })
            .collect()
    }
}

/// One recipient group or several; callers may pass either shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(RecipientGroup),
    Many(Vec<RecipientGroup>),
}

impl Recipients {
    /// Flatten into addressees: group order outer, email order inner.
    /// Duplicate emails are collapsed within a single group only.
    pub fn expand(&self) -> Vec<Addressee> {
        match self {
            Recipients::One(group) => group.to_addresses(),
            Recipients::Many(groups) => {
                groups.iter().flat_map(RecipientGroup::to_addresses).collect()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Recipients::One(group) => group.emails.is_empty(),
            Recipients::Many(groups) => groups.iter().all(|group| group.emails.is_empty()),
        }
    }
}

impl From<RecipientGroup> for Recipients {
    fn from(group: RecipientGroup) -> Self {
        Recipients::One(group)
    }
}

impl From<Vec<RecipientGroup>> for Recipients {
    fn from(groups: Vec<RecipientGroup>) -> Self {
        Recipients::Many(groups)
    }
}

/// Base64 content plus filename; any extra provider fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Attachment {
    pub fn new(content: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            extra: Map::new(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), MailError> {
        if self.content.is_empty() {
            return Err(MailError::missing("attachment", "content"));
        }
        if self.filename.is_empty() {
            return Err(MailError::missing("attachment", "filename"));
        }
        Ok(())
    }
}

/// A caller-supplied message before provider normalization.
///
/// `from` is always overwritten with the configured sender before validation,
/// so callers normally leave it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<SenderIdentity>,
    pub template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl OutboundMessage {
    pub fn new(template_id: impl Into<String>, to: impl Into<Recipients>) -> Self {
        Self {
            from: None,
            template_id: template_id.into(),
            to: Some(to.into()),
            bcc: None,
            data: None,
            attachment: None,
        }
    }

    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    /// Template variables, passed through as `dynamic_template_data`.
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    /// At most one attachment per message.
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// Non-empty `from`, `template_id`, and `to` are required once the sender
    /// has been bound. The first offending field is reported.
    pub fn validate(&self) -> Result<(), MailError> {
        match &self.from {
            Some(from) if !from.email.is_empty() => {}
            _ => return Err(MailError::missing("message", "from")),
        }
        if self.template_id.is_empty() {
            return Err(MailError::missing("message", "template_id"));
        }
        match &self.to {
            Some(to) if !to.is_empty() => Ok(()),
            _ => Err(MailError::missing("message", "to")),
        }
    }
}

/// A single message or a batch; [`Mailer::send`](crate::Mailer::send) accepts either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outbound {
    One(OutboundMessage),
    Many(Vec<OutboundMessage>),
}

impl Outbound {
    pub fn into_batch(self) -> Vec<OutboundMessage> {
        match self {
            Outbound::One(message) => vec![message],
            Outbound::Many(messages) => messages,
        }
    }
}

impl From<OutboundMessage> for Outbound {
    fn from(message: OutboundMessage) -> Self {
        Outbound::One(message)
    }
}

impl From<Vec<OutboundMessage>> for Outbound {
    fn from(messages: Vec<OutboundMessage>) -> Self {
        Outbound::Many(messages)
    }
}
