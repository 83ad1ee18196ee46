//! Log-safe copies of messages and payloads.

use serde::Serialize;
use serde_json::{json, Value};

/// Serialize a batch for logging, truncating attachment content.
///
/// Works on both pre-transform messages (a single `attachment` object) and
/// transformed payloads (an `attachments` list). Entries without attachments
/// pass through unmodified; the originals are never mutated.
pub fn for_logging<T: Serialize>(items: &[T]) -> Value {
    let mut value = serde_json::to_value(items).unwrap_or_default();
    if let Value::Array(entries) = &mut value {
        for entry in entries {
            redact_entry(entry);
        }
    }
    value
}

fn redact_entry(entry: &mut Value) {
    let Some(object) = entry.as_object_mut() else {
        return;
    };

    if let Some(Value::Object(attachment)) = object.get_mut("attachment") {
        attachment.insert("content".to_string(), Value::String("Truncated".to_string()));
        return;
    }

    if let Some(attachments) = object.get_mut("attachments") {
        *attachments = json!(["Truncated"]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{Attachment, OutboundMessage, RecipientGroup, SenderIdentity};
    use crate::payload::ProviderPayload;

    #[test]
    fn message_attachment_content_is_truncated() {
        let message = OutboundMessage::new("id", RecipientGroup::new("N", ["a"]))
            .attachment(Attachment::new("secret-bytes", "report.pdf"));
        let logged = for_logging(std::slice::from_ref(&message));

        assert_eq!(logged[0]["attachment"]["content"], json!("Truncated"));
        assert_eq!(logged[0]["attachment"]["filename"], json!("report.pdf"));
        // original untouched
        assert_eq!(message.attachment.unwrap().content, "secret-bytes");
    }

    #[test]
    fn payload_attachments_list_is_replaced_wholesale() {
        let sender = SenderIdentity::new("s", "s@example.com");
        let message = OutboundMessage::new("id", RecipientGroup::new("N", ["a"]))
            .attachment(Attachment::new("c", "f"));
        let payload = ProviderPayload::from_message(&message, false, &sender).unwrap();
        let logged = for_logging(&[payload]);

        assert_eq!(logged[0]["attachments"], json!(["Truncated"]));
    }

    #[test]
    fn messages_without_attachments_pass_through() {
        let message = OutboundMessage::new("id", RecipientGroup::new("N", ["a"]));
        let logged = for_logging(std::slice::from_ref(&message));
        assert_eq!(logged[0], serde_json::to_value(&message).unwrap());
    }

    #[test]
    fn extra_attachment_fields_are_preserved() {
        let mut attachment = Attachment::new("data", "f.txt");
        attachment
            .extra
            .insert("type".to_string(), json!("text/plain"));
        let message =
            OutboundMessage::new("id", RecipientGroup::new("N", ["a"])).attachment(attachment);
        let logged = for_logging(&[message]);

        assert_eq!(logged[0]["attachment"]["type"], json!("text/plain"));
        assert_eq!(logged[0]["attachment"]["content"], json!("Truncated"));
    }
}
