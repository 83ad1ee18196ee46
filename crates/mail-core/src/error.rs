/// Errors that can occur during configuration, validation, or delivery.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A required property is absent or empty on the named subject.
    #[error("{subject} is missing required property `{field}`")]
    MissingProperty {
        subject: &'static str,
        field: &'static str,
    },
    /// `send` was called without a message type.
    #[error("no message type is present")]
    MissingType,
    /// `send` was called without any message.
    #[error("no message is present")]
    MissingMessage,
    /// HTTP communication error
    #[error("http error: {0}")]
    Http(String),
    /// Authentication/authorization error
    #[error("authentication error: {0}")]
    Auth(String),
    /// Mail provider returned an error
    #[error("provider error: {0}")]
    Provider(String),
    /// The injected audit logger failed
    #[error("logger error: {0}")]
    Logger(String),
    /// Unexpected error occurred
    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl MailError {
    /// Shorthand for the validation variant.
    pub fn missing(subject: &'static str, field: &'static str) -> Self {
        MailError::MissingProperty { subject, field }
    }
}
