//! Send a templated mail through SendGrid in dry-run mode.
use mail_core::{Mailer, MailerOptions, OutboundMessage, RecipientGroup, SendOptions, SenderIdentity};
use mail_sendgrid::SendGridClient;
use mailkit::logging::TracingLogger;
use mailkit::LoggingConfig;

use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = arg_or_env("--key", "SENDGRID_API_KEY");
    let template_id = arg_or_env("--template", "MAIL_TEMPLATE_ID");
    let sender_name = arg_or_env("--sender-name", "MAIL_SENDER_NAME");
    let sender_email = arg_or_env("--sender-email", "MAIL_SENDER_EMAIL");
    let to = arg_or_env("--to", "MAIL_TO");

    mailkit::logging::init_logging(&LoggingConfig::default());

    let mailer = Mailer::configure(
        MailerOptions {
            key,
            sender: SenderIdentity::new(sender_name, sender_email),
            dry: true,
        },
        SendGridClient::default(),
    )?;

    let message = OutboundMessage::new(template_id, RecipientGroup::new("recipient", [to]));
    let logger = TracingLogger;
    let response = mailer.send("demo", message, SendOptions::new(&logger)).await?;

    println!(
        "Sent via {} with id {}\nRaw: {}",
        response.provider,
        response.id,
        serde_json::to_string_pretty(&response.raw)?
    );
    Ok(())
}

fn arg_or_env(flag: &str, env_key: &str) -> String {
    let args: Vec<String> = std::env::args().collect();
    if let Some(idx) = args.iter().position(|a| a == flag) {
        if idx + 1 < args.len() {
            return args[idx + 1].clone();
        }
    }
    env::var(env_key)
        .unwrap_or_else(|_| panic!("missing {} (arg {} or env {})", flag, flag, env_key))
}
