use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mail_core::*;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

fn batch(size: usize) -> Vec<OutboundMessage> {
    (0..size)
        .map(|i| {
            OutboundMessage::new(
                "d-template",
                vec![
                    RecipientGroup::new(
                        "team",
                        [
                            format!("a-{}@example.com", i),
                            "dup@example.com".to_string(),
                            "dup@example.com".to_string(),
                        ],
                    ),
                    RecipientGroup::new("watchers", [format!("b-{}@example.com", i)]),
                ],
            )
            .attachment(Attachment::new("Y29udGVudA==".repeat(64), "report.pdf"))
        })
        .collect()
}

fn benchmark_transformation(c: &mut Criterion) {
    let sender = SenderIdentity::new("sender", "sender@example.com");
    let batch_sizes = vec![1, 10, 100];
    let mut group = c.benchmark_group("payload_transformation");

    for size in batch_sizes {
        let messages = batch(size);

        group.bench_with_input(BenchmarkId::new("from_message", size), &size, |b, &_size| {
            b.iter(|| {
                let payloads: Result<Vec<_>, _> = messages
                    .iter()
                    .map(|m| ProviderPayload::from_message(m, false, &sender))
                    .collect();
                black_box(payloads)
            })
        });

        group.bench_with_input(BenchmarkId::new("from_message_dry", size), &size, |b, &_size| {
            b.iter(|| {
                let payloads: Result<Vec<_>, _> = messages
                    .iter()
                    .map(|m| ProviderPayload::from_message(m, true, &sender))
                    .collect();
                black_box(payloads)
            })
        });
    }
    group.finish();
}

fn benchmark_redaction(c: &mut Criterion) {
    let batch_sizes = vec![1, 10, 100];
    let mut group = c.benchmark_group("log_redaction");

    for size in batch_sizes {
        let messages = batch(size);

        group.bench_with_input(BenchmarkId::new("for_logging", size), &size, |b, &_size| {
            b.iter(|| black_box(redact::for_logging(&messages)))
        });
    }
    group.finish();
}

struct NullProvider;

#[async_trait]
impl MailProvider for NullProvider {
    fn set_api_key(&mut self, _key: &str) {}

    async fn send(&self, payloads: &[ProviderPayload]) -> Result<ProviderResponse, MailError> {
        Ok(ProviderResponse {
            id: "bench".to_string(),
            provider: "null",
            raw: json!({ "queued": payloads.len() }),
        })
    }
}

struct NullLogger;

#[async_trait]
impl MailLogger for NullLogger {
    async fn log(&self, _message: &str, _details: Value) -> Result<(), MailError> {
        Ok(())
    }
}

fn benchmark_send_pipeline(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mailer = Mailer::configure(
        MailerOptions {
            key: "bench-key".to_string(),
            sender: SenderIdentity::new("sender", "sender@example.com"),
            dry: false,
        },
        NullProvider,
    )
    .unwrap();

    let batch_sizes = vec![1, 10, 100];
    let mut group = c.benchmark_group("send_pipeline");

    for size in batch_sizes {
        let messages = batch(size);

        group.bench_with_input(BenchmarkId::new("send", size), &size, |b, &_size| {
            b.to_async(&rt).iter(|| async {
                black_box(
                    mailer
                        .send("bench", messages.clone(), SendOptions::new(&NullLogger))
                        .await,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_transformation,
    benchmark_redaction,
    benchmark_send_pipeline
);
criterion_main!(benches);
