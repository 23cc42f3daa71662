use std::io;
use std::time::Duration;

use infobip::{ApiKey, Context, InfobipClient, PhoneNumber, SmsDestination, SmsMessage, SmsRequest};
use tokio_util::sync::CancellationToken;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = required_env("INFOBIP_API_KEY")?;
    let base_url = required_env("INFOBIP_BASE_URL")?;
    let to = PhoneNumber::parse(&required_env("INFOBIP_PHONE")?)?;
    let text = std::env::var("INFOBIP_MESSAGE")
        .unwrap_or_else(|_| "Hello from the infobip demo.".to_owned());

    let client = InfobipClient::builder(ApiKey::new(api_key)?)
        .base_url(base_url)
        .build()?;

    // Ctrl-C aborts the in-flight request.
    let token = CancellationToken::new();
    let on_signal = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });
    let ctx = Context::with_cancellation(token).timeout(Duration::from_secs(30));

    let mut message = SmsMessage::new(vec![SmsDestination::from(to)], text);
    message.from = std::env::var("INFOBIP_SENDER").ok();
    let details = client
        .sms()
        .send_messages(&ctx, &SmsRequest::single(message))
        .await?;

    match details.success() {
        Some(response) => {
            for sent in &response.messages {
                println!(
                    "to: {}, message_id: {}, status: {}",
                    sent.to, sent.message_id, sent.status.name
                );
            }
        }
        None => println!("HTTP {}: {:?}", details.status, details.error()),
    }

    Ok(())
}
