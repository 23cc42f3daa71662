use std::io;

use infobip::{ApiKey, Context, EmailLogsOptions, EmailMessage, InfobipClient};

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

    let client = InfobipClient::builder(ApiKey::new(required_env("INFOBIP_API_KEY")?)?)
        .base_url(required_env("INFOBIP_BASE_URL")?)
        .build()?;
    let email = client.email();

    let mut message = EmailMessage::new(
        required_env("INFOBIP_EMAIL_FROM")?,
        required_env("INFOBIP_EMAIL_TO")?,
        "Infobip demo",
    );
    message.text = Some("Hello from the infobip demo.".to_owned());

    let ctx = Context::background();
    let details = email.send(&ctx, &message).await?;
    println!("send: HTTP {} {:?}", details.status, details.body);

    let options = EmailLogsOptions {
        bulk_id: details.success().and_then(|r| r.bulk_id.clone()),
        limit: Some(10),
        ..Default::default()
    };
    let logs = email.get_logs(&ctx, &options).await?;
    if let Some(logs) = logs.success() {
        for log in &logs.results {
            println!("{} -> {}: {}", log.message_id, log.to, log.status.name);
        }
    }

    Ok(())
}
