use std::io;
use std::time::Duration;

use infobip::{
    ApiKey, Attachment, Context, DeliveryReportsOptions, InfobipClient, MmsHead, MmsMessage,
};

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
        .timeout(Duration::from_secs(60))
        .build()?;
    let mms = client.mms();

    let mut head = MmsHead::new("InfoMMS", required_env("INFOBIP_PHONE")?);
    head.subject = Some("Infobip demo".to_owned());
    let mut message = MmsMessage::new(head);
    message.text = Some("Picture attached.".to_owned());
    if let Ok(path) = std::env::var("INFOBIP_MEDIA_PATH") {
        let data = std::fs::read(&path)?;
        message.media = Some(Attachment::new(path, "image/jpeg", data));
    }

    let ctx = Context::background();
    let details = mms.send_message(&ctx, &message).await?;
    println!("send: HTTP {} {:?}", details.status, details.body);

    let Some(bulk_id) = details.success().and_then(|r| r.bulk_id.clone()) else {
        return Ok(());
    };
    let reports = mms
        .get_delivery_reports(&ctx, &DeliveryReportsOptions::for_bulk(bulk_id))
        .await?;
    println!("reports: HTTP {} {:?}", reports.status, reports.body);

    Ok(())
}
