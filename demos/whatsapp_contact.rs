use std::io;

use infobip::{
    ApiKey, Contact, ContactContent, ContactMessage, ContactName, ContactPhone, Context,
    InfobipClient, MessageCommon, PhoneNumber,
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
        .build()?;

    let message = ContactMessage::new(
        MessageCommon::new(
            required_env("INFOBIP_WHATSAPP_SENDER")?,
            PhoneNumber::parse(&required_env("INFOBIP_PHONE")?)?,
        ),
        ContactContent {
            contacts: vec![Contact {
                name: ContactName {
                    first_name: "John".to_owned(),
                    last_name: Some("Smith".to_owned()),
                    formatted_name: "John Smith".to_owned(),
                    ..Default::default()
                },
                phones: vec![ContactPhone {
                    phone: Some("+441134960019".to_owned()),
                    kind: Some("CELL".to_owned()),
                    wa_id: None,
                }],
                ..Default::default()
            }],
        },
    );

    let details = client
        .whatsapp()
        .send_contact(&Context::background(), &message)
        .await?;
    match details.into_result() {
        Ok(response) => println!(
            "message_id: {}, status: {}",
            response.message_id, response.status.name
        ),
        Err(error) => println!(
            "rejected: {} ({}), validation: {:?}",
            error.message_id(),
            error.text(),
            error.validation_errors()
        ),
    }

    Ok(())
}
