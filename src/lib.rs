//! Typed Rust client for the Infobip messaging API (SMS, MMS, WhatsApp, Email).
//!
//! The crate is split into a domain layer of request/response models with
//! declarative validation, a transport layer for wire-format details
//! (multipart bodies, query strings), and a small client layer that owns HTTP.
//!
//! Every call returns [`ResponseDetails`]: the HTTP status, the response headers,
//! and either the decoded success body or the provider's [`ErrorDetails`].
//! Local validation failures, transport failures, and cancellation surface as
//! [`InfobipError`].
//!
//! ```rust,no_run
//! use infobip::{ApiKey, Context, InfobipClient, SmsDestination, SmsMessage, SmsRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = InfobipClient::builder(ApiKey::new("...")?)
//!         .base_url("https://xxxxx.api.infobip.com")
//!         .build()?;
//!     let message = SmsMessage::new(vec![SmsDestination::new("41793026727")], "hello");
//!     let details = client
//!         .sms()
//!         .send_messages(&Context::background(), &SmsRequest::single(message))
//!         .await?;
//!     println!("HTTP {}: {:?}", details.status, details.body);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Context, EmailChannel, InfobipClient, InfobipClientBuilder, InfobipError, MmsChannel,
    RequestHandler, SmsChannel, WhatsAppChannel,
};
pub use domain::*;
pub use transport::{FormPart, MultipartBody, MultipartForm, PartContent};
