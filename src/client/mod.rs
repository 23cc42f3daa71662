//! Client layer: configuration, the shared request handler, and per-channel clients.

mod context;
mod email;
mod handler;
mod mms;
mod sms;
mod whatsapp;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::domain::{ApiKey, Validate, ValidationErrors, Validator};

pub use context::Context;
pub use email::EmailChannel;
pub use handler::RequestHandler;
pub use mms::MmsChannel;
pub use sms::SmsChannel;
pub use whatsapp::WhatsAppChannel;

const DEFAULT_BASE_URL: &str = "https://api.infobip.com";
const DEFAULT_USER_AGENT: &str = concat!("infobip-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
/// Errors returned by channel clients and the [`RequestHandler`].
///
/// A non-2xx API response is *not* an error: it is returned inside
/// [`ResponseDetails`](crate::ResponseDetails) as [`ApiResponse::Error`](crate::ApiResponse::Error).
/// This type covers:
/// - local validation failures (no request was sent),
/// - transport failures, cancellation, and deadline expiry (no response was received),
/// - encode/decode failures.
pub enum InfobipError {
    /// The request model violates one or more structural rules.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// HTTP client / transport failure (DNS, TLS, connection refused, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be parsed as the expected success or error shape.
    #[error("decode error (HTTP {status}): {source}")]
    Decode {
        status: u16,
        body: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    /// The caller's cancellation token fired before a response arrived.
    #[error("request cancelled")]
    Cancelled,

    /// The caller's deadline passed before a response arrived.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The configured base URL is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl InfobipError {
    /// The local violations, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Run a model's declared rules before anything touches the network.
pub(crate) fn validate<T: Validate + ?Sized>(model: &T) -> Result<(), InfobipError> {
    Validator::check(model).map_err(|errors| {
        debug!(violations = errors.len(), %errors, "request model failed validation");
        InfobipError::Validation(errors)
    })
}

#[derive(Debug, Clone)]
/// Builder for [`InfobipClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct InfobipClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl InfobipClientBuilder {
    /// Create a builder with the default base URL and no timeout override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL, usually your personal `https://xxxxx.api.infobip.com`.
    ///
    /// A path prefix is kept: endpoint paths are appended to it. A query string or
    /// fragment on the base URL is not sent.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`InfobipClient`].
    pub fn build(self) -> Result<InfobipClient, InfobipError> {
        let base_url = Url::parse(self.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(InfobipError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| InfobipError::Transport(Box::new(err)))?;

        Ok(InfobipClient {
            handler: RequestHandler::new(
                base_url,
                self.api_key,
                Arc::new(handler::ReqwestTransport { client }),
            ),
        })
    }
}

#[derive(Debug, Clone)]
/// High-level Infobip client.
///
/// Holds the shared configuration and hands out channel clients that reuse one
/// connection pool. Cloning is cheap.
///
/// ```rust,no_run
/// use infobip::{ApiKey, Context, InfobipClient, MessageCommon, TextContent, TextMessage};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = InfobipClient::builder(ApiKey::new("...")?)
///     .base_url("https://xxxxx.api.infobip.com")
///     .build()?;
/// let msg = TextMessage::new(
///     MessageCommon::new("441134960000", "441134960001"),
///     TextContent::new("hello"),
/// );
/// let details = client.whatsapp().send_text(&Context::background(), &msg).await?;
/// match details.success() {
///     Some(resp) => println!("queued: {}", resp.message_id),
///     None => println!("rejected with HTTP {}: {:?}", details.status, details.error()),
/// }
/// # Ok(())
/// # }
/// ```
pub struct InfobipClient {
    handler: RequestHandler,
}

impl InfobipClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`InfobipClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, InfobipError> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> InfobipClientBuilder {
        InfobipClientBuilder::new(api_key)
    }

    /// The shared handler, for endpoints without a typed channel method.
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// SMS channel client.
    pub fn sms(&self) -> SmsChannel {
        SmsChannel::new(self.handler.clone())
    }

    /// MMS channel client.
    pub fn mms(&self) -> MmsChannel {
        MmsChannel::new(self.handler.clone())
    }

    /// WhatsApp channel client.
    pub fn whatsapp(&self) -> WhatsAppChannel {
        WhatsAppChannel::new(self.handler.clone())
    }

    /// Email channel client.
    pub fn email(&self) -> EmailChannel {
        EmailChannel::new(self.handler.clone())
    }
}
