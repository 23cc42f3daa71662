use serde::Serialize;

use crate::domain::validation::{Validate, Validator};
use crate::domain::value::PhoneNumber;

pub(crate) const NOTIFY_CONTENT_TYPES: &[&str] = &["application/json", "application/xml"];

/// Longest validity period Infobip accepts, in minutes (48 hours).
pub const SMS_VALIDITY_PERIOD_MAX_MINUTES: u32 = 2880;
pub const SMS_SENDER_MAX_CHARS: usize = 24;
pub const SMS_CALLBACK_DATA_MAX_CHARS: usize = 4000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request body of the advanced SMS endpoint: one or more messages sent as a bulk.
pub struct SmsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
    pub messages: Vec<SmsMessage>,
}

impl SmsRequest {
    pub fn single(message: SmsMessage) -> Self {
        Self {
            bulk_id: None,
            messages: vec![message],
        }
    }
}

impl Validate for SmsRequest {
    fn validate(&self, v: &mut Validator) {
        v.non_empty("messages", &self.messages)
            .each("messages", &self.messages);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessage {
    /// Alphanumeric or numeric sender id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub destinations: Vec<SmsDestination>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<SmsLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    /// Minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<u32>,
    /// ISO-8601 timestamp for scheduled delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_report: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl SmsMessage {
    pub fn new(destinations: Vec<SmsDestination>, text: impl Into<String>) -> Self {
        Self {
            destinations,
            text: text.into(),
            ..Default::default()
        }
    }
}

impl Validate for SmsMessage {
    fn validate(&self, v: &mut Validator) {
        v.max_chars("from", self.from.as_deref(), SMS_SENDER_MAX_CHARS)
            .non_empty("destinations", &self.destinations)
            .each("destinations", &self.destinations)
            .required("text", &self.text)
            .range(
                "validityPeriod",
                self.validity_period.map(f64::from),
                1.0,
                f64::from(SMS_VALIDITY_PERIOD_MAX_MINUTES),
            )
            .url("notifyUrl", self.notify_url.as_deref())
            .one_of(
                "notifyContentType",
                self.notify_content_type.as_deref(),
                NOTIFY_CONTENT_TYPES,
            )
            .max_chars(
                "callbackData",
                self.callback_data.as_deref(),
                SMS_CALLBACK_DATA_MAX_CHARS,
            );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsDestination {
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl SmsDestination {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message_id: None,
        }
    }
}

impl From<PhoneNumber> for SmsDestination {
    fn from(to: PhoneNumber) -> Self {
        Self::new(to)
    }
}

impl Validate for SmsDestination {
    fn validate(&self, v: &mut Validator) {
        v.required("to", &self.to).phone("to", self.to.as_str());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsLanguage {
    /// Two-letter code of the national language table (`TR`, `ES`, `PT`, ...).
    pub language_code: String,
}
