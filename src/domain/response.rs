use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
/// Outcome of a call that reached the API and returned a decodable body.
///
/// Carries the raw status and headers next to exactly one of the typed success
/// model or the provider's error envelope.
pub struct ResponseDetails<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: ApiResponse<T>,
}

#[derive(Debug, Clone, PartialEq)]
/// Typed body, selected by status code: `Success` for 2xx, `Error` otherwise.
pub enum ApiResponse<T> {
    Success(T),
    Error(ErrorDetails),
}

impl<T> ResponseDetails<T> {
    /// `true` for 2xx responses.
    pub fn is_success(&self) -> bool {
        matches!(self.body, ApiResponse::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match &self.body {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorDetails> {
        match &self.body {
            ApiResponse::Success(_) => None,
            ApiResponse::Error(details) => Some(details),
        }
    }

    /// Drop the HTTP metadata and keep only the typed body.
    pub fn into_result(self) -> Result<T, ErrorDetails> {
        match self.body {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Error(details) => Err(details),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Standard error envelope returned with non-2xx statuses.
pub struct ErrorDetails {
    #[serde(default)]
    pub request_error: RequestError,
}

impl ErrorDetails {
    /// Provider error code, e.g. `BAD_REQUEST` or `UNAUTHORIZED`.
    pub fn message_id(&self) -> &str {
        &self.request_error.service_exception.message_id
    }

    pub fn text(&self) -> &str {
        &self.request_error.service_exception.text
    }

    /// Field path → messages, present for request validation failures.
    pub fn validation_errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        self.request_error.service_exception.validation_errors.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestError {
    #[serde(default)]
    pub service_exception: ServiceException,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceException {
    #[serde(default)]
    pub message_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Processing status attached to sent messages and reports.
pub struct MessageStatus {
    pub group_id: i32,
    pub group_name: String,
    pub id: i32,
    pub name: String,
    pub description: String,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageError {
    pub group_id: i32,
    pub group_name: String,
    pub id: i32,
    pub name: String,
    pub description: String,
    pub permanent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub price_per_message: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Acknowledgment of a single WhatsApp message.
pub struct MessageResponse {
    pub to: String,
    pub message_count: u32,
    pub message_id: String,
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Acknowledgment of a bulk send (SMS, MMS, Email).
pub struct BulkResponse {
    pub bulk_id: Option<String>,
    pub messages: Vec<SentMessage>,
    /// Set by the MMS endpoint when the upload was only partially accepted.
    pub error_message: Option<String>,
}

pub type SmsResponse = BulkResponse;
pub type MmsResponse = BulkResponse;
pub type EmailResponse = BulkResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentMessage {
    pub to: String,
    pub message_id: String,
    pub message_count: Option<u32>,
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeliveryReportsResponse {
    pub results: Vec<DeliveryReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryReport {
    pub bulk_id: Option<String>,
    pub message_id: String,
    pub to: String,
    pub from: Option<String>,
    pub sent_at: Option<String>,
    pub done_at: Option<String>,
    /// `smsCount`, `mmsCount` or `messageCount` depending on the channel.
    #[serde(alias = "smsCount", alias = "mmsCount")]
    pub message_count: Option<u32>,
    pub mcc_mnc: Option<String>,
    pub callback_data: Option<String>,
    pub price: Option<Price>,
    pub status: MessageStatus,
    pub error: Option<MessageError>,
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogsResponse {
    pub results: Vec<MessageLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageLog {
    pub bulk_id: Option<String>,
    pub message_id: String,
    pub to: String,
    pub from: Option<String>,
    pub text: Option<String>,
    pub sent_at: Option<String>,
    pub done_at: Option<String>,
    #[serde(alias = "smsCount")]
    pub message_count: Option<u32>,
    pub mcc_mnc: Option<String>,
    pub price: Option<Price>,
    pub status: MessageStatus,
    pub error: Option<MessageError>,
}
