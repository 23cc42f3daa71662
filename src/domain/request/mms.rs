use serde::Serialize;

use crate::domain::validation::{Validate, Validator};
use crate::domain::value::Attachment;

pub const MMS_CALLBACK_DATA_MAX_CHARS: usize = 200;

const WEEKDAYS: &[&str] = &[
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// An MMS message, uploaded as `multipart/form-data`.
///
/// `head` is sent as a JSON part; the remaining fields become their own parts.
pub struct MmsMessage {
    pub head: MmsHead,
    pub text: Option<String>,
    pub media: Option<Attachment>,
    pub externally_hosted_media: Vec<ExternallyHostedMedia>,
    /// SMIL presentation layout.
    pub smil: Option<String>,
}

impl MmsMessage {
    pub fn new(head: MmsHead) -> Self {
        Self {
            head,
            ..Default::default()
        }
    }
}

impl Validate for MmsMessage {
    fn validate(&self, v: &mut Validator) {
        v.nested("head", &self.head)
            .nested_opt("media", self.media.as_ref())
            .each("externallyHostedMedia", &self.externally_hosted_media);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MmsHead {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_report: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time_window: Option<DeliveryTimeWindow>,
}

impl MmsHead {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }
}

impl Validate for MmsHead {
    fn validate(&self, v: &mut Validator) {
        v.required("from", &self.from)
            .required("to", &self.to)
            .phone("to", self.to.as_str())
            .max_chars(
                "callbackData",
                self.callback_data.as_deref(),
                MMS_CALLBACK_DATA_MAX_CHARS,
            )
            .url("notifyUrl", self.notify_url.as_deref())
            .nested_opt("deliveryTimeWindow", self.delivery_time_window.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Days and hours during which delivery may be attempted.
pub struct DeliveryTimeWindow {
    /// `MONDAY` .. `SUNDAY`.
    pub days: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<TimeOfDay>,
}

impl Validate for DeliveryTimeWindow {
    fn validate(&self, v: &mut Validator) {
        v.non_empty("days", &self.days);
        for (idx, day) in self.days.iter().enumerate() {
            v.one_of(&format!("days[{idx}]"), day.as_str(), WEEKDAYS);
        }
        v.nested_opt("from", self.from.as_ref())
            .nested_opt("to", self.to.as_ref());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl Validate for TimeOfDay {
    fn validate(&self, v: &mut Validator) {
        v.range("hour", f64::from(self.hour), 0.0, 23.0)
            .range("minute", f64::from(self.minute), 0.0, 59.0);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Media the provider downloads itself instead of receiving it in the upload.
pub struct ExternallyHostedMedia {
    pub content_type: String,
    pub content_id: String,
    pub content_url: String,
}

impl Validate for ExternallyHostedMedia {
    fn validate(&self, v: &mut Validator) {
        v.required("contentType", &self.content_type)
            .media_type("contentType", self.content_type.as_str())
            .required("contentId", &self.content_id)
            .required("contentUrl", &self.content_url)
            .url("contentUrl", self.content_url.as_str());
    }
}
