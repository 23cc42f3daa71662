use crate::domain::request::sms::NOTIFY_CONTENT_TYPES;
use crate::domain::validation::{Validate, Validator};
use crate::domain::value::Attachment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A fully featured email, uploaded as `multipart/form-data`.
///
/// Every address field accepts either `user@example.com` or `Name <user@example.com>`.
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    pub amp_html: Option<String>,
    pub template_id: Option<u64>,
    pub attachments: Vec<Attachment>,
    pub inline_images: Vec<Attachment>,
    pub intermediate_report: Option<bool>,
    pub notify_url: Option<String>,
    pub notify_content_type: Option<String>,
    pub callback_data: Option<String>,
    pub track: Option<bool>,
    pub track_clicks: Option<bool>,
    pub track_opens: Option<bool>,
    pub tracking_url: Option<String>,
    pub bulk_id: Option<String>,
    pub message_id: Option<String>,
    pub reply_to: Option<String>,
    /// ISO-8601 timestamp for scheduled delivery.
    pub send_at: Option<String>,
}

impl EmailMessage {
    pub fn new(from: impl Into<String>, to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            ..Default::default()
        }
    }
}

impl Validate for EmailMessage {
    fn validate(&self, v: &mut Validator) {
        v.required("from", &self.from)
            .email("from", self.from.as_str())
            .non_empty("to", &self.to);
        for (field, addresses) in [("to", &self.to), ("cc", &self.cc), ("bcc", &self.bcc)] {
            for (idx, address) in addresses.iter().enumerate() {
                let path = format!("{field}[{idx}]");
                v.required(&path, address).email(&path, address.as_str());
            }
        }
        v.required("subject", &self.subject)
            .any_of(
                &["text", "html", "templateId"],
                self.text.is_some() || self.html.is_some() || self.template_id.is_some(),
            )
            .each("attachments", &self.attachments)
            .each("inlineImages", &self.inline_images)
            .url("notifyUrl", self.notify_url.as_deref())
            .one_of(
                "notifyContentType",
                self.notify_content_type.as_deref(),
                NOTIFY_CONTENT_TYPES,
            )
            .url("trackingUrl", self.tracking_url.as_deref())
            .email("replyTo", self.reply_to.as_deref());
    }
}
