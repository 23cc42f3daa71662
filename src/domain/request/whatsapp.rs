use serde::Serialize;

use crate::domain::validation::{Validate, Validator};

pub const SENDER_MAX_CHARS: usize = 24;
pub const MESSAGE_ID_MAX_CHARS: usize = 50;
pub const CALLBACK_DATA_MAX_CHARS: usize = 4000;
pub const URL_MAX_CHARS: usize = 2048;
pub const TEXT_MAX_CHARS: usize = 4096;
pub const CAPTION_MAX_CHARS: usize = 3000;
pub const FILENAME_MAX_CHARS: usize = 240;
pub const LOCATION_FIELD_MAX_CHARS: usize = 1000;

const CONTACT_KINDS: &[&str] = &["HOME", "WORK"];
const PHONE_KINDS: &[&str] = &["CELL", "MAIN", "IPHONE", "HOME", "WORK"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Envelope fields shared by every WhatsApp message.
pub struct MessageCommon {
    /// Registered WhatsApp sender number.
    pub from: String,
    /// Recipient number in international format.
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
}

impl MessageCommon {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }
}

impl Validate for MessageCommon {
    fn validate(&self, v: &mut Validator) {
        v.required("from", &self.from)
            .max_chars("from", self.from.as_str(), SENDER_MAX_CHARS)
            .phone("from", self.from.as_str())
            .required("to", &self.to)
            .max_chars("to", self.to.as_str(), SENDER_MAX_CHARS)
            .phone("to", self.to.as_str())
            .max_chars("messageId", self.message_id.as_deref(), MESSAGE_ID_MAX_CHARS)
            .max_chars(
                "callbackData",
                self.callback_data.as_deref(),
                CALLBACK_DATA_MAX_CHARS,
            )
            .url("notifyUrl", self.notify_url.as_deref())
            .max_chars("notifyUrl", self.notify_url.as_deref(), URL_MAX_CHARS);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// A WhatsApp message: the shared envelope plus type-specific `content`.
pub struct WhatsAppMessage<C> {
    #[serde(flatten)]
    pub common: MessageCommon,
    pub content: C,
}

impl<C> WhatsAppMessage<C> {
    pub fn new(common: MessageCommon, content: C) -> Self {
        Self { common, content }
    }
}

impl<C: Validate> Validate for WhatsAppMessage<C> {
    fn validate(&self, v: &mut Validator) {
        self.common.validate(v);
        v.nested("content", &self.content);
    }
}

pub type TextMessage = WhatsAppMessage<TextContent>;
pub type DocumentMessage = WhatsAppMessage<DocumentContent>;
pub type ImageMessage = WhatsAppMessage<ImageContent>;
pub type AudioMessage = WhatsAppMessage<AudioContent>;
pub type VideoMessage = WhatsAppMessage<VideoContent>;
pub type StickerMessage = WhatsAppMessage<StickerContent>;
pub type LocationMessage = WhatsAppMessage<LocationContent>;
pub type ContactMessage = WhatsAppMessage<ContactContent>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<bool>,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            preview_url: None,
        }
    }
}

impl Validate for TextContent {
    fn validate(&self, v: &mut Validator) {
        v.required("text", &self.text)
            .max_chars("text", self.text.as_str(), TEXT_MAX_CHARS);
    }
}

fn validate_media_url(v: &mut Validator, media_url: &str) {
    v.required("mediaUrl", media_url)
        .url("mediaUrl", media_url)
        .max_chars("mediaUrl", media_url, URL_MAX_CHARS);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    pub media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Validate for DocumentContent {
    fn validate(&self, v: &mut Validator) {
        validate_media_url(v, &self.media_url);
        v.max_chars("caption", self.caption.as_deref(), CAPTION_MAX_CHARS)
            .max_chars("filename", self.filename.as_deref(), FILENAME_MAX_CHARS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    pub media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Validate for ImageContent {
    fn validate(&self, v: &mut Validator) {
        validate_media_url(v, &self.media_url);
        v.max_chars("caption", self.caption.as_deref(), CAPTION_MAX_CHARS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioContent {
    pub media_url: String,
}

impl Validate for AudioContent {
    fn validate(&self, v: &mut Validator) {
        validate_media_url(v, &self.media_url);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    pub media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Validate for VideoContent {
    fn validate(&self, v: &mut Validator) {
        validate_media_url(v, &self.media_url);
        v.max_chars("caption", self.caption.as_deref(), CAPTION_MAX_CHARS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerContent {
    pub media_url: String,
}

impl Validate for StickerContent {
    fn validate(&self, v: &mut Validator) {
        validate_media_url(v, &self.media_url);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContent {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Validate for LocationContent {
    fn validate(&self, v: &mut Validator) {
        v.range("latitude", self.latitude, -90.0, 90.0)
            .range("longitude", self.longitude, -180.0, 180.0)
            .max_chars("name", self.name.as_deref(), LOCATION_FIELD_MAX_CHARS)
            .max_chars("address", self.address.as_deref(), LOCATION_FIELD_MAX_CHARS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub contacts: Vec<Contact>,
}

impl Validate for ContactContent {
    fn validate(&self, v: &mut Validator) {
        v.non_empty("contacts", &self.contacts)
            .each("contacts", &self.contacts);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<ContactAddress>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ContactEmail>,
    pub name: ContactName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<ContactOrg>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<ContactPhone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<ContactUrl>,
}

impl Validate for Contact {
    fn validate(&self, v: &mut Validator) {
        v.each("addresses", &self.addresses)
            .each("emails", &self.emails)
            .nested("name", &self.name)
            .each("phones", &self.phones)
            .each("urls", &self.urls);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactName {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    pub formatted_name: String,
}

impl Validate for ContactName {
    fn validate(&self, v: &mut Validator) {
        v.required("firstName", &self.first_name)
            .required("formattedName", &self.formatted_name);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// `HOME` or `WORK`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Validate for ContactAddress {
    fn validate(&self, v: &mut Validator) {
        v.one_of("type", self.kind.as_deref(), CONTACT_KINDS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `HOME` or `WORK`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Validate for ContactEmail {
    fn validate(&self, v: &mut Validator) {
        v.email("email", self.email.as_deref())
            .one_of("type", self.kind.as_deref(), CONTACT_KINDS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOrg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPhone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// One of `CELL`, `MAIN`, `IPHONE`, `HOME`, `WORK`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wa_id: Option<String>,
}

impl Validate for ContactPhone {
    fn validate(&self, v: &mut Validator) {
        v.one_of("type", self.kind.as_deref(), PHONE_KINDS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `HOME` or `WORK`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Validate for ContactUrl {
    fn validate(&self, v: &mut Validator) {
        v.url("url", self.url.as_deref())
            .one_of("type", self.kind.as_deref(), CONTACT_KINDS);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::ValidationError;

    fn common() -> MessageCommon {
        MessageCommon {
            from: "16175551213".to_owned(),
            to: "16175551212".to_owned(),
            message_id: Some("a28dd97c-1ffb-4fcf-99f1-0b557ed381da".to_owned()),
            callback_data: Some("some data".to_owned()),
            notify_url: Some("https://www.google.com".to_owned()),
        }
    }

    fn contact(first_name: &str, formatted_name: &str) -> Contact {
        Contact {
            name: ContactName {
                first_name: first_name.to_owned(),
                formatted_name: formatted_name.to_owned(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn contact_message_serializes_with_flattened_envelope() {
        let msg = ContactMessage::new(
            common(),
            ContactContent {
                contacts: vec![contact("John", "Mr. John Smith")],
            },
        );

        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "from": "16175551213",
                "to": "16175551212",
                "messageId": "a28dd97c-1ffb-4fcf-99f1-0b557ed381da",
                "callbackData": "some data",
                "notifyUrl": "https://www.google.com",
                "content": {
                    "contacts": [
                        {"name": {"firstName": "John", "formattedName": "Mr. John Smith"}}
                    ]
                }
            })
        );
    }

    #[test]
    fn contact_without_first_name_is_rejected() {
        let msg = ContactMessage::new(
            common(),
            ContactContent {
                contacts: vec![contact("", "Mr. John Smith")],
            },
        );

        let errors = Validator::check(&msg).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_field("content.contacts[0].name.firstName"));
    }

    #[test]
    fn contact_without_any_name_reports_both_fields() {
        let msg = ContactMessage::new(
            common(),
            ContactContent {
                contacts: vec![contact("", "")],
            },
        );

        let errors = Validator::check(&msg).unwrap_err();
        assert!(errors.contains_field("content.contacts[0].name.firstName"));
        assert!(errors.contains_field("content.contacts[0].name.formattedName"));
    }

    #[test]
    fn empty_contact_list_is_rejected() {
        let msg = ContactMessage::new(common(), ContactContent::default());
        let errors = Validator::check(&msg).unwrap_err();
        assert!(errors.contains_field("content.contacts"));
    }

    #[test]
    fn envelope_rules_are_enforced() {
        let msg = TextMessage::new(
            MessageCommon {
                from: "not a number".to_owned(),
                to: "1".repeat(SENDER_MAX_CHARS + 1),
                notify_url: Some("nope".to_owned()),
                ..Default::default()
            },
            TextContent::new("hi"),
        );

        let errors = Validator::check(&msg).unwrap_err();
        assert!(errors.contains_field("from"));
        assert!(errors.iter().any(|err| matches!(
            err,
            ValidationError::TooLong { field, max: SENDER_MAX_CHARS, .. } if field == "to"
        )));
        assert!(errors.contains_field("notifyUrl"));
    }

    #[test]
    fn text_content_limits() {
        let ok = TextMessage::new(common(), TextContent::new("hello"));
        assert!(Validator::check(&ok).is_ok());

        let empty = TextMessage::new(common(), TextContent::new("   "));
        assert!(
            Validator::check(&empty)
                .unwrap_err()
                .contains_field("content.text")
        );

        let long = TextMessage::new(common(), TextContent::new("x".repeat(TEXT_MAX_CHARS + 1)));
        assert!(
            Validator::check(&long)
                .unwrap_err()
                .contains_field("content.text")
        );
    }

    #[test]
    fn media_content_requires_valid_url() {
        let doc = DocumentMessage::new(
            common(),
            DocumentContent {
                media_url: "https://example.com/a.pdf".to_owned(),
                filename: Some("a.pdf".to_owned()),
                ..Default::default()
            },
        );
        assert!(Validator::check(&doc).is_ok());

        let image = ImageMessage::new(common(), ImageContent::default());
        assert!(
            Validator::check(&image)
                .unwrap_err()
                .contains_field("content.mediaUrl")
        );

        let sticker = StickerMessage::new(
            common(),
            StickerContent {
                media_url: "relative/path.webp".to_owned(),
            },
        );
        assert!(
            Validator::check(&sticker)
                .unwrap_err()
                .contains_field("content.mediaUrl")
        );
    }

    #[test]
    fn location_coordinates_are_range_checked() {
        let msg = LocationMessage::new(
            common(),
            LocationContent {
                latitude: 91.0,
                longitude: -181.0,
                ..Default::default()
            },
        );

        let errors = Validator::check(&msg).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_field("content.latitude"));
        assert!(errors.contains_field("content.longitude"));
    }

    #[test]
    fn contact_detail_kinds_are_checked() {
        let mut card = contact("John", "John Smith");
        card.phones.push(ContactPhone {
            phone: Some("+441134960000".to_owned()),
            kind: Some("FAX".to_owned()),
            wa_id: None,
        });
        card.emails.push(ContactEmail {
            email: Some("john@example.com".to_owned()),
            kind: Some("WORK".to_owned()),
        });

        let msg = ContactMessage::new(common(), ContactContent { contacts: vec![card] });
        let errors = Validator::check(&msg).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_field("content.contacts[0].phones[0].type"));
    }
}
