mod email;
mod mms;
mod options;
mod sms;
mod whatsapp;

pub use email::EmailMessage;
pub use mms::{
    DeliveryTimeWindow, ExternallyHostedMedia, MMS_CALLBACK_DATA_MAX_CHARS, MmsHead, MmsMessage,
    TimeOfDay,
};
pub use options::{DeliveryReportsOptions, EmailLogsOptions, SmsLogsOptions};
pub use sms::{
    SMS_CALLBACK_DATA_MAX_CHARS, SMS_SENDER_MAX_CHARS, SMS_VALIDITY_PERIOD_MAX_MINUTES,
    SmsDestination, SmsLanguage, SmsMessage, SmsRequest,
};
pub use whatsapp::{
    AudioContent, AudioMessage, CALLBACK_DATA_MAX_CHARS, CAPTION_MAX_CHARS, Contact,
    ContactAddress, ContactContent, ContactEmail, ContactMessage, ContactName, ContactOrg,
    ContactPhone, ContactUrl, DocumentContent, DocumentMessage, FILENAME_MAX_CHARS, ImageContent,
    ImageMessage, LOCATION_FIELD_MAX_CHARS, LocationContent, LocationMessage, MESSAGE_ID_MAX_CHARS,
    MessageCommon, SENDER_MAX_CHARS, StickerContent, StickerMessage, TEXT_MAX_CHARS, TextContent,
    TextMessage, URL_MAX_CHARS, VideoContent, VideoMessage, WhatsAppMessage,
};
