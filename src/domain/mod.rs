//! Domain layer: request/response models and their structural rules (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AudioContent, AudioMessage, CALLBACK_DATA_MAX_CHARS, CAPTION_MAX_CHARS, Contact,
    ContactAddress, ContactContent, ContactEmail, ContactMessage, ContactName, ContactOrg,
    ContactPhone, ContactUrl, DeliveryReportsOptions, DeliveryTimeWindow, DocumentContent,
    DocumentMessage, EmailLogsOptions, EmailMessage, ExternallyHostedMedia, FILENAME_MAX_CHARS,
    ImageContent, ImageMessage, LOCATION_FIELD_MAX_CHARS, LocationContent, LocationMessage,
    MESSAGE_ID_MAX_CHARS, MMS_CALLBACK_DATA_MAX_CHARS, MessageCommon, MmsHead, MmsMessage,
    SENDER_MAX_CHARS, SMS_CALLBACK_DATA_MAX_CHARS, SMS_SENDER_MAX_CHARS,
    SMS_VALIDITY_PERIOD_MAX_MINUTES, SmsDestination, SmsLanguage, SmsLogsOptions, SmsMessage,
    SmsRequest, StickerContent, StickerMessage, TEXT_MAX_CHARS, TextContent, TextMessage,
    TimeOfDay, URL_MAX_CHARS, VideoContent, VideoMessage, WhatsAppMessage,
};
pub use response::{
    ApiResponse, BulkResponse, DeliveryReport, DeliveryReportsResponse, EmailResponse,
    ErrorDetails, LogsResponse, MessageError, MessageLog, MessageResponse, MessageStatus,
    MmsResponse, Price, RequestError, ResponseDetails, SentMessage, ServiceException, SmsResponse,
};
pub use validation::{Validate, ValidationError, ValidationErrors, Validator};
pub use value::{ApiKey, Attachment, PhoneNumber, Region};
