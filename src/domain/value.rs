use std::fmt;

use crate::domain::validation::ValidationError;

pub use phonenumber::country::Id as Region;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Infobip API key, sent as `Authorization: App <key>`.
///
/// Invariant: non-empty after trimming. The `Debug` output never contains the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::FIELD.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("App {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A recipient number checked against libphonenumber metadata.
///
/// Held in the form Infobip payloads use: country code followed by the national
/// number, digits only. Converts into any `to`/`from` field of the request models
/// through `String::from`, and into an [`SmsDestination`](crate::SmsDestination).
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "to";

    /// Parse a number written with its `+<country code>` prefix.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Self::parse_with(input, None)
    }

    /// Parse a number, reading it as a national number of `region` when it has no prefix.
    pub fn parse_in_region(input: &str, region: Region) -> Result<Self, ValidationError> {
        Self::parse_with(input, Some(region))
    }

    fn parse_with(input: &str, region: Option<Region>) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::FIELD.to_owned(),
            });
        }
        let invalid = || ValidationError::InvalidPhoneNumber {
            field: Self::FIELD.to_owned(),
            input: input.to_owned(),
        };

        let number = phonenumber::parse(region, input).map_err(|_| invalid())?;
        if !phonenumber::is_valid(&number) {
            return Err(invalid());
        }
        let e164 = phonenumber::format(&number)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Digits only, no leading `+`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// With the leading `+`.
    pub fn e164(&self) -> String {
        format!("+{}", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// Binary file uploaded as a multipart part (MMS media, email attachments).
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

impl crate::domain::Validate for Attachment {
    fn validate(&self, v: &mut crate::domain::Validator) {
        v.required("fileName", &self.file_name)
            .required("contentType", &self.content_type)
            .media_type("contentType", self.content_type.as_str());
    }
}
