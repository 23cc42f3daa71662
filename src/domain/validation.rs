use std::fmt;

/// A single structural violation found in a request model.
///
/// `field` is the JSON path of the offending value, e.g. `content.contacts[0].name.firstName`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Empty {
        field: String,
    },
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        field: String,
        input: String,
    },
    InvalidUrl {
        field: String,
        input: String,
    },
    InvalidEmail {
        field: String,
        input: String,
    },
    InvalidMediaType {
        field: String,
        input: String,
    },
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
    NotAllowed {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },
    MissingOneOf {
        fields: &'static [&'static str],
    },
}

impl ValidationError {
    /// Path of the field this violation refers to.
    ///
    /// For [`ValidationError::MissingOneOf`] the candidate fields are joined with `|`.
    pub fn field(&self) -> String {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidPhoneNumber { field, .. }
            | Self::InvalidUrl { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::InvalidMediaType { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::NotAllowed { field, .. } => field.clone(),
            Self::MissingOneOf { fields } => fields.join("|"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { field, input } => {
                write!(f, "{field} is not a valid phone number: {input}")
            }
            Self::InvalidUrl { field, input } => write!(f, "{field} is not a valid URL: {input}"),
            Self::InvalidEmail { field, input } => {
                write!(f, "{field} is not a valid email address: {input}")
            }
            Self::InvalidMediaType { field, input } => {
                write!(f, "{field} is not a valid media type: {input}")
            }
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::NotAllowed {
                field,
                value,
                allowed,
            } => write!(
                f,
                "{field} has unsupported value {value:?} (expected one of {})",
                allowed.join(", ")
            ),
            Self::MissingOneOf { fields } => {
                write!(f, "at least one of {} must be set", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every violation found while validating one request model.
///
/// Invariant: never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if any violation refers to `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field() == field)
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Declares the structural constraints of a request model.
///
/// Implementations list their rules against the supplied [`Validator`]; they never
/// short-circuit, so a single pass reports every violation.
pub trait Validate {
    fn validate(&self, v: &mut Validator);
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self, v: &mut Validator) {
        (**self).validate(v);
    }
}

/// Collects violations for one model. Rules on absent or empty values are skipped,
/// except [`Validator::required`] and [`Validator::non_empty`].
#[derive(Debug, Default)]
pub struct Validator {
    prefix: String,
    errors: Vec<ValidationError>,
}

impl Validator {
    /// Run every rule declared by `model` and return all violations found.
    pub fn check<T: Validate + ?Sized>(model: &T) -> Result<(), ValidationErrors> {
        let mut validator = Self::default();
        model.validate(&mut validator);
        validator.finish()
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }

    fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_owned()
        } else {
            format!("{}.{field}", self.prefix)
        }
    }

    fn push(&mut self, err: ValidationError) -> &mut Self {
        self.errors.push(err);
        self
    }

    /// Validate a nested value with `field` prepended to every reported path.
    pub fn nested<T: Validate + ?Sized>(&mut self, field: &str, value: &T) -> &mut Self {
        let nested = self.path(field);
        let saved = std::mem::replace(&mut self.prefix, nested);
        value.validate(self);
        self.prefix = saved;
        self
    }

    /// Validate an optional nested value.
    pub fn nested_opt<T: Validate>(&mut self, field: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.nested(field, value);
        }
        self
    }

    /// Validate every element of a list, reporting paths as `field[idx]`.
    pub fn each<T: Validate>(&mut self, field: &str, items: &[T]) -> &mut Self {
        for (idx, item) in items.iter().enumerate() {
            self.nested(&format!("{field}[{idx}]"), item);
        }
        self
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            let field = self.path(field);
            self.push(ValidationError::Empty { field });
        }
        self
    }

    pub fn non_empty<T>(&mut self, field: &str, items: &[T]) -> &mut Self {
        if items.is_empty() {
            let field = self.path(field);
            self.push(ValidationError::Empty { field });
        }
        self
    }

    /// Upper bound on the length in characters (not bytes).
    pub fn max_chars<'a>(
        &mut self,
        field: &str,
        value: impl Into<Option<&'a str>>,
        max: usize,
    ) -> &mut Self {
        if let Some(value) = value.into() {
            let actual = value.chars().count();
            if actual > max {
                let field = self.path(field);
                self.push(ValidationError::TooLong { field, max, actual });
            }
        }
        self
    }

    /// Digits with an optional leading `+`.
    pub fn phone<'a>(&mut self, field: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        match value.into() {
            Some(value) if !value.is_empty() && !is_phone_like(value) => {
                let field = self.path(field);
                self.push(ValidationError::InvalidPhoneNumber {
                    field,
                    input: value.to_owned(),
                })
            }
            _ => self,
        }
    }

    /// Absolute `http`/`https` URL.
    pub fn url<'a>(&mut self, field: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        match value.into() {
            Some(value) if !value.is_empty() && !is_http_url(value) => {
                let field = self.path(field);
                self.push(ValidationError::InvalidUrl {
                    field,
                    input: value.to_owned(),
                })
            }
            _ => self,
        }
    }

    /// `local@domain.tld`, optionally wrapped as `Display Name <local@domain.tld>`.
    pub fn email<'a>(&mut self, field: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        match value.into() {
            Some(value) if !value.is_empty() && !is_email_like(value) => {
                let field = self.path(field);
                self.push(ValidationError::InvalidEmail {
                    field,
                    input: value.to_owned(),
                })
            }
            _ => self,
        }
    }

    /// `type/subtype` with optional parameters, e.g. `text/plain; charset=utf-8`.
    pub fn media_type<'a>(&mut self, field: &str, value: impl Into<Option<&'a str>>) -> &mut Self {
        match value.into() {
            Some(value) if !value.is_empty() && value.parse::<mime::Mime>().is_err() => {
                let field = self.path(field);
                self.push(ValidationError::InvalidMediaType {
                    field,
                    input: value.to_owned(),
                })
            }
            _ => self,
        }
    }

    pub fn range(&mut self, field: &str, value: impl Into<Option<f64>>, min: f64, max: f64) -> &mut Self {
        match value.into() {
            Some(actual) if !(min..=max).contains(&actual) => {
                let field = self.path(field);
                self.push(ValidationError::OutOfRange {
                    field,
                    min,
                    max,
                    actual,
                })
            }
            _ => self,
        }
    }

    pub fn one_of<'a>(
        &mut self,
        field: &str,
        value: impl Into<Option<&'a str>>,
        allowed: &'static [&'static str],
    ) -> &mut Self {
        match value.into() {
            Some(value) if !value.is_empty() && !allowed.contains(&value) => {
                let field = self.path(field);
                self.push(ValidationError::NotAllowed {
                    field,
                    value: value.to_owned(),
                    allowed,
                })
            }
            _ => self,
        }
    }

    /// At least one of `fields` must be present; `present` is computed by the caller.
    pub fn any_of(&mut self, fields: &'static [&'static str], present: bool) -> &mut Self {
        if !present {
            self.push(ValidationError::MissingOneOf { fields });
        }
        self
    }
}

fn is_phone_like(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

fn is_email_like(value: &str) -> bool {
    let address = match (value.rfind('<'), value.strip_suffix('>')) {
        (Some(start), Some(inner)) => &inner[start + 1..],
        _ => value,
    };
    let Some((local, domain)) = address.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !domain.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
