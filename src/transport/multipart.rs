use serde::Serialize;

use crate::domain::Attachment;

/// A `multipart/form-data` body described as plain data.
///
/// Parts keep insertion order; repeated names are allowed (e.g. several `to` fields).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub content: PartContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartContent {
    Text(String),
    /// Serialized JSON sent with `Content-Type: application/json`.
    Json(String),
    File(Attachment),
}

/// Request models sent as `multipart/form-data`.
pub trait MultipartBody {
    fn to_multipart(&self) -> Result<MultipartForm, serde_json::Error>;
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// First part named `name`.
    pub fn get(&self, name: &str) -> Option<&PartContent> {
        self.parts
            .iter()
            .find(|part| part.name == name)
            .map(|part| &part.content)
    }

    /// Every part named `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a PartContent> + 'a {
        self.parts
            .iter()
            .filter(move |part| part.name == name)
            .map(|part| &part.content)
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.to_owned(),
            content: PartContent::Text(value.into()),
        });
        self
    }

    pub fn text_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.text(name, value.to_string()),
            None => self,
        }
    }

    pub fn texts<'a>(self, name: &str, values: impl IntoIterator<Item = &'a String>) -> Self {
        values
            .into_iter()
            .fold(self, |form, value| form.text(name, value.as_str()))
    }

    pub fn json<T: Serialize + ?Sized>(
        mut self,
        name: &str,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.parts.push(FormPart {
            name: name.to_owned(),
            content: PartContent::Json(serde_json::to_string(value)?),
        });
        Ok(self)
    }

    pub fn file(mut self, name: &str, attachment: &Attachment) -> Self {
        self.parts.push(FormPart {
            name: name.to_owned(),
            content: PartContent::File(attachment.clone()),
        });
        self
    }

    pub fn files<'a>(self, name: &str, attachments: impl IntoIterator<Item = &'a Attachment>) -> Self {
        attachments
            .into_iter()
            .fold(self, |form, attachment| form.file(name, attachment))
    }

    pub(crate) fn into_reqwest(self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        use reqwest::multipart::{Form, Part};

        let mut form = Form::new();
        for FormPart { name, content } in self.parts {
            form = match content {
                PartContent::Text(value) => form.text(name, value),
                PartContent::Json(value) => {
                    form.part(name, Part::text(value).mime_str("application/json")?)
                }
                PartContent::File(attachment) => form.part(
                    name,
                    Part::bytes(attachment.data)
                        .file_name(attachment.file_name)
                        .mime_str(&attachment.content_type)?,
                ),
            };
        }
        Ok(form)
    }
}
