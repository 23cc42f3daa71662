use crate::domain::MmsMessage;
use crate::transport::multipart::{MultipartBody, MultipartForm};

impl MultipartBody for MmsMessage {
    fn to_multipart(&self) -> Result<MultipartForm, serde_json::Error> {
        let mut form = MultipartForm::new()
            .json("head", &self.head)?
            .text_opt("text", self.text.as_deref());
        if let Some(media) = self.media.as_ref() {
            form = form.file("media", media);
        }
        if !self.externally_hosted_media.is_empty() {
            form = form.json("externallyHostedMedia", &self.externally_hosted_media)?;
        }
        Ok(form.text_opt("smil", self.smil.as_deref()))
    }
}
