use crate::domain::EmailMessage;
use crate::transport::multipart::{MultipartBody, MultipartForm};

impl MultipartBody for EmailMessage {
    fn to_multipart(&self) -> Result<MultipartForm, serde_json::Error> {
        Ok(MultipartForm::new()
            .text("from", self.from.as_str())
            .texts("to", &self.to)
            .texts("cc", &self.cc)
            .texts("bcc", &self.bcc)
            .text("subject", self.subject.as_str())
            .text_opt("text", self.text.as_deref())
            .text_opt("html", self.html.as_deref())
            .text_opt("ampHtml", self.amp_html.as_deref())
            .text_opt("templateId", self.template_id)
            .files("attachment", &self.attachments)
            .files("inlineImage", &self.inline_images)
            .text_opt("intermediateReport", self.intermediate_report)
            .text_opt("notifyUrl", self.notify_url.as_deref())
            .text_opt("notifyContentType", self.notify_content_type.as_deref())
            .text_opt("callbackData", self.callback_data.as_deref())
            .text_opt("track", self.track)
            .text_opt("trackClicks", self.track_clicks)
            .text_opt("trackOpens", self.track_opens)
            .text_opt("trackingUrl", self.tracking_url.as_deref())
            .text_opt("bulkId", self.bulk_id.as_deref())
            .text_opt("messageId", self.message_id.as_deref())
            .text_opt("replyTo", self.reply_to.as_deref())
            .text_opt("sendAt", self.send_at.as_deref()))
    }
}
