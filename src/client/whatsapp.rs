use serde::Serialize;

use crate::client::{Context, InfobipError, RequestHandler, validate};
use crate::domain::{
    AudioMessage, ContactMessage, DocumentMessage, ImageMessage, LocationMessage,
    MessageResponse, ResponseDetails, StickerMessage, TextMessage, Validate, VideoMessage,
};

const TEXT_PATH: &str = "/whatsapp/1/message/text";
const DOCUMENT_PATH: &str = "/whatsapp/1/message/document";
const IMAGE_PATH: &str = "/whatsapp/1/message/image";
const AUDIO_PATH: &str = "/whatsapp/1/message/audio";
const VIDEO_PATH: &str = "/whatsapp/1/message/video";
const STICKER_PATH: &str = "/whatsapp/1/message/sticker";
const LOCATION_PATH: &str = "/whatsapp/1/message/location";
const CONTACT_PATH: &str = "/whatsapp/1/message/contact";

#[derive(Debug, Clone)]
/// WhatsApp channel client.
///
/// Every send method validates the message, then POSTs it as JSON.
/// Free-form messages are only delivered inside an open 24h customer session.
pub struct WhatsAppChannel {
    handler: RequestHandler,
}

impl WhatsAppChannel {
    /// Create a WhatsApp client on top of a shared handler.
    pub fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }

    /// Send a plain text message (`POST /whatsapp/1/message/text`).
    pub async fn send_text(
        &self,
        ctx: &Context,
        message: &TextMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, TEXT_PATH, message).await
    }

    /// Send a document by URL (`POST /whatsapp/1/message/document`).
    pub async fn send_document(
        &self,
        ctx: &Context,
        message: &DocumentMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, DOCUMENT_PATH, message).await
    }

    /// Send an image by URL (`POST /whatsapp/1/message/image`).
    pub async fn send_image(
        &self,
        ctx: &Context,
        message: &ImageMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, IMAGE_PATH, message).await
    }

    /// Send an audio file by URL (`POST /whatsapp/1/message/audio`).
    pub async fn send_audio(
        &self,
        ctx: &Context,
        message: &AudioMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, AUDIO_PATH, message).await
    }

    /// Send a video by URL (`POST /whatsapp/1/message/video`).
    pub async fn send_video(
        &self,
        ctx: &Context,
        message: &VideoMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, VIDEO_PATH, message).await
    }

    /// Send a sticker by URL (`POST /whatsapp/1/message/sticker`).
    pub async fn send_sticker(
        &self,
        ctx: &Context,
        message: &StickerMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, STICKER_PATH, message).await
    }

    /// Send a map location (`POST /whatsapp/1/message/location`).
    pub async fn send_location(
        &self,
        ctx: &Context,
        message: &LocationMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, LOCATION_PATH, message).await
    }

    /// Send one or more contact cards.
    pub async fn send_contact(
        &self,
        ctx: &Context,
        message: &ContactMessage,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError> {
        self.send(ctx, CONTACT_PATH, message).await
    }

    async fn send<M>(
        &self,
        ctx: &Context,
        path: &str,
        message: &M,
    ) -> Result<ResponseDetails<MessageResponse>, InfobipError>
    where
        M: Serialize + Validate,
    {
        validate(message)?;
        self.handler.post_json(ctx, path, message).await
    }
}
