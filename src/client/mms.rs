use crate::client::{Context, InfobipError, RequestHandler, validate};
use crate::domain::{
    DeliveryReportsOptions, DeliveryReportsResponse, MmsMessage, MmsResponse, ResponseDetails,
};
use crate::transport::encode_delivery_reports_query;

const SEND_MESSAGE_PATH: &str = "/mms/1/single";
const DELIVERY_REPORTS_PATH: &str = "/mms/1/reports";

#[derive(Debug, Clone)]
/// MMS channel client.
pub struct MmsChannel {
    handler: RequestHandler,
}

impl MmsChannel {
    /// Create an MMS client on top of a shared handler.
    pub fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }

    /// Send a single MMS as `multipart/form-data` (`POST /mms/1/single`).
    ///
    /// The message is validated first; on failure nothing is sent.
    pub async fn send_message(
        &self,
        ctx: &Context,
        message: &MmsMessage,
    ) -> Result<ResponseDetails<MmsResponse>, InfobipError> {
        validate(message)?;
        self.handler
            .post_multipart(ctx, SEND_MESSAGE_PATH, message)
            .await
    }

    /// Fetch MMS delivery reports not yet retrieved (`GET /mms/1/reports`).
    pub async fn get_delivery_reports(
        &self,
        ctx: &Context,
        options: &DeliveryReportsOptions,
    ) -> Result<ResponseDetails<DeliveryReportsResponse>, InfobipError> {
        let query = encode_delivery_reports_query(options);
        self.handler.get(ctx, DELIVERY_REPORTS_PATH, &query).await
    }
}
