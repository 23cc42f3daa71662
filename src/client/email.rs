use crate::client::{Context, InfobipError, RequestHandler, validate};
use crate::domain::{
    DeliveryReportsOptions, DeliveryReportsResponse, EmailLogsOptions, EmailMessage,
    EmailResponse, LogsResponse, ResponseDetails,
};
use crate::transport::{encode_delivery_reports_query, encode_email_logs_query};

const SEND_PATH: &str = "/email/2/send";
const DELIVERY_REPORTS_PATH: &str = "/email/1/reports";
const LOGS_PATH: &str = "/email/1/logs";

#[derive(Debug, Clone)]
/// Email channel client.
pub struct EmailChannel {
    handler: RequestHandler,
}

impl EmailChannel {
    /// Create an email client on top of a shared handler.
    pub fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }

    /// Send an email with optional attachments (`POST /email/2/send`, multipart).
    pub async fn send(
        &self,
        ctx: &Context,
        message: &EmailMessage,
    ) -> Result<ResponseDetails<EmailResponse>, InfobipError> {
        validate(message)?;
        self.handler.post_multipart(ctx, SEND_PATH, message).await
    }

    /// Fetch email delivery reports not yet retrieved (`GET /email/1/reports`).
    pub async fn get_delivery_reports(
        &self,
        ctx: &Context,
        options: &DeliveryReportsOptions,
    ) -> Result<ResponseDetails<DeliveryReportsResponse>, InfobipError> {
        let query = encode_delivery_reports_query(options);
        self.handler.get(ctx, DELIVERY_REPORTS_PATH, &query).await
    }

    /// Fetch logs of sent emails (`GET /email/1/logs`).
    pub async fn get_logs(
        &self,
        ctx: &Context,
        options: &EmailLogsOptions,
    ) -> Result<ResponseDetails<LogsResponse>, InfobipError> {
        let query = encode_email_logs_query(options);
        self.handler.get(ctx, LOGS_PATH, &query).await
    }
}
