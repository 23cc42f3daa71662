use crate::client::{Context, InfobipError, RequestHandler, validate};
use crate::domain::{
    DeliveryReportsOptions, DeliveryReportsResponse, LogsResponse, ResponseDetails,
    SmsLogsOptions, SmsRequest, SmsResponse,
};
use crate::transport::{encode_delivery_reports_query, encode_sms_logs_query};

const SEND_MESSAGES_PATH: &str = "/sms/2/text/advanced";
const DELIVERY_REPORTS_PATH: &str = "/sms/1/reports";
const LOGS_PATH: &str = "/sms/1/logs";

#[derive(Debug, Clone)]
/// SMS channel client.
pub struct SmsChannel {
    handler: RequestHandler,
}

impl SmsChannel {
    /// Create an SMS client on top of a shared handler.
    pub fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }

    /// Send one or more text messages (`POST /sms/2/text/advanced`).
    ///
    /// Errors:
    /// - [`InfobipError::Validation`] if the request breaks a structural rule; nothing is sent,
    /// - any [`RequestHandler::post_json`] error.
    pub async fn send_messages(
        &self,
        ctx: &Context,
        request: &SmsRequest,
    ) -> Result<ResponseDetails<SmsResponse>, InfobipError> {
        validate(request)?;
        self.handler.post_json(ctx, SEND_MESSAGES_PATH, request).await
    }

    /// Fetch delivery reports not yet retrieved (`GET /sms/1/reports`).
    pub async fn get_delivery_reports(
        &self,
        ctx: &Context,
        options: &DeliveryReportsOptions,
    ) -> Result<ResponseDetails<DeliveryReportsResponse>, InfobipError> {
        let query = encode_delivery_reports_query(options);
        self.handler.get(ctx, DELIVERY_REPORTS_PATH, &query).await
    }

    /// Fetch logs of sent messages (`GET /sms/1/logs`).
    pub async fn get_logs(
        &self,
        ctx: &Context,
        options: &SmsLogsOptions,
    ) -> Result<ResponseDetails<LogsResponse>, InfobipError> {
        let query = encode_sms_logs_query(options);
        self.handler.get(ctx, LOGS_PATH, &query).await
    }
}
