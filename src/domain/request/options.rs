//! Query-parameter bags for report and log endpoints. Absent values are not sent.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for `GET .../reports` on the SMS, MMS and Email channels.
///
/// Delivery reports are consumed by the provider once returned, so repeated calls
/// only yield reports that arrived in the meantime.
pub struct DeliveryReportsOptions {
    pub bulk_id: Option<String>,
    pub message_id: Option<String>,
    pub limit: Option<u32>,
}

impl DeliveryReportsOptions {
    pub fn for_bulk(bulk_id: impl Into<String>) -> Self {
        Self {
            bulk_id: Some(bulk_id.into()),
            ..Default::default()
        }
    }

    pub fn for_message(message_id: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for `GET /sms/1/logs`.
pub struct SmsLogsOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub bulk_id: Option<String>,
    pub message_id: Option<String>,
    /// `ACCEPTED`, `PENDING`, `UNDELIVERABLE`, `DELIVERED`, `EXPIRED` or `REJECTED`.
    pub general_status: Option<String>,
    pub sent_since: Option<String>,
    pub sent_until: Option<String>,
    pub limit: Option<u32>,
    pub mcc: Option<String>,
    pub mnc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for `GET /email/1/logs`.
pub struct EmailLogsOptions {
    pub message_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub bulk_id: Option<String>,
    pub general_status: Option<String>,
    pub sent_since: Option<String>,
    pub sent_until: Option<String>,
    pub limit: Option<u32>,
}
