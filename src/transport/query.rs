use crate::domain::{DeliveryReportsOptions, EmailLogsOptions, SmsLogsOptions};

fn push_param<T: ToString>(params: &mut Vec<(String, String)>, key: &str, value: Option<&T>) {
    if let Some(value) = value {
        params.push((key.to_owned(), value.to_string()));
    }
}

pub fn encode_delivery_reports_query(options: &DeliveryReportsOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_param(&mut params, "bulkId", options.bulk_id.as_ref());
    push_param(&mut params, "messageId", options.message_id.as_ref());
    push_param(&mut params, "limit", options.limit.as_ref());
    params
}

pub fn encode_sms_logs_query(options: &SmsLogsOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_param(&mut params, "from", options.from.as_ref());
    push_param(&mut params, "to", options.to.as_ref());
    push_param(&mut params, "bulkId", options.bulk_id.as_ref());
    push_param(&mut params, "messageId", options.message_id.as_ref());
    push_param(&mut params, "generalStatus", options.general_status.as_ref());
    push_param(&mut params, "sentSince", options.sent_since.as_ref());
    push_param(&mut params, "sentUntil", options.sent_until.as_ref());
    push_param(&mut params, "limit", options.limit.as_ref());
    push_param(&mut params, "mcc", options.mcc.as_ref());
    push_param(&mut params, "mnc", options.mnc.as_ref());
    params
}

pub fn encode_email_logs_query(options: &EmailLogsOptions) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_param(&mut params, "messageId", options.message_id.as_ref());
    push_param(&mut params, "from", options.from.as_ref());
    push_param(&mut params, "to", options.to.as_ref());
    push_param(&mut params, "bulkId", options.bulk_id.as_ref());
    push_param(&mut params, "generalStatus", options.general_status.as_ref());
    push_param(&mut params, "sentSince", options.sent_since.as_ref());
    push_param(&mut params, "sentUntil", options.sent_until.as_ref());
    push_param(&mut params, "limit", options.limit.as_ref());
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn delivery_reports_skip_absent_values() {
        let options = DeliveryReportsOptions {
            bulk_id: Some("BULK-1".to_owned()),
            message_id: None,
            limit: Some(10),
        };
        assert_eq!(
            encode_delivery_reports_query(&options),
            vec![pair("bulkId", "BULK-1"), pair("limit", "10")]
        );
        assert!(encode_delivery_reports_query(&DeliveryReportsOptions::default()).is_empty());
    }

    #[test]
    fn sms_logs_keep_values_verbatim() {
        let options = SmsLogsOptions {
            from: Some("InfoSMS".to_owned()),
            general_status: Some("DELIVERED".to_owned()),
            sent_since: Some("2015-02-22T17:42:05.390+0100".to_owned()),
            mcc: Some("219".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            encode_sms_logs_query(&options),
            vec![
                pair("from", "InfoSMS"),
                pair("generalStatus", "DELIVERED"),
                pair("sentSince", "2015-02-22T17:42:05.390+0100"),
                pair("mcc", "219"),
            ]
        );
    }

    #[test]
    fn email_logs_order() {
        let options = EmailLogsOptions {
            to: Some("john@example.com".to_owned()),
            message_id: Some("MSG-1".to_owned()),
            limit: Some(5),
            ..Default::default()
        };
        assert_eq!(
            encode_email_logs_query(&options),
            vec![
                pair("messageId", "MSG-1"),
                pair("to", "john@example.com"),
                pair("limit", "5"),
            ]
        );
    }
}
