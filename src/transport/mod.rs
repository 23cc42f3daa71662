//! Transport layer: wire-format details (multipart bodies, query strings).

mod email;
mod mms;
mod multipart;
mod query;

pub use multipart::{FormPart, MultipartBody, MultipartForm, PartContent};
pub use query::{encode_delivery_reports_query, encode_email_logs_query, encode_sms_logs_query};
