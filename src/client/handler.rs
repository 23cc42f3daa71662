//! Request handler: the single place that talks HTTP.
//!
//! Every channel method funnels through [`RequestHandler`], which attaches
//! authentication, dispatches the request, and classifies the response by status
//! code: 2xx bodies decode into the caller's success type, anything else into
//! [`ErrorDetails`].

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::client::{Context, InfobipError};
use crate::domain::{ApiKey, ApiResponse, ErrorDetails, ResponseDetails};
use crate::transport::{MultipartBody, MultipartForm};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub(crate) enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: Vec<(&'static str, String)>,
    pub(crate) body: RequestBody,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.client.get(request.url),
                Method::Post => self.client.post(request.url),
            };
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Json(payload) => builder.body(payload),
                RequestBody::Multipart(form) => builder.multipart(form.into_reqwest()?),
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

#[derive(Clone)]
/// Shared transport for every channel client.
///
/// Holds the base URL, the API key, and the pooled HTTP client. Cloning is cheap and
/// clones share the same connection pool.
pub struct RequestHandler {
    base_url: Url,
    api_key: ApiKey,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHandler")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl RequestHandler {
    pub(crate) fn new(base_url: Url, api_key: ApiKey, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url,
            api_key,
            http,
        }
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST `body` as JSON to `path`.
    ///
    /// Errors:
    /// - [`InfobipError::Encode`] if `body` cannot be serialized,
    /// - [`InfobipError::Transport`], [`InfobipError::Cancelled`],
    ///   [`InfobipError::DeadlineExceeded`] if no response was received,
    /// - [`InfobipError::Decode`] if the response body does not match the expected shape.
    ///
    /// A non-2xx response is not an error: it is returned as [`ApiResponse::Error`].
    pub async fn post_json<B, R>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<ResponseDetails<R>, InfobipError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(InfobipError::Encode)?;
        let mut request = self.request(Method::Post, path, &[], RequestBody::Json(payload));
        request
            .headers
            .push(("content-type", "application/json".to_owned()));
        self.dispatch(ctx, request).await
    }

    /// POST `body` as `multipart/form-data` to `path`; same contract as [`Self::post_json`].
    pub async fn post_multipart<B, R>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<ResponseDetails<R>, InfobipError>
    where
        B: MultipartBody + ?Sized,
        R: DeserializeOwned,
    {
        let form = body.to_multipart().map_err(InfobipError::Encode)?;
        let request = self.request(Method::Post, path, &[], RequestBody::Multipart(form));
        self.dispatch(ctx, request).await
    }

    /// GET `path` with `query` appended; parameters with empty values are omitted.
    pub async fn get<R>(
        &self,
        ctx: &Context,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ResponseDetails<R>, InfobipError>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::Get, path, query, RequestBody::Empty);
        self.dispatch(ctx, request).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: RequestBody,
    ) -> HttpRequest {
        HttpRequest {
            method,
            url: self.endpoint(path, query),
            headers: vec![
                ("authorization", self.api_key.authorization()),
                ("accept", "application/json".to_owned()),
            ],
            body,
        }
    }

    /// `path` is appended to the base URL's path. Any query or fragment on the base is dropped.
    fn endpoint(&self, path: &str, query: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);

        let mut present = query.iter().filter(|(_, value)| !value.is_empty()).peekable();
        if present.peek().is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in present {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    async fn dispatch<R>(
        &self,
        ctx: &Context,
        request: HttpRequest,
    ) -> Result<ResponseDetails<R>, InfobipError>
    where
        R: DeserializeOwned,
    {
        let method = request.method;
        let path = request.url.path().to_owned();
        debug!(?method, %path, "sending request");

        let response = ctx
            .run(async {
                self.http
                    .execute(request)
                    .await
                    .map_err(InfobipError::Transport)
            })
            .await?;

        debug!(status = response.status, %path, "received response");
        classify(response)
    }
}

fn classify<R: DeserializeOwned>(response: HttpResponse) -> Result<ResponseDetails<R>, InfobipError> {
    let HttpResponse {
        status,
        headers,
        body,
    } = response;

    let body = if (200..=299).contains(&status) {
        ApiResponse::Success(decode(status, &body)?)
    } else {
        let details: ErrorDetails = decode(status, &body)?;
        warn!(
            status,
            message_id = details.message_id(),
            text = details.text(),
            "API returned an error response"
        );
        ApiResponse::Error(details)
    };

    Ok(ResponseDetails {
        status,
        headers,
        body,
    })
}

fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, InfobipError> {
    serde_json::from_slice(body).map_err(|source| {
        let text = String::from_utf8_lossy(body);
        InfobipError::Decode {
            status,
            body: if text.trim().is_empty() {
                None
            } else {
                Some(text.into_owned())
            },
            source,
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde::Deserialize;
    use serde_json::json;
    use tokio_util::sync::CancellationToken;

    use crate::domain::{Attachment, MessageResponse};

    use super::Method;
    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.state.lock().unwrap().requests.clone()
        }

        pub(crate) fn last_request(&self) -> HttpRequest {
            self.requests().pop().expect("no request was sent")
        }

        pub(crate) fn handler(&self) -> RequestHandler {
            RequestHandler::new(
                Url::parse("https://example.invalid").unwrap(),
                ApiKey::new("test_key").unwrap(),
                Arc::new(self.clone()),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    headers: HeaderMap::new(),
                    body: body.into_bytes(),
                })
            })
        }
    }

    pub(crate) fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn mock_handler(server: &MockServer) -> RequestHandler {
        let client = reqwest::Client::new();
        RequestHandler::new(
            Url::parse(&server.base_url()).unwrap(),
            ApiKey::new("secret").unwrap(),
            Arc::new(ReqwestTransport { client }),
        )
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        ok: bool,
    }

    struct Upload;

    impl MultipartBody for Upload {
        fn to_multipart(&self) -> Result<MultipartForm, serde_json::Error> {
            MultipartForm::new()
                .text("from", "InfoMMS")
                .json("head", &json!({"to": "41793026727"}))
                .map(|form| form.file("media", &Attachment::new("a.txt", "text/plain", b"hi".to_vec())))
        }
    }

    #[tokio::test]
    async fn post_json_sets_auth_and_content_type() {
        let transport = FakeTransport::new(200, r#"{"ok": true}"#);
        let handler = transport.handler();

        let details: ResponseDetails<Pong> = handler
            .post_json(&Context::background(), "/ping", &json!({"a": 1}))
            .await
            .unwrap();
        assert_eq!(details.status, 200);
        assert_eq!(details.success(), Some(&Pong { ok: true }));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url.as_str(), "https://example.invalid/ping");
        assert_eq!(header(&request, "authorization"), Some("App test_key"));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        match request.body {
            RequestBody::Json(payload) => {
                let sent: serde_json::Value = serde_json::from_slice(&payload).unwrap();
                assert_eq!(sent, json!({"a": 1}));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_decodes_error_details() {
        let body = r#"{"requestError":{"serviceException":{"messageId":"TOO_MANY_REQUESTS","text":"Too many requests"}}}"#;
        let transport = FakeTransport::new(429, body);

        let details: ResponseDetails<Pong> = transport
            .handler()
            .post_json(&Context::background(), "/ping", &json!({}))
            .await
            .unwrap();
        assert_eq!(details.status, 429);
        assert!(details.success().is_none());
        assert_eq!(
            details.error().map(ErrorDetails::message_id),
            Some("TOO_MANY_REQUESTS")
        );
    }

    #[tokio::test]
    async fn undecodable_body_is_a_hard_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let err = transport
            .handler()
            .post_json::<_, Pong>(&Context::background(), "/ping", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InfobipError::Decode {
                status: 200,
                body: Some(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn empty_error_body_is_reported_as_none() {
        let transport = FakeTransport::new(503, "   ");
        let err = transport
            .handler()
            .get::<Pong>(&Context::background(), "/ping", &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InfobipError::Decode {
                status: 503,
                body: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn get_omits_empty_query_values() {
        let transport = FakeTransport::new(200, r#"{"ok": true}"#);
        let query = vec![
            ("bulkId".to_owned(), "BULK 1".to_owned()),
            ("messageId".to_owned(), String::new()),
            ("limit".to_owned(), "10".to_owned()),
        ];

        transport
            .handler()
            .get::<Pong>(&Context::background(), "/sms/1/reports", &query)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/sms/1/reports?bulkId=BULK+1&limit=10"
        );
        assert!(header(&request, "content-type").is_none());
    }

    #[tokio::test]
    async fn get_without_values_has_no_query_string() {
        let transport = FakeTransport::new(200, r#"{"ok": true}"#);
        let query = vec![("bulkId".to_owned(), String::new())];
        transport
            .handler()
            .get::<Pong>(&Context::background(), "/sms/1/reports", &query)
            .await
            .unwrap();
        assert_eq!(transport.last_request().url.query(), None);
    }

    #[test]
    fn endpoint_preserves_base_path_prefix() {
        let handler = RequestHandler::new(
            Url::parse("https://proxy.example.com/infobip/").unwrap(),
            ApiKey::new("k").unwrap(),
            Arc::new(FakeTransport::new(200, "{}")),
        );
        let url = handler.endpoint("/sms/1/logs", &[]);
        assert_eq!(url.as_str(), "https://proxy.example.com/infobip/sms/1/logs");
    }

    #[test]
    fn endpoint_ignores_base_query_and_fragment() {
        let handler = RequestHandler::new(
            Url::parse("https://proxy.example.com/infobip?tenant=1#top").unwrap(),
            ApiKey::new("k").unwrap(),
            Arc::new(FakeTransport::new(200, "{}")),
        );
        let query = vec![("limit".to_owned(), "5".to_owned())];
        let url = handler.endpoint("/sms/1/reports", &query);
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/infobip/sms/1/reports?limit=5"
        );
    }

    #[tokio::test]
    async fn cancelled_context_sends_nothing() {
        let transport = FakeTransport::new(200, r#"{"ok": true}"#);
        let token = CancellationToken::new();
        token.cancel();

        let err = transport
            .handler()
            .post_json::<_, Pong>(&Context::with_cancellation(token), "/ping", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, InfobipError::Cancelled));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let handler = FakeTransport::new(200, "{}").handler();
        let debug = format!("{handler:?}");
        assert!(debug.contains("example.invalid"));
        assert!(!debug.contains("test_key"));
    }

    #[tokio::test]
    async fn live_post_json_round_trip() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/whatsapp/1/message/text")
                    .header("authorization", "App secret")
                    .header("content-type", "application/json")
                    .json_body(json!({"from": "1", "to": "2"}));
                then.status(200).json_body(json!({
                    "to": "2",
                    "messageCount": 1,
                    "messageId": "id-1",
                    "status": {"groupId": 1, "groupName": "PENDING", "id": 7, "name": "PENDING_ENROUTE", "description": "Message sent to next instance"}
                }));
            })
            .await;

        let details: ResponseDetails<MessageResponse> = mock_handler(&server)
            .post_json(
                &Context::background(),
                "/whatsapp/1/message/text",
                &json!({"from": "1", "to": "2"}),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(details.status, 200);
        let response = details.success().unwrap();
        assert_eq!(response.message_id, "id-1");
        assert_eq!(response.status.name, "PENDING_ENROUTE");
    }

    #[tokio::test]
    async fn live_multipart_is_classified_like_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/upload")
                    .header("authorization", "App secret")
                    .header_includes("content-type", "multipart/form-data")
                    .body_includes("name=\"from\"")
                    .body_includes("InfoMMS")
                    .body_includes("name=\"head\"")
                    .body_includes("filename=\"a.txt\"");
                then.status(401).json_body(json!({
                    "requestError": {"serviceException": {"messageId": "UNAUTHORIZED", "text": "Invalid login details"}}
                }));
            })
            .await;

        let details: ResponseDetails<Pong> = mock_handler(&server)
            .post_multipart(&Context::background(), "/upload", &Upload)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(details.status, 401);
        assert_eq!(details.error().map(ErrorDetails::text), Some("Invalid login details"));
    }

    #[tokio::test]
    async fn live_get_sends_query_parameters() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/mms/1/reports")
                    .query_param("bulkId", "BULK-1")
                    .query_param("limit", "2")
                    .query_param_missing("messageId");
                then.status(200).json_body(json!({"ok": true}));
            })
            .await;

        let query = vec![
            ("bulkId".to_owned(), "BULK-1".to_owned()),
            ("messageId".to_owned(), String::new()),
            ("limit".to_owned(), "2".to_owned()),
        ];
        let details: ResponseDetails<Pong> = mock_handler(&server)
            .get(&Context::background(), "/mms/1/reports", &query)
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(details.is_success());
    }

    #[tokio::test]
    async fn live_cancellation_aborts_slow_response() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200)
                    .delay(Duration::from_secs(5))
                    .json_body(json!({"ok": true}));
            })
            .await;

        let token = CancellationToken::new();
        let ctx = Context::with_cancellation(token.clone());
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });

        let result = mock_handler(&server)
            .get::<Pong>(&ctx, "/slow", &[])
            .await;
        canceller.await.unwrap();
        assert!(matches!(result, Err(InfobipError::Cancelled)));
    }

    #[tokio::test]
    async fn live_deadline_aborts_slow_response() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200)
                    .delay(Duration::from_secs(5))
                    .json_body(json!({"ok": true}));
            })
            .await;

        let ctx = Context::background().timeout(Duration::from_millis(50));
        let result = mock_handler(&server)
            .get::<Pong>(&ctx, "/slow", &[])
            .await;
        assert!(matches!(result, Err(InfobipError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        let handler = RequestHandler::new(
            Url::parse("http://127.0.0.1:1").unwrap(),
            ApiKey::new("secret").unwrap(),
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        );
        let result = handler
            .get::<Pong>(&Context::background(), "/ping", &[])
            .await;
        assert!(matches!(result, Err(InfobipError::Transport(_))));
    }
}
