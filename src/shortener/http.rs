//! HTTP implementation of the shortening endpoint

use super::api::{RequestError, ShortenApi, ShortenRequest, ShortenResponse};
use crate::util::truncate_utf8_safe;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, StatusCode};
use std::time::Duration;

/// Path of the shorten endpoint, appended to the configured base URL
const SHORTEN_PATH: &str = "/v1/shorten";

/// Error bodies kept in `RequestError::Status` are cut to this many bytes
const MAX_ERROR_BODY: usize = 512;

/// Shortening service reached over HTTP
pub struct HttpShortener {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpShortener {
    /// Create a client for `{api_url}/v1/shorten`
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let endpoint = format!("{}{}", api_url.trim_end_matches('/'), SHORTEN_PATH);

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ShortenApi for HttpShortener {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, RequestError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RequestError::Status {
                status: status.as_u16(),
                body: truncate_utf8_safe(&body, MAX_ERROR_BODY).to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| RequestError::Body(e.to_string()))
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// What the stub saw: (content-type header, JSON body)
    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    #[derive(Clone)]
    struct Stub {
        status: axum::http::StatusCode,
        reply: String,
        seen: Seen,
    }

    async fn stub_handler(
        State(stub): State<Stub>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (axum::http::StatusCode, String) {
        let content_type = headers
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        stub.seen.lock().unwrap().push((content_type, body));
        (stub.status, stub.reply.clone())
    }

    /// Start a stub shortening service, returning its base URL
    async fn spawn_stub(status: u16, reply: &str) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let stub = Stub {
            status: axum::http::StatusCode::from_u16(status).unwrap(),
            reply: reply.to_string(),
            seen: seen.clone(),
        };
        let router = Router::new()
            .route("/v1/shorten", post(stub_handler))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (format!("http://{}", addr), seen)
    }

    fn request(url: &str) -> ShortenRequest {
        ShortenRequest {
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn created_response_is_parsed() {
        let (base, seen) =
            spawn_stub(201, r#"{"message":"shortened","short_url":"http://sho.rt/aB3"}"#).await;
        let api = HttpShortener::new(&base, Duration::from_secs(5)).unwrap();

        let response = api
            .shorten(&request("https://example.com/very/long/path"))
            .await
            .unwrap();

        assert_eq!(response.message, "shortened");
        assert_eq!(response.short_url, "http://sho.rt/aB3");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("application/json"));
        assert_eq!(seen[0].1, json!({"url": "https://example.com/very/long/path"}));
    }

    #[tokio::test]
    async fn server_error_is_a_status_failure() {
        let (base, _) = spawn_stub(500, r#"{"message":"Failed to generate short URL."}"#).await;
        let api = HttpShortener::new(&base, Duration::from_secs(5)).unwrap();

        let err = api.shorten(&request("https://example.com")).await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 500, .. }), "{err:?}");
    }

    #[tokio::test]
    async fn ok_instead_of_created_is_a_failure() {
        let (base, _) = spawn_stub(200, r#"{"message":"ok","short_url":"http://x/abc"}"#).await;
        let api = HttpShortener::new(&base, Duration::from_secs(5)).unwrap();

        let err = api.shorten(&request("https://example.com")).await.unwrap_err();
        assert!(matches!(err, RequestError::Status { status: 200, .. }), "{err:?}");
    }

    #[tokio::test]
    async fn garbage_body_is_a_body_failure() {
        let (base, _) = spawn_stub(201, "<html>not json</html>").await;
        let api = HttpShortener::new(&base, Duration::from_secs(5)).unwrap();

        let err = api.shorten(&request("https://example.com")).await.unwrap_err();
        assert!(matches!(err, RequestError::Body(_)), "{err:?}");
    }

    #[tokio::test]
    async fn created_without_short_url_is_a_body_failure() {
        let (base, _) = spawn_stub(201, r#"{"message":"ok"}"#).await;
        let api = HttpShortener::new(&base, Duration::from_secs(5)).unwrap();

        let err = api.shorten(&request("https://example.com")).await.unwrap_err();
        assert!(matches!(err, RequestError::Body(_)), "{err:?}");
    }

    #[tokio::test]
    async fn slow_service_times_out_as_transport_failure() {
        let router = Router::new().route(
            "/v1/shorten",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                (axum::http::StatusCode::CREATED, r#"{"message":"ok","short_url":"http://x/a"}"#)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let api =
            HttpShortener::new(&format!("http://{}", addr), Duration::from_millis(200)).unwrap();
        let err = api.shorten(&request("https://example.com")).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpShortener::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let err = api.shorten(&request("https://example.com")).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)), "{err:?}");
    }

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let api = HttpShortener::new("http://localhost:80/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.describe(), "http://localhost:80/v1/shorten");
    }
}
