//! HTTP adapter implementing `RawApiPort`
//!
//! reqwest on desktop, gloo-net in the browser. Both attach
//! `Authorization: tma <initData>` when init data is present, give up after
//! `request_timeout_ms` and map any non-2xx answer to `ApiError::HttpError`.

use serde_json::Value;

use crate::infrastructure::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    config: ClientConfig,
    authorization: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(config: ClientConfig, init_data: &str) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        Self {
            config,
            authorization: authorization_header(init_data),
            #[cfg(not(target_arch = "wasm32"))]
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.url_for(path)
    }
}

/// `tma <initData>`, or nothing when init data is empty
pub fn authorization_header(init_data: &str) -> Option<String> {
    let init_data = init_data.trim();
    (!init_data.is_empty()).then(|| format!("tma {init_data}"))
}

/// Empty bodies decode as `null` so 204 answers are not parse failures.
fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::HttpError { status, body })
    }
}

// =============================================================================
// Desktop (reqwest)
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl ApiAdapter {
    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "HTTP request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(auth) = &self.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "HTTP request failed");
            ApiError::RequestFailed(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let text = check_status(status, text).inspect_err(|e| {
            tracing::warn!(%method, %url, error = %e, "HTTP error response");
        })?;
        decode_body(&text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(reqwest::Method::GET, path, None).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(reqwest::Method::POST, path, Some(body)).await
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.send(reqwest::Method::POST, path, Some(body))
            .await
            .map(|_| ())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(reqwest::Method::PUT, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(reqwest::Method::DELETE, path, None)
            .await
            .map(|_| ())
    }
}

// =============================================================================
// Browser (gloo-net)
// =============================================================================

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(target_arch = "wasm32")]
impl ApiAdapter {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        tracing::debug!(?method, %url, "HTTP request");

        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        if let Some(auth) = &self.authorization {
            builder = builder.header("Authorization", auth);
        }

        let controller = web_sys::AbortController::new()
            .map_err(|e| ApiError::RequestFailed(format!("{e:?}")))?;
        builder = builder.abort_signal(Some(&controller.signal()));
        // Dropping the guard cancels the timer, so it must outlive the body read
        let _deadline = gloo_timers::callback::Timeout::new(self.config.browser_timeout_ms(), move || {
            controller.abort()
        });

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(?method, %url, error = %e, "HTTP request failed");
            ApiError::RequestFailed(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let text = check_status(status, text).inspect_err(|e| {
            tracing::warn!(?method, %url, error = %e, "HTTP error response");
        })?;
        decode_body(&text)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, path, Some(body)).await.map(|_| ())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Delete, path, None).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_is_omitted_without_init_data() {
        assert_eq!(authorization_header(""), None);
        assert_eq!(authorization_header("   "), None);
        assert_eq!(
            authorization_header("query_id=1&hash=ff"),
            Some("tma query_id=1&hash=ff".to_string())
        );
    }

    #[test]
    fn non_success_status_is_http_error() {
        let err = check_status(404, "not found".to_string()).unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 404,
                body: "not found".to_string()
            }
        );
        assert_eq!(err.status(), Some(404));
        assert!(check_status(201, String::new()).is_ok());
    }

    #[test]
    fn empty_body_decodes_as_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(
            decode_body(r#"{"status":"deleted"}"#).unwrap()["status"],
            "deleted"
        );
        assert!(matches!(decode_body("<html>"), Err(ApiError::ParseError(_))));
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = ClientConfig::from_values(Some("http://api.local/"), None).unwrap();
        let adapter = ApiAdapter::new(config, "");
        assert_eq!(adapter.url("/encounters/my"), "http://api.local/encounters/my");
    }
}
