//! HTTP Client
//!
//! Base URL, bearer token and JSON request helpers shared by every endpoint.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Join a base URL and an endpoint path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    /// Empty tokens are treated as "signed out".
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Request with the JSON content type, bearer token and (in the browser) credentials
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        // Lets the browser attach the session cookie on cross-origin calls
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        builder
    }

    async fn send(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::debug!("request failed with {}: {}", status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Send and decode the JSON response body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = Self::send(builder).await?;
        Ok(response.json().await?)
    }

    /// Send and ignore the response body; callers refetch
    pub(crate) async fn fetch_empty(builder: RequestBuilder) -> ApiResult<()> {
        Self::send(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:80/", "/todo"), "http://localhost:80/todo");
        assert_eq!(join_url("http://localhost:80", "todo"), "http://localhost:80/todo");
        assert_eq!(join_url("http://localhost:80//", "//status/3"), "http://localhost:80/status/3");
    }

    #[test]
    fn test_empty_token_is_signed_out() {
        let client = ApiClient::new("http://localhost:80/").with_token(Some(String::new()));
        assert_eq!(client.token(), None);

        let client = client.with_token(Some("abc".to_string()));
        assert_eq!(client.token(), Some("abc"));
        assert_eq!(client.url("/category/2"), "http://localhost:80/category/2");
    }

    #[test]
    fn test_signed_in_request_carries_bearer() {
        let client = ApiClient::new("http://localhost/").with_token(Some("abc.def".to_string()));
        let request = client.request(Method::GET, "/todo").build().unwrap();

        assert_eq!(request.url().as_str(), "http://localhost/todo");
        assert_eq!(request.headers()[AUTHORIZATION].to_str().unwrap(), "Bearer abc.def");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_signed_out_request_has_no_bearer() {
        let client = ApiClient::new("http://localhost/");
        let request = client.request(Method::DELETE, "/todo/1").build().unwrap();

        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(request.url().as_str(), "http://localhost/todo/1");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
