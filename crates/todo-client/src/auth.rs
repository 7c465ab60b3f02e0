//! Auth Endpoints

use reqwest::{Method, RequestBuilder};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{AuthResponse, Login, Register};

impl ApiClient {
    fn login_request(&self, credentials: &Login) -> RequestBuilder {
        self.request(Method::POST, "/auth/login").json(credentials)
    }

    fn register_request(&self, credentials: &Register) -> RequestBuilder {
        self.request(Method::POST, "/auth/register").json(credentials)
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &Login) -> ApiResult<AuthResponse> {
        Self::fetch_json(self.login_request(credentials)).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, credentials: &Register) -> ApiResult<AuthResponse> {
        Self::fetch_json(self.register_request(credentials)).await
    }
}
