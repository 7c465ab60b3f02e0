//! Status Endpoints
//!
//! Statuses are always listed per category.

use reqwest::{Method, RequestBuilder};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Status, StatusPayload, StatusQuery};

impl ApiClient {
    fn list_statuses_request(&self, category_id: u32) -> RequestBuilder {
        self.request(Method::GET, "/status")
            .query(&StatusQuery { category_id })
    }

    fn status_request(&self, method: Method, id: u32) -> RequestBuilder {
        self.request(method, &format!("/status/{}", id))
    }

    pub async fn list_statuses(&self, category_id: u32) -> ApiResult<Vec<Status>> {
        Self::fetch_json(self.list_statuses_request(category_id)).await
    }

    pub async fn create_status(&self, payload: &StatusPayload) -> ApiResult<Status> {
        Self::fetch_json(self.request(Method::POST, "/status").json(payload)).await
    }

    pub async fn update_status(&self, id: u32, payload: &StatusPayload) -> ApiResult<()> {
        Self::fetch_empty(self.status_request(Method::PUT, id).json(payload)).await
    }

    pub async fn delete_status(&self, id: u32) -> ApiResult<()> {
        Self::fetch_empty(self.status_request(Method::DELETE, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_statuses_queries_category() {
        let client = ApiClient::new("http://localhost/").with_token(Some("t".to_string()));
        let request = client.list_statuses_request(3).build().unwrap();

        assert_eq!(request.url().as_str(), "http://localhost/status?categoryId=3");
        assert!(request.headers().contains_key(reqwest::header::AUTHORIZATION));
    }

    #[test]
    fn test_status_item_paths() {
        let client = ApiClient::new("http://localhost/");

        let update = client.status_request(Method::PUT, 12).build().unwrap();
        assert_eq!(update.method(), &Method::PUT);
        assert_eq!(update.url().as_str(), "http://localhost/status/12");

        let delete = client.status_request(Method::DELETE, 12).build().unwrap();
        assert_eq!(delete.method(), &Method::DELETE);
        assert_eq!(delete.url().path(), "/status/12");
    }
}
