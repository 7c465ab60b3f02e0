//! Category Endpoints

use reqwest::{Method, RequestBuilder};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Category, CategoryPayload};

impl ApiClient {
    fn category_request(&self, method: Method, id: Option<u32>) -> RequestBuilder {
        match id {
            Some(id) => self.request(method, &format!("/category/{}", id)),
            None => self.request(method, "/category"),
        }
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Self::fetch_json(self.category_request(Method::GET, None)).await
    }

    pub async fn create_category(&self, title: &str) -> ApiResult<Category> {
        let payload = CategoryPayload {
            title: title.to_string(),
        };
        Self::fetch_json(self.category_request(Method::POST, None).json(&payload)).await
    }

    pub async fn update_category(&self, id: u32, title: &str) -> ApiResult<()> {
        let payload = CategoryPayload {
            title: title.to_string(),
        };
        Self::fetch_empty(self.category_request(Method::PUT, Some(id)).json(&payload)).await
    }

    pub async fn delete_category(&self, id: u32) -> ApiResult<()> {
        Self::fetch_empty(self.category_request(Method::DELETE, Some(id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_paths() {
        let client = ApiClient::new("http://localhost:80/").with_token(Some("t".to_string()));

        let list = client.category_request(Method::GET, None).build().unwrap();
        assert_eq!(list.url().as_str(), "http://localhost:80/category");

        let update = client.category_request(Method::PUT, Some(4)).build().unwrap();
        assert_eq!(update.method(), &Method::PUT);
        assert_eq!(update.url().as_str(), "http://localhost:80/category/4");

        let delete = client.category_request(Method::DELETE, Some(4)).build().unwrap();
        assert_eq!(delete.url().path(), "/category/4");
    }
}
