//! Todo Endpoints

use reqwest::{Method, RequestBuilder};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Todo, TodoFilter, TodoPayload};

impl ApiClient {
    fn list_todos_request(&self, filter: &TodoFilter) -> RequestBuilder {
        let builder = self.request(Method::GET, "/todo");
        if filter.is_empty() {
            builder
        } else {
            builder.query(filter)
        }
    }

    fn update_todo_request(&self, todo: &Todo) -> RequestBuilder {
        self.request(Method::PUT, &format!("/todo/{}", todo.id))
            .json(&TodoPayload::from(todo))
    }

    fn delete_todo_request(&self, id: u32) -> RequestBuilder {
        self.request(Method::DELETE, &format!("/todo/{}", id))
    }

    /// `GET /todo`, narrowed by category and/or status when the filter sets them
    pub async fn list_todos(&self, filter: &TodoFilter) -> ApiResult<Vec<Todo>> {
        Self::fetch_json(self.list_todos_request(filter)).await
    }

    pub async fn create_todo(&self, payload: &TodoPayload) -> ApiResult<Todo> {
        Self::fetch_json(self.request(Method::POST, "/todo").json(payload)).await
    }

    /// Sends only the editable fields of `todo`
    pub async fn update_todo(&self, todo: &Todo) -> ApiResult<()> {
        Self::fetch_empty(self.update_todo_request(todo)).await
    }

    pub async fn delete_todo(&self, id: u32) -> ApiResult<()> {
        Self::fetch_empty(self.delete_todo_request(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost/").with_token(Some("t".to_string()))
    }

    #[test]
    fn test_unfiltered_list_has_no_query() {
        let request = client().list_todos_request(&TodoFilter::default()).build().unwrap();
        assert_eq!(request.url().as_str(), "http://localhost/todo");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_filtered_list_queries_ids() {
        let request = client()
            .list_todos_request(&TodoFilter::new(Some(5), None))
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost/todo?categoryId=5");

        let request = client()
            .list_todos_request(&TodoFilter::new(Some(5), Some(8)))
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("categoryId=5&statusId=8"));
    }

    #[test]
    fn test_update_puts_editable_fields() {
        let todo = Todo {
            id: 1,
            user_id: 2,
            title: "Water plants".to_string(),
            category_id: 3,
            status_id: 4,
            created_at: "2022-05-01".to_string(),
            updated_at: "2022-05-01".to_string(),
        };
        let request = client().update_todo_request(&todo).build().unwrap();

        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.url().as_str(), "http://localhost/todo/1");
        let body: serde_json::Value =
            serde_json::from_slice(request.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
        assert_eq!(body, json!({ "title": "Water plants", "categoryId": 3, "statusId": 4 }));
    }

    #[test]
    fn test_delete_path() {
        let anonymous = ApiClient::new("http://localhost/");
        let request = anonymous.delete_todo_request(1).build().unwrap();

        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(request.url().as_str(), "http://localhost/todo/1");
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}
