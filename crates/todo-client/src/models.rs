//! Backend Models
//!
//! Data structures matching backend entities and request payloads.
//! Everything travels as camelCase JSON.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    #[serde(default)]
    pub user_id: u32,
    pub title: String,
    pub category_id: u32,
    pub status_id: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    #[serde(default)]
    pub user_id: u32,
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Status data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: u32,
    pub title: String,
    pub category_id: u32,
    #[serde(default)]
    pub color: String,
}

// ========================
// Auth Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Login {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

// ========================
// Request Payloads
// ========================

/// Body of `POST /todo` and `PUT /todo/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub title: String,
    pub category_id: u32,
    pub status_id: u32,
}

impl From<&Todo> for TodoPayload {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            category_id: todo.category_id,
            status_id: todo.status_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub title: String,
}

/// Body of `POST /status` and `PUT /status/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPayload {
    pub title: String,
    pub category_id: u32,
    pub color: String,
}

/// Query for `GET /status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub category_id: u32,
}

/// Query for `GET /todo`. Unset ids are left out of the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u32>,
}

impl TodoFilter {
    /// Zero ids count as "not selected".
    pub fn new(category_id: Option<u32>, status_id: Option<u32>) -> Self {
        Self {
            category_id: category_id.filter(|id| *id != 0),
            status_id: status_id.filter(|id| *id != 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.status_id.is_none()
    }
}
