//! Todo Board REST Client
//!
//! Typed wrappers around the backend's auth, category, status and todo endpoints.
//! Works natively and on `wasm32` (where reqwest goes through the browser fetch API).

mod client;
mod error;
pub mod models;

mod auth;
mod category;
mod status;
mod todo;

pub use client::{join_url, ApiClient};
pub use error::{ApiError, ApiResult};
pub use models::*;
