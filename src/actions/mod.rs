//! Backend Actions
//!
//! Each action calls the REST client and folds the outcome into the store:
//! creates append locally, updates and deletes refetch. Failures are logged
//! and otherwise dropped. Responses that come back after the session changed
//! are dropped too.

mod auth;
mod category;
mod status;
mod todo;

use todo_client::ApiError;

use crate::context::AppContext;

pub use auth::*;
pub use category::*;
pub use status::*;
pub use todo::*;

fn log_failure(action: &str, err: &ApiError) {
    log::error!("{} failed: {}", action, err);
}

/// Whether a response may still be folded into the store
fn is_current(ctx: &AppContext, session: &Option<String>, action: &str) -> bool {
    let current = ctx.session_matches(session);
    if !current {
        log::debug!("{}: session changed, dropping response", action);
    }
    current
}
