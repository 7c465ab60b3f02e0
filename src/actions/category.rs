//! Category Actions

use super::{is_current, load_statuses, log_failure};
use crate::context::AppContext;
use crate::store::{store_add_category, store_set_categories, AppStore};

/// Fetch categories, then the statuses of each of them
pub async fn load_categories(ctx: AppContext, store: AppStore) {
    let session = ctx.session();
    match ctx.client().list_categories().await {
        Ok(categories) => {
            if !is_current(&ctx, &session, "list categories") {
                return;
            }
            log::debug!("loaded {} categories", categories.len());
            store_set_categories(&store, categories.clone());
            load_statuses(ctx, store, &categories).await;
        }
        Err(err) => log_failure("list categories", &err),
    }
}

pub async fn create_category(ctx: AppContext, store: AppStore, title: String) {
    let session = ctx.session();
    match ctx.client().create_category(&title).await {
        Ok(category) => {
            if is_current(&ctx, &session, "create category") {
                store_add_category(&store, category);
            }
        }
        Err(err) => log_failure("create category", &err),
    }
}

pub async fn update_category(ctx: AppContext, store: AppStore, id: u32, title: String) {
    match ctx.client().update_category(id, &title).await {
        Ok(()) => load_categories(ctx, store).await,
        Err(err) => log_failure("update category", &err),
    }
}

pub async fn delete_category(ctx: AppContext, store: AppStore, id: u32) {
    match ctx.client().delete_category(id).await {
        Ok(()) => load_categories(ctx, store).await,
        Err(err) => log_failure("delete category", &err),
    }
}

