//! Status Actions

use futures::future::join_all;
use leptos::prelude::*;
use todo_client::{Category, Status, StatusPayload};

use super::{is_current, log_failure};
use crate::context::AppContext;
use crate::store::{
    merge_statuses, store_add_status, store_set_statuses, AppStateStoreFields, AppStore,
};

/// Statuses of one category; empty when the request fails
pub async fn fetch_statuses(ctx: AppContext, category_id: u32) -> Vec<Status> {
    match ctx.client().list_statuses(category_id).await {
        Ok(statuses) => statuses,
        Err(err) => {
            log_failure(&format!("list statuses of category {}", category_id), &err);
            Vec::new()
        }
    }
}

/// Replace the stored statuses with those of `categories`, one request per
/// category, all in flight at once
pub async fn load_statuses(ctx: AppContext, store: AppStore, categories: &[Category]) {
    let session = ctx.session();
    let batches = join_all(categories.iter().map(|category| fetch_statuses(ctx, category.id))).await;
    if !is_current(&ctx, &session, "list statuses") {
        return;
    }
    let statuses = merge_statuses(batches);
    log::debug!("loaded {} statuses", statuses.len());
    store_set_statuses(&store, statuses);
}

async fn reload_statuses(ctx: AppContext, store: AppStore) {
    let categories = store.categories().get_untracked();
    load_statuses(ctx, store, &categories).await;
}

pub async fn create_status(ctx: AppContext, store: AppStore, payload: StatusPayload) {
    let session = ctx.session();
    match ctx.client().create_status(&payload).await {
        Ok(status) => {
            if is_current(&ctx, &session, "create status") {
                store_add_status(&store, status);
            }
        }
        Err(err) => log_failure("create status", &err),
    }
}

pub async fn update_status(ctx: AppContext, store: AppStore, id: u32, payload: StatusPayload) {
    match ctx.client().update_status(id, &payload).await {
        Ok(()) => reload_statuses(ctx, store).await,
        Err(err) => log_failure("update status", &err),
    }
}

pub async fn delete_status(ctx: AppContext, store: AppStore, id: u32) {
    match ctx.client().delete_status(id).await {
        Ok(()) => reload_statuses(ctx, store).await,
        Err(err) => log_failure("delete status", &err),
    }
}
