//! Todo Actions

use todo_client::{Todo, TodoFilter, TodoPayload};

use super::{is_current, log_failure};
use crate::context::AppContext;
use crate::store::{store_add_todo, store_set_todos, AppStore};

/// Fetch every todo, dropping any active filter
pub async fn load_todos(ctx: AppContext, store: AppStore) {
    filter_todos(ctx, store, TodoFilter::default()).await;
}

/// Replace the list with the server-side filtered result
pub async fn filter_todos(ctx: AppContext, store: AppStore, filter: TodoFilter) {
    let session = ctx.session();
    match ctx.client().list_todos(&filter).await {
        Ok(todos) => {
            if !is_current(&ctx, &session, "list todos") {
                return;
            }
            log::debug!("loaded {} todos ({:?})", todos.len(), filter);
            store_set_todos(&store, todos);
        }
        Err(err) => log_failure("list todos", &err),
    }
}

pub async fn create_todo(ctx: AppContext, store: AppStore, payload: TodoPayload) {
    let session = ctx.session();
    match ctx.client().create_todo(&payload).await {
        Ok(todo) => {
            if is_current(&ctx, &session, "create todo") {
                store_add_todo(&store, todo);
            }
        }
        Err(err) => log_failure("create todo", &err),
    }
}

pub async fn update_todo(ctx: AppContext, store: AppStore, todo: Todo) {
    match ctx.client().update_todo(&todo).await {
        Ok(()) => load_todos(ctx, store).await,
        Err(err) => log_failure(&format!("update todo {}", todo.id), &err),
    }
}

pub async fn delete_todo(ctx: AppContext, store: AppStore, id: u32) {
    match ctx.client().delete_todo(id).await {
        Ok(()) => load_todos(ctx, store).await,
        Err(err) => log_failure(&format!("delete todo {}", id), &err),
    }
}
