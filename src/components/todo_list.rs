//! Todo List Component
//!
//! One editable row per todo. A row's status dropdown only offers statuses of
//! the category picked in that row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::Todo;

use crate::actions;
use crate::components::{CategorySelect, RowActions, StatusSelect};
use crate::context::use_app_context;
use crate::selection::{statuses_for_category, RowSelection};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let title = todo.title.clone();
    let (selection, set_selection) = signal(RowSelection::from_todo(&todo));
    let todo = StoredValue::new(todo);

    let category = Signal::derive(move || selection.with(|s| s.category_id));
    let status = Signal::derive(move || selection.with(|s| s.status_id));
    let statuses = Signal::derive(move || {
        let category_id = category.get();
        store
            .statuses()
            .with(|all| statuses_for_category(all, category_id))
    });

    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match selection.with(|s| s.apply(&todo.get_value())) {
            Some(updated) => spawn_local(async move {
                actions::update_todo(ctx, store, updated).await;
            }),
            None => log::warn!("todo {}: pick a category and a status before updating", id),
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            actions::delete_todo(ctx, store, id).await;
        });
    });

    view! {
        <li class="todo-row">
            <form class="todo-row-form" autocomplete="off" on:submit=on_update>
                <span class="todo-title">{title}</span>
                <CategorySelect
                    selected=category
                    on_change={move |category_id: Option<u32>| set_selection.update(|s| s.select_category(category_id))}
                    placeholder="None"
                />
                <StatusSelect
                    statuses=statuses
                    selected=status
                    on_change={move |status_id: Option<u32>| set_selection.update(|s| s.select_status(status_id))}
                    placeholder="None"
                />
                <RowActions on_delete=on_delete />
            </form>
        </li>
    }
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                // Include mutable fields so a refetch re-renders changed rows
                key=|todo| {
                    (
                        todo.id,
                        todo.title.clone(),
                        todo.category_id,
                        todo.status_id,
                        todo.updated_at.clone(),
                    )
                }
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
        {move || store.todos().with(|todos| todos.is_empty()).then(|| view! {
            <p class="empty-message">"No todos yet"</p>
        })}
    }
}
