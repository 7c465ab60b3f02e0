//! Status Page Component
//!
//! Statuses of a single category: add, recolor/rename, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{Category, Status, StatusPayload};

use crate::actions;
use crate::components::RowActions;
use crate::context::use_app_context;
use crate::selection::statuses_for_category;
use crate::store::{use_app_store, AppStateStoreFields};

const DEFAULT_STATUS_COLOR: &str = "#1976d2";

#[component]
fn StatusAddForm(category_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (color, set_color) = signal(DEFAULT_STATUS_COLOR.to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get().trim().to_string();
        if title.is_empty() { return; }

        let payload = StatusPayload {
            title,
            category_id,
            color: color.get(),
        };
        spawn_local(async move {
            actions::create_status(ctx, store, payload).await;
        });
        set_title.set(String::new());
        set_color.set(DEFAULT_STATUS_COLOR.to_string());
    };

    view! {
        <form class="status-add-form" autocomplete="off" on:submit=on_submit>
            <input
                type="text"
                placeholder="New status name"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <input
                type="color"
                prop:value=move || color.get()
                on:input=move |ev| set_color.set(event_target_value(&ev))
            />
            <button type="submit">"Add status"</button>
        </form>
    }
}

#[component]
fn StatusRow(status: Status) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = status.id;
    let category_id = status.category_id;
    let (title, set_title) = signal(status.title);
    let (color, set_color) = signal(status.color);

    let on_update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get().trim().to_string();
        if title.is_empty() { return; }

        let payload = StatusPayload {
            title,
            category_id,
            color: color.get(),
        };
        spawn_local(async move {
            actions::update_status(ctx, store, id, payload).await;
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            actions::delete_status(ctx, store, id).await;
        });
    });

    view! {
        <li class="status-row">
            <form class="status-form" autocomplete="off" on:submit=on_update>
                <span class="status-color-dot" style=move || format!("background-color: {};", color.get())></span>
                <input
                    type="text"
                    placeholder="Status name"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="color"
                    prop:value=move || color.get()
                    on:input=move |ev| set_color.set(event_target_value(&ev))
                />
                <RowActions on_delete=on_delete />
            </form>
        </li>
    }
}

#[component]
pub fn StatusPage(category: Category) -> impl IntoView {
    let store = use_app_store();

    let category_id = category.id;
    let statuses = move || {
        store
            .statuses()
            .with(|all| statuses_for_category(all, Some(category_id)))
    };

    view! {
        <section class="status-page">
            <h2>"Statuses of " {category.title}</h2>

            <h3>"Add Status"</h3>
            <StatusAddForm category_id=category_id />

            <h3>"Statuses"</h3>
            <ul class="status-list">
                <For
                    each=statuses
                    key=|status| (status.id, status.title.clone(), status.color.clone())
                    children=move |status| view! { <StatusRow status=status /> }
                />
            </ul>
            {move || statuses().is_empty().then(|| view! {
                <p class="empty-message">"No statuses for this category yet"</p>
            })}
        </section>
    }
}
