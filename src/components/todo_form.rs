//! Todo Form Component
//!
//! Form for creating a todo with its category and status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{CategorySelect, StatusSelect};
use crate::context::use_app_context;
use crate::selection::{new_todo_payload, statuses_for_category};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal::<Option<u32>>(None);
    let (status, set_status) = signal::<Option<u32>>(None);

    let statuses = Signal::derive(move || {
        store
            .statuses()
            .with(|all| statuses_for_category(all, category.get()))
    });

    let on_category = move |id: Option<u32>| {
        set_category.set(id);
        set_status.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = new_todo_payload(&title.get(), category.get(), status.get()) else {
            log::warn!("todo needs a title, a category and a status");
            return;
        };

        spawn_local(async move {
            actions::create_todo(ctx, store, payload).await;
        });

        set_title.set(String::new());
        set_category.set(None);
        set_status.set(None);
    };

    view! {
        <section class="todo-form-section">
            <h2>"Add Todo"</h2>
            <form class="todo-form" autocomplete="off" on:submit=on_submit>
                <input
                    type="text"
                    class="todo-input"
                    placeholder="Todo text"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <CategorySelect selected=category on_change=on_category />
                <StatusSelect
                    statuses=statuses
                    selected=status
                    on_change={move |id: Option<u32>| set_status.set(id)}
                />
                <button type="submit">"Add"</button>
            </form>
        </section>
    }
}
