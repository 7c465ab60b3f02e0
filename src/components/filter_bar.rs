//! Filter Bar Component
//!
//! Narrows the todo list by category and status on the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::TodoFilter;

use crate::actions;
use crate::components::{CategorySelect, StatusSelect};
use crate::context::use_app_context;
use crate::selection::statuses_for_category;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

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
        let filter = TodoFilter::new(category.get(), status.get());
        spawn_local(async move {
            actions::filter_todos(ctx, store, filter).await;
        });
    };

    let on_clear = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_category.set(None);
        set_status.set(None);
        spawn_local(async move {
            actions::load_todos(ctx, store).await;
        });
    };

    view! {
        <section class="filter-section">
            <h2>"Todo List"</h2>
            <form class="filter-form" autocomplete="off" on:submit=on_submit>
                <span class="filter-label">"Filter"</span>
                <CategorySelect selected=category on_change=on_category />
                <StatusSelect
                    statuses=statuses
                    selected=status
                    on_change={move |id: Option<u32>| set_status.set(id)}
                />
                <button type="submit">"Filter"</button>
                <button type="button" class="clear-btn" on:click=on_clear>"Clear filter"</button>
            </form>
        </section>
    }
}
