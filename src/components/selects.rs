//! Category / Status Selects
//!
//! Dropdowns shared by the todo form, the filter bar and the todo rows.

use leptos::prelude::*;
use todo_client::Status;

use crate::selection::{parse_selection, selection_value};
use crate::store::{use_app_store, AppStateStoreFields};

/// Dropdown over all categories in the store
#[component]
pub fn CategorySelect(
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
    #[prop(default = "Category")] placeholder: &'static str,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="category-select"
            prop:value=move || selection_value(selected.get())
            on:change=move |ev| on_change.run(parse_selection(&event_target_value(&ev)))
        >
            <option value="" selected=move || selected.get().is_none()>{placeholder}</option>
            <For
                each=move || store.categories().get()
                key=|category| (category.id, category.title.clone())
                children=move |category| {
                    let id = category.id;
                    view! {
                        <option value=id.to_string() selected=move || selected.get() == Some(id)>
                            {category.title}
                        </option>
                    }
                }
            />
        </select>
    }
}

/// Dropdown over the given statuses (already narrowed to one category)
#[component]
pub fn StatusSelect(
    #[prop(into)] statuses: Signal<Vec<Status>>,
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
    #[prop(default = "Status")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="status-select"
            prop:value=move || selection_value(selected.get())
            on:change=move |ev| on_change.run(parse_selection(&event_target_value(&ev)))
        >
            <option value="" selected=move || selected.get().is_none()>{placeholder}</option>
            <For
                each=move || statuses.get()
                key=|status| (status.id, status.title.clone())
                children=move |status| {
                    let id = status.id;
                    view! {
                        <option
                            value=id.to_string()
                            style=format!("color: {};", status.color)
                            selected=move || selected.get() == Some(id)
                        >
                            {status.title}
                        </option>
                    }
                }
            />
        </select>
    }
}
