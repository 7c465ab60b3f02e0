//! Category Page Component
//!
//! Add, rename and delete categories; jump to a category's statuses.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::Category;

use crate::actions;
use crate::components::RowActions;
use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

/// New category input
#[component]
fn CategoryAddForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        if title.is_empty() { return; }

        spawn_local(async move {
            actions::create_category(ctx, store, title).await;
        });
        set_new_title.set(String::new());
    };

    view! {
        <form class="category-add-form" autocomplete="off" on:submit=on_submit>
            <input
                type="text"
                placeholder="New category name"
                required
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add category"</button>
        </form>
    }
}

/// One category with rename / statuses / delete
#[component]
fn CategoryRow(category: Category) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = category.id;
    let (title, set_title) = signal(category.title.clone());
    let category = StoredValue::new(category);

    let on_rename = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get().trim().to_string();
        if title.is_empty() { return; }

        spawn_local(async move {
            actions::update_category(ctx, store, id, title).await;
        });
    };

    let on_delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            actions::delete_category(ctx, store, id).await;
        });
    });

    view! {
        <li class="category-row">
            <form class="category-form" autocomplete="off" on:submit=on_rename>
                <input
                    type="text"
                    placeholder="Category name"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <RowActions on_delete=on_delete>
                    <button
                        type="button"
                        class="statuses-btn"
                        on:click=move |_| ctx.navigate(Page::StatusEdit(category.get_value()))
                    >
                        "Edit statuses"
                    </button>
                </RowActions>
            </form>
        </li>
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="category-page">
            <h2>"Edit Categories"</h2>

            <h3>"Add Category"</h3>
            <CategoryAddForm />

            <h3>"Categories"</h3>
            <ul class="category-list">
                <For
                    each=move || store.categories().get()
                    key=|category| (category.id, category.title.clone())
                    children=move |category| view! { <CategoryRow category=category /> }
                />
            </ul>
            {move || store.categories().with(|categories| categories.is_empty()).then(|| view! {
                <p class="empty-message">"No categories yet"</p>
            })}
        </section>
    }
}
