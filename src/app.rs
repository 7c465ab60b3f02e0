//! Todo Board App
//!
//! Session handling and the page switcher.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{CategoryPage, FilterBar, Header, LoginRegister, StatusPage, TodoForm, TodoList};
use crate::context::{use_app_context, AppContext, Page};
use crate::session;
use crate::store::{store_clear, AppState};

/// Main page: add form, filter and the list
#[component]
fn TodosPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="todos-page">
            <TodoForm />
            <FilterBar />
            <TodoList />
            <button
                type="button"
                class="edit-categories-btn"
                on:click=move |_| ctx.navigate(Page::CategoryEdit)
            >
                "Edit categories"
            </button>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (token, set_token) = signal(session::read_token());
    let initial_page = if token.get_untracked().is_some() { Page::Todos } else { Page::Login };
    let (page, set_page) = signal(initial_page);
    let store = Store::new(AppState::default());
    let ctx = AppContext::new((token, set_token), (page, set_page));

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Fetch everything once a session exists
    Effect::new(move |_| {
        if ctx.is_signed_in() {
            log::info!("session active, loading categories and todos");
            spawn_local(async move {
                actions::load_categories(ctx, store).await;
                actions::load_todos(ctx, store).await;
            });
        } else {
            store_clear(&store);
            ctx.navigate(Page::Login);
        }
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match (ctx.is_signed_in(), page.get()) {
                    (false, _) | (true, Page::Login) => view! { <LoginRegister /> }.into_any(),
                    (true, Page::Todos) => view! { <TodosPage /> }.into_any(),
                    (true, Page::CategoryEdit) => view! { <CategoryPage /> }.into_any(),
                    (true, Page::StatusEdit(category)) => view! { <StatusPage category=category /> }.into_any(),
                }}
            </main>
        </div>
    }
}
