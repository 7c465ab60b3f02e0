//! Header Component
//!
//! Title bar with the back button for nested pages and logout.

use leptos::prelude::*;

use crate::actions;
use crate::context::{use_app_context, Page};
use crate::store::use_app_store;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <header class="app-header">
            <div class="header-left">
                {move || ctx.page.get().back_label().map(|label| view! {
                    <button type="button" class="back-btn" on:click=move |_| ctx.back()>
                        {label}
                    </button>
                })}
            </div>
            <h1 class="header-title">"TodoList App"</h1>
            <div class="header-right">
                <Show when=move || ctx.page.get() != Page::Login>
                    <button
                        type="button"
                        class="logout-btn"
                        on:click=move |_| actions::logout(ctx, store)
                    >
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
