//! Login / Register Component
//!
//! Two tabs, each a credential form. Inputs are reset after submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{Login, Register};

use crate::actions;
use crate::context::use_app_context;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Login {
            username: username.get(),
            password: password.get(),
        };
        spawn_local(async move {
            actions::login(ctx, credentials).await;
        });
        set_username.set(String::new());
        set_password.set(String::new());
    };

    view! {
        <form class="auth-form" autocomplete="off" on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                required
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="off"
                required
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Log in"</button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_confirm, set_password_confirm) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = Register {
            username: username.get(),
            password: password.get(),
            password_confirm: password_confirm.get(),
        };
        spawn_local(async move {
            actions::register(ctx, credentials).await;
        });
        set_username.set(String::new());
        set_password.set(String::new());
        set_password_confirm.set(String::new());
    };

    view! {
        <form class="auth-form" autocomplete="off" on:submit=on_submit>
            <input
                type="text"
                placeholder="Username"
                required
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="off"
                required
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Repeat password"
                autocomplete="off"
                required
                prop:value=move || password_confirm.get()
                on:input=move |ev| set_password_confirm.set(event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
    }
}

#[component]
pub fn LoginRegister() -> impl IntoView {
    let (tab, set_tab) = signal(AuthTab::Login);

    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "auth-tab active" } else { "auth-tab" }
    };

    view! {
        <section class="auth-panel">
            <div class="auth-tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(AuthTab::Login)
                    on:click=move |_| set_tab.set(AuthTab::Login)
                >
                    "Login"
                </button>
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(AuthTab::Register)
                    on:click=move |_| set_tab.set(AuthTab::Register)
                >
                    "Register"
                </button>
            </div>
            <div class="auth-tab-panel" role="tabpanel">
                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginForm /> }.into_any(),
                    AuthTab::Register => view! { <RegisterForm /> }.into_any(),
                }}
            </div>
        </section>
    }
}
