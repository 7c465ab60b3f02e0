//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_client::{ApiClient, Category};

use crate::config;
use crate::session;

/// Which screen is shown. Kept in memory only; there is no URL routing.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Login,
    Todos,
    CategoryEdit,
    /// Editing the statuses of one category
    StatusEdit(Category),
}

impl Page {
    /// Target of the header's back button
    pub fn back(&self) -> Option<Page> {
        match self {
            Page::StatusEdit(_) => Some(Page::CategoryEdit),
            Page::CategoryEdit => Some(Page::Todos),
            Page::Login | Page::Todos => None,
        }
    }

    pub fn back_label(&self) -> Option<&'static str> {
        match self {
            Page::StatusEdit(_) => Some("Back to categories"),
            Page::CategoryEdit => Some("Back to todos"),
            Page::Login | Page::Todos => None,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session token - read
    pub token: ReadSignal<Option<String>>,
    /// Session token - write
    set_token: WriteSignal<Option<String>>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        token: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            token: token.0,
            set_token: token.1,
            page: page.0,
            set_page: page.1,
        }
    }

    /// REST client carrying the current session token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(config::api_base_url()).with_token(self.session())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Token a request is about to be sent with; pair with [`Self::session_matches`]
    pub fn session(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Whether `session` is still the signed-in token. A response that
    /// arrives after logout or an account switch must not reach the store.
    pub fn session_matches(&self, session: &Option<String>) -> bool {
        session.is_some() && self.token.with_untracked(|current| current == session)
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    pub fn back(&self) {
        if let Some(page) = self.page.get_untracked().back() {
            self.navigate(page);
        }
    }

    /// Persist the token and open the todo page
    pub fn sign_in(&self, token: String) {
        session::store_token(&token);
        self.set_token.set(Some(token));
        self.navigate(Page::Todos);
    }

    /// Drop the token (state and cookie) and return to the login page
    pub fn sign_out(&self) {
        session::clear_token();
        self.set_token.set(None);
        self.navigate(Page::Login);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
