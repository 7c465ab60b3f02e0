//! Todo Board Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod logger;
mod selection;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    log::info!("todo board starting, api at {}", config::api_base_url());
    mount_to_body(App);
}
