//! Auth Actions

use todo_client::{Login, Register};

use super::log_failure;
use crate::context::AppContext;
use crate::store::{store_clear, AppStore};

pub async fn login(ctx: AppContext, credentials: Login) {
    match ctx.client().login(&credentials).await {
        Ok(auth) => {
            log::info!("signed in as {}", credentials.username);
            ctx.sign_in(auth.token);
        }
        Err(err) => log_failure("login", &err),
    }
}

pub async fn register(ctx: AppContext, credentials: Register) {
    match ctx.client().register(&credentials).await {
        Ok(auth) => {
            log::info!("registered {}", credentials.username);
            ctx.sign_in(auth.token);
        }
        Err(err) => log_failure("register", &err),
    }
}

pub fn logout(ctx: AppContext, store: AppStore) {
    ctx.sign_out();
    store_clear(&store);
}
