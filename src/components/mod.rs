//! UI Components
//!
//! Reusable Leptos components.

mod category_page;
mod filter_bar;
mod header;
mod login_register;
mod row_actions;
mod selects;
mod status_page;
mod todo_form;
mod todo_list;

pub use category_page::CategoryPage;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use login_register::LoginRegister;
pub use row_actions::RowActions;
pub use selects::{CategorySelect, StatusSelect};
pub use status_page::StatusPage;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
