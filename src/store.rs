//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::{Category, Status, Todo};

/// Everything fetched from the backend for the signed-in user
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos as last listed (possibly filtered)
    pub todos: Vec<Todo>,
    /// All categories
    pub categories: Vec<Category>,
    /// Statuses of every category
    pub statuses: Vec<Status>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Flatten per-category status lists, keeping the first copy of each id
pub fn merge_statuses(batches: Vec<Vec<Status>>) -> Vec<Status> {
    let mut seen = HashSet::new();
    batches
        .into_iter()
        .flatten()
        .filter(|status| seen.insert(status.id))
        .collect()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

pub fn store_add_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

pub fn store_set_categories(store: &AppStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

pub fn store_add_category(store: &AppStore, category: Category) {
    store.categories().write().push(category);
}

pub fn store_set_statuses(store: &AppStore, statuses: Vec<Status>) {
    *store.statuses().write() = statuses;
}

pub fn store_add_status(store: &AppStore, status: Status) {
    store.statuses().write().push(status);
}

/// Forget everything (on logout)
pub fn store_clear(store: &AppStore) {
    store.todos().write().clear();
    store.categories().write().clear();
    store.statuses().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u32) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            category_id: 1,
            status_id: 1,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn category(id: u32) -> Category {
        Category {
            id,
            user_id: 1,
            title: format!("Category {}", id),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn status(id: u32, category_id: u32) -> Status {
        Status {
            id,
            title: format!("Status {}", id),
            category_id,
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_merge_statuses_keeps_order() {
        let merged = merge_statuses(vec![
            vec![status(1, 1), status(2, 1)],
            vec![],
            vec![status(5, 3)],
        ]);
        let ids: Vec<u32> = merged.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn test_merge_statuses_drops_duplicates() {
        let merged = merge_statuses(vec![vec![status(1, 1)], vec![status(1, 1), status(4, 2)]]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].id, 4);
    }

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());
        (owner, store)
    }

    fn ids<T>(items: &[T], id: impl Fn(&T) -> u32) -> Vec<u32> {
        items.iter().map(id).collect()
    }

    #[test]
    fn test_create_appends_and_refetch_replaces() {
        let (_owner, store) = new_store();

        store_set_todos(&store, vec![todo(1), todo(2)]);
        store_add_todo(&store, todo(3));
        assert_eq!(ids(&store.todos().get_untracked(), |t| t.id), vec![1, 2, 3]);

        store_set_todos(&store, vec![todo(2)]);
        assert_eq!(ids(&store.todos().get_untracked(), |t| t.id), vec![2]);

        store_set_categories(&store, vec![category(1)]);
        store_add_category(&store, category(4));
        assert_eq!(ids(&store.categories().get_untracked(), |c| c.id), vec![1, 4]);

        store_set_statuses(&store, merge_statuses(vec![vec![status(1, 1)], vec![status(1, 1)]]));
        store_add_status(&store, status(6, 4));
        assert_eq!(ids(&store.statuses().get_untracked(), |s| s.id), vec![1, 6]);
    }

    #[test]
    fn test_clear_empties_every_collection() {
        let (_owner, store) = new_store();
        store_add_todo(&store, todo(1));
        store_add_category(&store, category(1));
        store_add_status(&store, status(1, 1));

        store_clear(&store);

        assert!(store.todos().get_untracked().is_empty());
        assert!(store.categories().get_untracked().is_empty());
        assert!(store.statuses().get_untracked().is_empty());
    }
}
