//! Selection Logic
//!
//! Client-side filtering and form state shared by the todo form, the filter
//! bar and each todo row.

use todo_client::{Status, Todo, TodoPayload};

/// `<select>` value → id. The empty option and `-1` ("None") mean unselected.
pub fn parse_selection(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|id| *id != 0)
}

/// id → `<select>` value
pub fn selection_value(id: Option<u32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Statuses that belong to `category_id`. Nothing is offered until a category is chosen.
pub fn statuses_for_category(statuses: &[Status], category_id: Option<u32>) -> Vec<Status> {
    let Some(category_id) = category_id else {
        return Vec::new();
    };
    statuses
        .iter()
        .filter(|status| status.category_id == category_id)
        .cloned()
        .collect()
}

/// Payload for a new todo, or `None` while the form is incomplete
pub fn new_todo_payload(
    title: &str,
    category_id: Option<u32>,
    status_id: Option<u32>,
) -> Option<TodoPayload> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(TodoPayload {
        title: title.to_string(),
        category_id: category_id?,
        status_id: status_id?,
    })
}

/// Category/status picked in one todo row
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowSelection {
    pub category_id: Option<u32>,
    pub status_id: Option<u32>,
}

impl RowSelection {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            category_id: Some(todo.category_id).filter(|id| *id != 0),
            status_id: Some(todo.status_id).filter(|id| *id != 0),
        }
    }

    /// A different category invalidates the chosen status.
    pub fn select_category(&mut self, category_id: Option<u32>) {
        if self.category_id != category_id {
            self.category_id = category_id;
            self.status_id = None;
        }
    }

    pub fn select_status(&mut self, status_id: Option<u32>) {
        self.status_id = status_id;
    }

    /// `todo` with this selection applied, or `None` if either id is missing
    pub fn apply(&self, todo: &Todo) -> Option<Todo> {
        Some(Todo {
            category_id: self.category_id?,
            status_id: self.status_id?,
            ..todo.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(id: u32, category_id: u32) -> Status {
        Status {
            id,
            title: format!("Status {}", id),
            category_id,
            color: "#4caf50".to_string(),
        }
    }

    fn todo(category_id: u32, status_id: u32) -> Todo {
        Todo {
            id: 10,
            user_id: 1,
            title: "Pay rent".to_string(),
            category_id,
            status_id,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("12"), Some(12));
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection("0"), None);
        assert_eq!(selection_value(Some(12)), "12");
        assert_eq!(selection_value(None), "");
    }

    #[test]
    fn test_statuses_filtered_by_category() {
        let statuses = vec![status(1, 1), status(2, 2), status(3, 1)];

        let ids: Vec<u32> = statuses_for_category(&statuses, Some(1)).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(statuses_for_category(&statuses, Some(9)).is_empty());
        assert!(statuses_for_category(&statuses, None).is_empty());
    }

    #[test]
    fn test_new_todo_payload() {
        let payload = new_todo_payload("  Call mom ", Some(2), Some(5)).unwrap();
        assert_eq!(payload.title, "Call mom");
        assert_eq!(payload.category_id, 2);
        assert_eq!(payload.status_id, 5);

        assert!(new_todo_payload("   ", Some(2), Some(5)).is_none());
        assert!(new_todo_payload("Call mom", None, Some(5)).is_none());
        assert!(new_todo_payload("Call mom", Some(2), None).is_none());
    }

    #[test]
    fn test_category_change_clears_status() {
        let mut selection = RowSelection::from_todo(&todo(1, 3));
        assert_eq!(selection.category_id, Some(1));

        selection.select_category(Some(1));
        assert_eq!(selection.status_id, Some(3));

        selection.select_category(Some(2));
        assert_eq!(selection.category_id, Some(2));
        assert_eq!(selection.status_id, None);
    }

    #[test]
    fn test_apply_requires_both_ids() {
        let original = todo(1, 3);
        let mut selection = RowSelection::from_todo(&original);

        selection.select_category(Some(2));
        assert!(selection.apply(&original).is_none());

        selection.select_status(Some(7));
        let updated = selection.apply(&original).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, original.title);
        assert_eq!((updated.category_id, updated.status_id), (2, 7));
    }

    #[test]
    fn test_todo_without_category_starts_incomplete() {
        let selection = RowSelection::from_todo(&todo(0, 0));
        assert_eq!(selection, RowSelection::default());
    }
}
