//! Row Actions Component
//!
//! Trailing controls of an editable todo/category/status row: a submit
//! "Update" button, optional extra buttons, and a delete that asks first.

use leptos::prelude::*;

/// Where a row's delete stands
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DeleteStep {
    #[default]
    Idle,
    Confirming,
}

impl DeleteStep {
    pub fn ask(self) -> Self {
        DeleteStep::Confirming
    }

    pub fn cancel(self) -> Self {
        DeleteStep::Idle
    }

    /// Next step, and whether the delete request goes out. Only a pending
    /// confirmation sends it.
    pub fn confirm(self) -> (Self, bool) {
        (DeleteStep::Idle, self == DeleteStep::Confirming)
    }
}

/// Must be placed inside the row's `<form>`; "Update" submits it.
#[component]
pub fn RowActions(
    #[prop(into)] on_delete: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (step, set_step) = signal(DeleteStep::Idle);

    let on_confirm = move |_| {
        let (next, send) = step.get_untracked().confirm();
        set_step.set(next);
        if send {
            on_delete.run(());
        }
    };

    view! {
        <span class="row-actions">
            <button type="submit" class="update-btn">"Update"</button>
            {children.map(|children| children())}
            {move || match step.get() {
                DeleteStep::Idle => view! {
                    <button
                        type="button"
                        class="delete-btn"
                        on:click=move |_| set_step.update(|s| *s = s.ask())
                    >
                        "Delete"
                    </button>
                }
                .into_any(),
                DeleteStep::Confirming => view! {
                    <span class="delete-confirm">
                        "Really delete?"
                        <button type="button" class="confirm-btn" on:click=on_confirm>"Yes"</button>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| set_step.update(|s| *s = s.cancel())
                        >
                            "No"
                        </button>
                    </span>
                }
                .into_any(),
            }}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_needs_confirmation() {
        let (step, send) = DeleteStep::Idle.confirm();
        assert_eq!(step, DeleteStep::Idle);
        assert!(!send);

        let (step, send) = DeleteStep::Idle.ask().confirm();
        assert_eq!(step, DeleteStep::Idle);
        assert!(send);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let step = DeleteStep::default().ask();
        assert_eq!(step, DeleteStep::Confirming);

        let step = step.cancel();
        assert_eq!(step, DeleteStep::Idle);
        assert!(!step.confirm().1);
    }
}
