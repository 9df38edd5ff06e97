//! Single bug row with status/priority badges and edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Bug;
use crate::state::bugs::BugsState;
use crate::util::badge::{priority_badge_class, status_badge_class};

/// One row in the bug list.
///
/// Delete is a two-step affair: the first click arms an inline confirmation
/// for this row (tracked in `BugsState::pending_delete`), and only the
/// confirming click fires `on_delete`. Arming a different row moves the
/// confirmation there.
#[component]
pub fn BugRow(bug: Bug, on_edit: Callback<Bug>, on_delete: Callback<Bug>) -> impl IntoView {
    let bugs = expect_context::<RwSignal<BugsState>>();

    let id = bug.id;
    let status = bug.status;
    let priority = bug.priority;
    let title = bug.title.clone();
    let description = bug.description.clone();

    let bug_for_edit = bug.clone();
    let bug_for_delete = bug;

    let armed = move || bugs.get().delete_armed(id);

    view! {
        <li class="bug-row">
            <div class="bug-row__main">
                <h3 class="bug-row__title">{title}</h3>
                <p class="bug-row__description">{description}</p>
            </div>
            <span class=format!("bug-badge {}", status_badge_class(status))>
                {status.as_str()}
            </span>
            <span class=format!("bug-badge {}", priority_badge_class(priority))>
                {priority.as_str()}
            </span>
            <div class="bug-row__actions">
                <button class="btn" on:click=move |_| on_edit.run(bug_for_edit.clone())>
                    "Edit"
                </button>
                <Show
                    when=armed
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--danger"
                                on:click=move |_| bugs.update(|s| s.arm_delete(id))
                            >
                                "Delete"
                            </button>
                        }
                    }
                >
                    {
                        let bug_confirm = bug_for_delete.clone();
                        view! {
                            <span class="bug-row__confirm">
                                "Delete this bug?"
                                <button
                                    class="btn"
                                    on:click=move |_| bugs.update(BugsState::disarm_delete)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| on_delete.run(bug_confirm.clone())
                                >
                                    "Delete"
                                </button>
                            </span>
                        }
                    }
                </Show>
            </div>
        </li>
    }
}
