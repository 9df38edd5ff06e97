//! Bug list: loads the collection, renders rows, and hosts the add/edit
//! modal dialogs.
//!
//! All mutations go through the REST helpers in [`crate::net::api`] and are
//! followed by a full re-fetch; the list never patches its snapshot in
//! place. Create and delete additionally replace-navigate with the one-shot
//! notification flags read by
//! [`crate::components::notification_banner::NotificationBanner`].

use leptos::prelude::*;

use crate::components::bug_row::BugRow;
use crate::net::types::{Bug, BugPriority, BugStatus};
use crate::state::bugs::BugsState;

/// Kick off a bug collection fetch, replacing the snapshot on success.
///
/// On failure the fixed load error is stored and the underlying fault goes
/// to the console. No retry; the next mutation or remount fetches again.
pub fn load_bugs(bugs: RwSignal<BugsState>) {
    #[cfg(feature = "hydrate")]
    {
        bugs.update(BugsState::begin_load);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_bugs().await {
                Ok(list) => bugs.update(|s| s.finish_load(list)),
                Err(e) => {
                    leptos::logging::error!("fetch bugs failed: {e}");
                    bugs.update(BugsState::fail_load);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bugs;
    }
}

/// Bug list section: header, rows, and modal dialogs.
///
/// Fetches the collection once on mount. While the fetch is pending a
/// loading line is shown; a failed fetch renders the fixed error line and
/// no rows.
#[component]
pub fn BugList() -> impl IntoView {
    let bugs = expect_context::<RwSignal<BugsState>>();

    let show_add = RwSignal::new(false);
    let editing = RwSignal::new(None::<Bug>);

    load_bugs(bugs);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_add_close = Callback::new(move |_| show_add.set(false));
    let on_edit = Callback::new(move |bug: Bug| editing.set(Some(bug)));
    let on_edit_close = Callback::new(move |_| editing.set(None));

    let on_delete = Callback::new(move |bug: Bug| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_bug(&bug.id.to_string()).await {
                    Ok(()) => {
                        load_bugs(bugs);
                        navigate(
                            &crate::state::notifications::deleted_path(&bug.title),
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        leptos::logging::error!("delete bug failed: {e}");
                        bugs.update(BugsState::disarm_delete);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = bug;
        }
    });

    view! {
        <section class="bug-list">
            <div class="bug-list__header">
                <h1>"All Bugs"</h1>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "Add New Bug"
                </button>
            </div>

            {move || {
                let state = bugs.get();
                if let Some(err) = state.error {
                    view! { <p class="bug-list__error">{format!("Error: {err}")}</p> }.into_any()
                } else if state.loading {
                    view! { <p class="bug-list__loading">"Loading bugs..."</p> }.into_any()
                } else {
                    view! {
                        <ul class="bug-list__rows">
                            {state
                                .bugs
                                .into_iter()
                                .map(|bug| {
                                    view! { <BugRow bug=bug on_edit=on_edit on_delete=on_delete/> }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_add.get()>
                <AddBugModal on_close=on_add_close/>
            </Show>
            {move || {
                editing
                    .get()
                    .map(|bug| view! { <EditBugModal bug=bug on_close=on_edit_close/> })
            }}
        </section>
    }
}

/// Modal dialog for reporting a new bug.
///
/// Title is required (trimmed); description is optional. On success the
/// dialog closes, the collection re-fetches, and a replace navigation
/// plants the create notification flags.
#[component]
fn AddBugModal(on_close: Callback<()>) -> impl IntoView {
    let bugs = expect_context::<RwSignal<BugsState>>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |_| {
        let bug_title = title.get();
        if bug_title.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let draft = crate::net::types::BugDraft {
                title: bug_title.trim().to_owned(),
                description: description.get(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_bug(&draft).await {
                    Ok(_) => {
                        on_close.run(());
                        load_bugs(bugs);
                        navigate(
                            &crate::state::notifications::created_path(&draft.title),
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        leptos::logging::error!("create bug failed: {e}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bug_title, bugs);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add New Bug"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            title.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            description.set(event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Add Bug"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for editing an existing bug.
///
/// All form fields are submitted as a partial update addressed by the
/// stringified id. On success the dialog closes and the collection
/// re-fetches; no notification flags are planted.
#[component]
fn EditBugModal(bug: Bug, on_close: Callback<()>) -> impl IntoView {
    let bugs = expect_context::<RwSignal<BugsState>>();

    let id = bug.id;
    let title = RwSignal::new(bug.title);
    let description = RwSignal::new(bug.description);
    let status = RwSignal::new(bug.status);
    let priority = RwSignal::new(bug.priority);

    let submit = Callback::new(move |_| {
        let bug_title = title.get();
        if bug_title.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let patch = crate::net::types::BugPatch {
                title: Some(bug_title.trim().to_owned()),
                description: Some(description.get()),
                status: Some(status.get()),
                priority: Some(priority.get()),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::update_bug(&id.to_string(), &patch).await {
                    Ok(_) => {
                        on_close.run(());
                        load_bugs(bugs);
                    }
                    Err(e) => {
                        leptos::logging::error!("update bug failed: {e}");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bug_title, bugs);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Bug"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            title.set(event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            description.set(event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            status.set(BugStatus::parse(&event_target_value(&ev)));
                        }
                    >
                        {BugStatus::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <option value=s.as_str() selected=move || status.get() == s>
                                        {s.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Priority"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            priority.set(BugPriority::parse(&event_target_value(&ev)));
                        }
                    >
                        {BugPriority::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option value=p.as_str() selected=move || priority.get() == p>
                                        {p.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save Changes"
                    </button>
                </div>
            </div>
        </div>
    }
}
