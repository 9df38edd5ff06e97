//! One-shot success banner driven by route query parameters.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::notifications::Notification;

/// Success banner shown after a create or delete mutation.
///
/// The mutation gateway plants flags in the URL query via a replace
/// navigation; this component derives a [`Notification`] from them and
/// renders its message. Dismissing replace-navigates to the bare route,
/// which drops the flags and clears the banner.
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let query = use_query_map();

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let notification = Memo::new(move |_| Notification::from_query(|k| query.read().get(k)));

    let dismiss = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            navigate(
                Notification::dismiss_path(),
                leptos_router::NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        {move || {
            notification
                .get()
                .map(|n| {
                    view! {
                        <div class="notification notification--success" role="status">
                            <span class="notification__message">{n.message()}</span>
                            <button
                                class="notification__dismiss"
                                title="Dismiss"
                                on:click=move |_| dismiss.run(())
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
