//! Bug list page — the root route.

use leptos::prelude::*;

use crate::components::bug_list::BugList;
use crate::components::nav_bar::NavBar;
use crate::components::notification_banner::NotificationBanner;

/// Root page composing the navigation header, the one-shot success banner,
/// and the bug list.
#[component]
pub fn BugsPage() -> impl IntoView {
    view! {
        <div class="bugs-page">
            <NavBar/>
            <main class="bugs-page__main">
                <NotificationBanner/>
                <BugList/>
            </main>
        </div>
    }
}
