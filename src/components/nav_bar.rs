//! Top navigation bar with app branding and version stamp.

use leptos::prelude::*;

use crate::config::APP_VERSION;

/// Navigation header shown on every page.
///
/// Carries the application name and the running version as `v<APP_VERSION>`.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">
                "Bug Tracker"
            </a>
            <span class="nav-bar__version">{format!("v{APP_VERSION}")}</span>
        </nav>
    }
}
