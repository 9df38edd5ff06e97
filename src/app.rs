//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::bugs::BugsPage;
use crate::state::bugs::BugsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared bug list state context and sets up client-side
/// routing. The root route renders the bug list page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bugs = RwSignal::new(BugsState::default());
    provide_context(bugs);

    view! {
        <Stylesheet id="leptos" href="/pkg/bugtracker-ui.css"/>
        <Title text="Bug Tracker"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BugsPage/>
            </Routes>
        </Router>
    }
}
