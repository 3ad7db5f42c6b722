//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PanelConfig;
use crate::pages::startup::StartupPage;
use crate::state::{flash::FlashState, permissions::PermissionState, startup::StartupState};

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
/// Provides the shared stores and panel config, then routes to the startup page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let startup = RwSignal::new(StartupState::default());
    let flashes = RwSignal::new(FlashState::default());
    let permissions = RwSignal::new(PermissionState::default());

    provide_context(startup);
    provide_context(flashes);
    provide_context(permissions);
    provide_context(PanelConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/startup-panel.css"/>
        <Title text="Startup"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=(StaticSegment("server"), ParamSegment("id"), StaticSegment("startup"))
                    view=StartupPage
                />
            </Routes>
        </Router>
    }
}
