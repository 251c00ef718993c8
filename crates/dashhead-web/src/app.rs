//! Main Leptos App component with SPA router

use dashhead_core::{HeaderConfig, HeaderContext, RouteLabel};
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{Header, Sidebar};
use crate::storage::BrowserStorage;

/// Main App component
///
/// Reads the ambient header values from `localStorage` once at mount and
/// owns the sidebar collapse state.
#[component]
pub fn App() -> impl IntoView {
    let config = HeaderConfig::default();
    provide_context(HeaderContext::from_store(&BrowserStorage, &config.storage));
    provide_context(config);

    let (collapsed, set_collapsed) = signal(false);

    view! {
        <Router>
            <div class="app" class:sidebar-collapsed=move || collapsed.get()>
                <RoutedHeader collapsed set_collapsed />
                <div class="layout">
                    <Show when=move || !collapsed.get()>
                        <Sidebar />
                    </Show>
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/") view=SectionPage />
                            <Route path=path!("/*any") view=SectionPage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// Header wired to the router location and the app's collapse state
#[component]
fn RoutedHeader(collapsed: ReadSignal<bool>, set_collapsed: WriteSignal<bool>) -> impl IntoView {
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());

    view! {
        <Header
            path
            enable_collapsible_sidebar=true
            collapse_sidebar=collapsed
            toggle_collapsible_sidebar=Callback::new(move |_: ()| {
                set_collapsed.update(|v| *v = !*v)
            })
        />
    }
}

/// Placeholder page body for the current section
#[component]
fn SectionPage() -> impl IntoView {
    let location = use_location();
    let label = move || RouteLabel::from_path(&location.pathname.get()).as_str();

    view! {
        <section class="section-page">
            <h2>{label}</h2>
        </section>
    }
}

