//! Sidebar navigation listing every known dashboard section

use dashhead_core::RouteLabel;
use leptos::prelude::*;
use leptos_router::components::A;

/// Sidebar with one link per section of the route table
#[component]
pub fn Sidebar(
    /// Prefix for section links (e.g. "/ws-1")
    #[prop(default = "")]
    base: &'static str,
) -> impl IntoView {
    let links = RouteLabel::table()
        .iter()
        // `workspaceId` is a placeholder segment, not a page
        .filter(|(segment, _)| *segment != "workspaceId")
        .map(|(segment, label)| {
            let href = format!("{}/{}", base, segment);
            view! {
                <li class="nav-item">
                    <A href=href attr:class="sidebar-link">
                        <span class="sidebar-link-label">{label.as_str()}</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <nav class="nav">
                <ul class="nav-list">{links}</ul>
            </nav>
        </aside>
    }
}
