//! Breadcrumb trail for the current route

use dashhead_core::BreadcrumbTrail;
use leptos::either::Either;
use leptos::prelude::*;

/// Breadcrumb navigation; the last crumb is the current location
#[component]
pub fn Breadcrumbs(
    /// Trail for the current route, already limited to its display count
    #[prop(into)]
    trail: Signal<BreadcrumbTrail>,
    dark_mode: bool,
) -> impl IntoView {
    let class = if dark_mode {
        "tj-breadcrumb tj-breadcrumb-dark"
    } else {
        "tj-breadcrumb"
    };

    view! {
        <nav class=class aria-label="breadcrumb">
            <ol class="breadcrumb">
                {move || {
                    let crumbs = trail.with(BreadcrumbTrail::visible);
                    let last = crumbs.len().saturating_sub(1);
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(idx, crumb)| {
                            let current = idx == last;
                            let item_class = if current {
                                "breadcrumb-item active"
                            } else {
                                "breadcrumb-item"
                            };
                            let body = match crumb.href {
                                Some(href) if !current => {
                                    Either::Left(view! { <a href=href>{crumb.label}</a> })
                                }
                                _ => Either::Right(crumb.label),
                            };
                            view! { <li class=item_class>{body}</li> }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
