//! Dashboard header component

use dashhead_core::header::{HeaderProps as HeaderState, ToggleAffordance};
use dashhead_core::{BreadcrumbTrail, HeaderConfig, HeaderContext, HeaderModel, ToggleHandler, ToggleKind};
use leptos::prelude::*;

use super::{Breadcrumbs, ButtonSolid, ToolTip};

/// Header with section title, sidebar toggle, breadcrumbs and version label.
///
/// Collapse state is owned by the caller. Version and theme come from a
/// [`HeaderContext`] provided higher up the tree (light theme and no
/// version when none is provided).
#[component]
pub fn Header(
    /// Current route path
    #[prop(into)]
    path: Signal<String>,
    /// Whether a collapse/expand affordance may appear at all
    #[prop(optional)]
    enable_collapsible_sidebar: bool,
    /// Current collapse state
    #[prop(optional, into)]
    collapse_sidebar: MaybeProp<bool>,
    /// Invoked when the collapse or expand affordance is activated
    #[prop(optional, into)]
    toggle_collapsible_sidebar: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_context::<HeaderContext>().unwrap_or_default();
    let max_display = use_context::<HeaderConfig>()
        .unwrap_or_default()
        .breadcrumbs
        .max_display;

    let dark_mode = ctx.dark_mode;
    let on_toggle = toggle_handler(toggle_collapsible_sidebar);

    let model = Memo::new(move |_| {
        let path = path.get();
        let state = HeaderState {
            enable_collapsible_sidebar,
            collapse_sidebar: collapse_sidebar.get().unwrap_or(false),
            on_toggle_collapse: on_toggle.clone(),
        };
        let trail = BreadcrumbTrail::from_path(&path).with_max_display(max_display);
        HeaderModel::build_with(&path, &state, &ctx, trail)
    });
    let trail = Signal::derive(move || model.with(|m| m.breadcrumbs.clone()));

    view! {
        <header class="layout-header">
            <div class="row w-100 gx-0">
                {move || {
                    let (section, toggle) = model.with(|m| (m.section.clone(), m.toggle.clone()));
                    let collapse = toggle.filter(|t| t.kind == ToggleKind::Collapse);
                    section.map(|section| {
                        view! {
                            <div class="tj-dashboard-section-header" data-name=section.label>
                                <div class="row">
                                    <div class="col-9">
                                        <p
                                            class="tj-text-md font-weight-500"
                                            data-cy="dashboard-section-header"
                                        >
                                            {section.label}
                                        </p>
                                    </div>
                                    {collapse
                                        .map(|toggle| {
                                            view! { <SidebarToggle toggle wrapper_class="col-3 px-3" /> }
                                        })}
                                </div>
                            </div>
                        }
                    })
                }}
                <div class="col tj-dashboard-header-wrap">
                    <div class="d-flex justify-content-sm-between">
                        {move || {
                            model
                                .with(|m| m.toggle.clone())
                                .filter(|t| t.kind == ToggleKind::Expand)
                                .map(|toggle| view! { <SidebarToggle toggle wrapper_class="pe-3" /> })
                        }}
                        <div class="app-header-label" data-cy="app-header-label">
                            <Breadcrumbs trail dark_mode />
                        </div>
                        <div
                            class=move || {
                                format!("ms-auto tj-version tj-text-xsm {}", model.with(|m| m.version_class))
                            }
                            data-cy="version-label"
                        >
                            {move || model.with(HeaderModel::version_label)}
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Wrap the caller's callback; no callback means a no-op toggle
fn toggle_handler(callback: Option<Callback<()>>) -> ToggleHandler {
    match callback {
        Some(callback) => ToggleHandler::new(move || callback.run(())),
        None => ToggleHandler::noop(),
    }
}

/// Click handler for a toggle button
fn toggle_callback(toggle: ToggleAffordance) -> Callback<()> {
    Callback::new(move |_: ()| toggle.activate())
}

/// Collapse or expand button wrapped in its tooltip
#[component]
fn SidebarToggle(toggle: ToggleAffordance, wrapper_class: &'static str) -> impl IntoView {
    let style = toggle.inline_style();
    let tooltip = toggle.tooltip;
    let icon = toggle.icon;
    let fill = toggle.icon_fill;
    let geometry = toggle.geometry;
    let on_click = toggle_callback(toggle);

    view! {
        <ToolTip message=tooltip placement="bottom">
            <div class=wrapper_class>
                <ButtonSolid
                    variant=geometry.variant
                    class="tj-text-xsm"
                    style=style
                    left_icon=icon
                    fill=fill
                    icon_width=geometry.icon_width
                    size=geometry.size
                    on_click=on_click
                />
            </div>
        </ToolTip>
    }
}
