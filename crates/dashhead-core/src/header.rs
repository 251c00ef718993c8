//! Header view model
//!
//! [`HeaderModel::build`] is the whole header contract as a pure function of
//! the route path, the caller's props and the ambient [`HeaderContext`]. The
//! Leptos component and the CLI renderers both draw from this model.

use crate::breadcrumbs::BreadcrumbTrail;
use crate::context::HeaderContext;
use crate::route::RouteLabel;
use crate::theme::{ColorScheme, HeaderPalette, ToggleGeometry, TOGGLE_GEOMETRY};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Caller-supplied sidebar toggle callback
#[derive(Clone)]
pub struct ToggleHandler(Arc<dyn Fn() + Send + Sync>);

impl ToggleHandler {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl Default for ToggleHandler {
    fn default() -> Self {
        Self::noop()
    }
}

/// Handlers are equal when they share the same closure
impl PartialEq for ToggleHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ToggleHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToggleHandler")
    }
}

/// Public configuration surface of the header
#[derive(Debug, Clone, Default)]
pub struct HeaderProps {
    /// Whether a collapse/expand affordance may appear at all
    pub enable_collapsible_sidebar: bool,
    /// Current collapse state, owned by the caller
    pub collapse_sidebar: bool,
    /// Invoked when either affordance is activated
    pub on_toggle_collapse: ToggleHandler,
}

impl HeaderProps {
    pub fn collapsible(mut self, enabled: bool) -> Self {
        self.enable_collapsible_sidebar = enabled;
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapse_sidebar = collapsed;
        self
    }

    pub fn on_toggle(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_toggle_collapse = ToggleHandler::new(f);
        self
    }
}

/// Which way the sidebar toggle points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleKind {
    /// Shown while expanded; hides the sidebar
    Collapse,
    /// Shown while collapsed; reopens the sidebar
    Expand,
}

impl ToggleKind {
    pub fn tooltip(self) -> &'static str {
        match self {
            ToggleKind::Collapse => "Collapse sidebar",
            ToggleKind::Expand => "Open sidebar",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToggleKind::Collapse => "cheveronleftdouble",
            ToggleKind::Expand => "cheveronrightdouble",
        }
    }
}

/// Sidebar collapse/expand button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleAffordance {
    pub kind: ToggleKind,
    pub tooltip: &'static str,
    pub icon: &'static str,
    pub border_color: &'static str,
    pub icon_fill: &'static str,
    pub geometry: ToggleGeometry,
    #[serde(skip)]
    handler: ToggleHandler,
}

impl ToggleAffordance {
    fn new(kind: ToggleKind, palette: HeaderPalette, handler: ToggleHandler) -> Self {
        Self {
            kind,
            tooltip: kind.tooltip(),
            icon: kind.icon(),
            border_color: palette.toggle_border,
            icon_fill: palette.toggle_icon_fill,
            geometry: TOGGLE_GEOMETRY,
            handler,
        }
    }

    /// User activation: forwards to the caller's callback once
    pub fn activate(&self) {
        debug!(kind = ?self.kind, "Sidebar toggle activated");
        self.handler.call();
    }

    pub fn inline_style(&self) -> String {
        self.geometry.inline_style(self.border_color)
    }
}

/// Title block shown while the sidebar is expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub route: RouteLabel,
    pub label: &'static str,
}

/// Everything the header renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderModel {
    /// `None` while the sidebar is collapsed
    pub section: Option<SectionHeader>,
    /// Collapse affordance sits inside the section header, expand beside the breadcrumbs
    pub toggle: Option<ToggleAffordance>,
    pub breadcrumbs: BreadcrumbTrail,
    pub dark_mode: bool,
    pub scheme: ColorScheme,
    /// Raw stored version; `None` when never written
    pub version: Option<String>,
    pub version_class: &'static str,
}

impl HeaderModel {
    pub fn build(path: &str, props: &HeaderProps, ctx: &HeaderContext) -> Self {
        Self::build_with(path, props, ctx, BreadcrumbTrail::from_path(path))
    }

    /// Build with a pre-configured breadcrumb trail
    pub fn build_with(
        path: &str,
        props: &HeaderProps,
        ctx: &HeaderContext,
        breadcrumbs: BreadcrumbTrail,
    ) -> Self {
        let route = RouteLabel::from_path(path);
        let scheme = ctx.color_scheme();
        let palette = scheme.palette();

        let section = (!props.collapse_sidebar).then(|| SectionHeader {
            route,
            label: route.as_str(),
        });

        let toggle = props.enable_collapsible_sidebar.then(|| {
            let kind = if props.collapse_sidebar {
                ToggleKind::Expand
            } else {
                ToggleKind::Collapse
            };
            ToggleAffordance::new(kind, palette, props.on_toggle_collapse.clone())
        });

        debug!(
            path,
            label = route.as_str(),
            collapsed = props.collapse_sidebar,
            collapsible = props.enable_collapsible_sidebar,
            "Built header model"
        );

        Self {
            section,
            toggle,
            breadcrumbs,
            dark_mode: ctx.dark_mode,
            scheme,
            version: ctx.version.clone(),
            version_class: palette.version_class,
        }
    }

    /// Section title, present only while expanded
    pub fn title(&self) -> Option<&'static str> {
        self.section.as_ref().map(|s| s.label)
    }

    /// `Version <value>`; an unset value leaves nothing after the prefix
    pub fn version_label(&self) -> String {
        version_label(self.version.as_deref())
    }

    /// Plain-text rendering, one region per line
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(title) = self.title() {
            lines.push(format!("[{}]", title));
        }
        if let Some(toggle) = &self.toggle {
            let arrow = match toggle.kind {
                ToggleKind::Collapse => "«",
                ToggleKind::Expand => "»",
            };
            lines.push(format!("{} {}", arrow, toggle.tooltip));
        }
        let trail = self
            .breadcrumbs
            .visible()
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>()
            .join(" > ");
        lines.push(trail);
        lines.push(self.version_label());
        lines.join("\n")
    }
}

pub fn version_label(version: Option<&str>) -> String {
    format!("Version {}", version.unwrap_or_default())
}
