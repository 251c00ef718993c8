//! Server-side rendering of the header component

use dashhead_core::{HeaderConfig, HeaderContext};
use dashhead_web::{render_header_html, render_page, RenderOptions};

fn render(path: &str, options: RenderOptions, ctx: &HeaderContext) -> String {
    render_header_html(path, options, ctx, &HeaderConfig::default())
}

#[test]
fn test_known_route_renders_label() {
    let html = render("/app/workspace-constants", RenderOptions::default(), &HeaderContext::default());

    assert!(html.contains(r#"data-cy="dashboard-section-header""#));
    assert!(html.contains(r#"data-name="Workspace constants""#));
    assert!(html.contains("Workspace constants"));
}

#[test]
fn test_unknown_route_renders_default_label() {
    let html = render("/x/unknown-slug", RenderOptions::default(), &HeaderContext::default());
    assert!(html.contains(r#"data-name="Applications""#));
}

#[test]
fn test_collapsed_omits_section_header() {
    let options = RenderOptions {
        collapsible: false,
        collapsed: true,
    };
    let html = render("/app/database", options, &HeaderContext::default());

    assert!(!html.contains("dashboard-section-header"));
    // Breadcrumbs and version are always present
    assert!(html.contains(r#"data-cy="app-header-label""#));
    assert!(html.contains(r#"data-cy="version-label""#));
}

#[test]
fn test_collapse_affordance_when_expanded() {
    let options = RenderOptions {
        collapsible: true,
        collapsed: false,
    };
    let html = render("/app/database", options, &HeaderContext::default());

    assert!(html.contains("Collapse sidebar"));
    assert!(html.contains(r#"data-icon="cheveronleftdouble""#));
    assert!(!html.contains("Open sidebar"));
}

#[test]
fn test_expand_affordance_when_collapsed() {
    let options = RenderOptions {
        collapsible: true,
        collapsed: true,
    };
    let html = render("/app/database", options, &HeaderContext::default());

    assert!(html.contains("Open sidebar"));
    assert!(html.contains(r#"data-icon="cheveronrightdouble""#));
    assert!(!html.contains("Collapse sidebar"));
}

#[test]
fn test_no_affordance_when_not_collapsible() {
    for collapsed in [false, true] {
        let options = RenderOptions {
            collapsible: false,
            collapsed,
        };
        let html = render("/app/database", options, &HeaderContext::default());
        assert!(!html.contains("data-icon="), "collapsed={collapsed}");
        assert!(!html.contains("data-tooltip="), "collapsed={collapsed}");
    }
}

#[test]
fn test_version_and_theme() {
    let dark = HeaderContext::new(Some("2.4.1".to_string()), true);
    let html = render("/app/settings", RenderOptions::default(), &dark);
    assert!(html.contains("Version 2.4.1"));
    assert!(html.contains("color-muted-darkmode"));
    assert!(html.contains("tj-breadcrumb-dark"));

    let light = render("/app/settings", RenderOptions::default(), &HeaderContext::default());
    assert!(light.contains("color-disabled"));
    assert!(!light.contains("color-muted-darkmode"));
}

#[test]
fn test_dark_toggle_colors() {
    let options = RenderOptions {
        collapsible: true,
        collapsed: false,
    };
    let dark = render("/", options, &HeaderContext::new(None, true));
    assert!(dark.contains("border-color: #ecedee;"));

    let light = render("/", options, &HeaderContext::default());
    assert!(light.contains("border-color: #AEC0F5;"));
    assert!(light.contains(r##"stroke="#3E63DD""##));
}

#[test]
fn test_breadcrumbs_render_segments() {
    let html = render("/ws-7/data-sources", RenderOptions::default(), &HeaderContext::default());
    assert!(html.contains(r#"href="/ws-7""#));
    assert!(html.contains("Data sources"));
}

#[test]
fn test_breadcrumbs_follow_configured_limit() {
    let mut config = HeaderConfig::default();
    config.breadcrumbs.max_display = 3;
    let html = render_header_html(
        "/a/b/c/d/workspace-settings",
        RenderOptions::default(),
        &HeaderContext::default(),
        &config,
    );

    assert_eq!(html.matches("breadcrumb-item").count(), 3);
    assert!(html.contains(r#"href="/a""#));
    assert!(html.contains("..."));
    assert!(!html.contains(r#"href="/a/b/c/d""#));
    assert!(html.contains("Workspace settings"));
}

#[test]
fn test_page_wraps_header() {
    let html = render_page(
        "/app/integrations",
        RenderOptions::default(),
        &HeaderContext::default(),
        &HeaderConfig::default(),
    );
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Integrations - dashhead preview</title>"));
    assert!(html.contains(r#"class="layout-header""#));
}
