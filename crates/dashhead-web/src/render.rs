//! Server-side rendering of the header to an HTML string

use dashhead_core::{HeaderConfig, HeaderContext, RouteLabel};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::Header;

/// Flags the caller would normally pass as props
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub collapsible: bool,
    pub collapsed: bool,
}

/// Render the header markup for `path`
pub fn render_header_html(
    path: &str,
    options: RenderOptions,
    ctx: &HeaderContext,
    config: &HeaderConfig,
) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ctx.clone());
        provide_context(config.clone());

        let path = path.to_string();
        view! {
            <Header
                path=Signal::derive(move || path.clone())
                enable_collapsible_sidebar=options.collapsible
                collapse_sidebar=options.collapsed
            />
        }
        .to_html()
    })
}

/// Render a standalone HTML page around the header
pub fn render_page(
    path: &str,
    options: RenderOptions,
    ctx: &HeaderContext,
    config: &HeaderConfig,
) -> String {
    let header = render_header_html(path, options, ctx, config);
    let body_class = if ctx.dark_mode { "theme-dark" } else { "theme-light" };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - dashhead preview</title>
</head>
<body class="{body_class}">
{header}
</body>
</html>"#,
        title = RouteLabel::from_path(path),
    )
}
