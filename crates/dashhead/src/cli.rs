//! CLI helpers: ambient context loading and output formatting

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use dashhead_core::{
    BreadcrumbTrail, HeaderConfig, HeaderContext, HeaderModel, HeaderProps, JsonFileStore,
    RouteLabel,
};
use dashhead_web::RenderOptions;
use std::path::Path;

// ============================================================================
// Context
// ============================================================================

/// Explicit overrides from the command line
#[derive(Debug, Default)]
pub struct ContextOverrides {
    pub version: Option<String>,
    pub dark_mode: bool,
}

/// Read the ambient header values.
///
/// An explicitly named store must be readable; the default location
/// degrades to an empty store.
pub fn load_context(
    store: Option<&Path>,
    config: &HeaderConfig,
    overrides: ContextOverrides,
) -> Result<HeaderContext> {
    let store = match store {
        Some(path) => JsonFileStore::open(path)
            .with_context(|| format!("Failed to load storage file {}", path.display()))?,
        None => match JsonFileStore::default_path() {
            Some(path) => JsonFileStore::open_or_empty(path),
            None => JsonFileStore::default(),
        },
    };

    let mut ctx = HeaderContext::from_store(&store, &config.storage);
    if let Some(version) = overrides.version {
        ctx.version = Some(version);
    }
    if overrides.dark_mode {
        ctx.dark_mode = true;
    }
    Ok(ctx)
}

// ============================================================================
// Formatters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

/// Render the header for `path` in the requested format
pub fn format_header(
    path: &str,
    options: RenderOptions,
    ctx: &HeaderContext,
    config: &HeaderConfig,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(dashhead_web::render_header_html(path, options, ctx, config)),
        OutputFormat::Text | OutputFormat::Json => {
            let props = HeaderProps::default()
                .collapsible(options.collapsible)
                .collapsed(options.collapsed);
            let trail = BreadcrumbTrail::from_path(path)
                .with_max_display(config.breadcrumbs.max_display);
            let model = HeaderModel::build_with(path, &props, ctx, trail);
            if format == OutputFormat::Text {
                Ok(model.to_text())
            } else {
                serde_json::to_string_pretty(&model).context("Failed to serialize header")
            }
        }
    }
}

/// Format the route label table (human) or JSON
pub fn format_labels(json: bool, no_color: bool) -> Result<String> {
    if json {
        let rows: Vec<_> = RouteLabel::table()
            .iter()
            .map(|(segment, label)| serde_json::json!({ "segment": segment, "label": label.as_str() }))
            .collect();
        return serde_json::to_string_pretty(&serde_json::json!({
            "labels": rows,
            "default": RouteLabel::DEFAULT.as_str(),
        }))
        .context("Failed to serialize route labels");
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Segment", "Label"]);
    } else {
        table.set_header(vec![
            Cell::new("Segment").fg(Color::Cyan),
            Cell::new("Label").fg(Color::Cyan),
        ]);
    }

    for (segment, label) in RouteLabel::table() {
        table.add_row(vec![*segment, label.as_str()]);
    }
    table.add_row(vec!["(anything else)", RouteLabel::DEFAULT.as_str()]);

    Ok(table.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_labels_table() {
        let output = format_labels(false, true).unwrap();
        assert!(output.contains("workspace-constants"));
        assert!(output.contains("Workspace constants"));
        assert!(output.contains("(anything else)"));
    }

    #[test]
    fn test_format_labels_json() {
        let output = format_labels(true, false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["default"], "Applications");
        assert_eq!(json["labels"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_format_header_text() {
        let ctx = HeaderContext::new(Some("2.4.1".to_string()), false);
        let output = format_header(
            "/app/workspace-constants",
            RenderOptions::default(),
            &ctx,
            &HeaderConfig::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert!(output.starts_with("[Workspace constants]"));
        assert!(output.ends_with("Version 2.4.1"));
    }

    #[test]
    fn test_format_header_json_collapsed() {
        let options = RenderOptions {
            collapsible: true,
            collapsed: true,
        };
        let output = format_header(
            "/x/unknown-slug",
            options,
            &HeaderContext::default(),
            &HeaderConfig::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(json["section"].is_null());
        assert_eq!(json["toggle"]["kind"], "expand");
        assert!(json["version"].is_null());
    }

    #[test]
    fn test_load_context_overrides() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("storage.json");
        std::fs::write(&store, r#"{"currentVersion": "1.0.0", "darkMode": "false"}"#).unwrap();

        let ctx = load_context(Some(&store), &HeaderConfig::default(), ContextOverrides::default())
            .unwrap();
        assert_eq!(ctx.version.as_deref(), Some("1.0.0"));
        assert!(!ctx.dark_mode);

        let overrides = ContextOverrides {
            version: Some("9.9.9".to_string()),
            dark_mode: true,
        };
        let ctx = load_context(Some(&store), &HeaderConfig::default(), overrides).unwrap();
        assert_eq!(ctx.version.as_deref(), Some("9.9.9"));
        assert!(ctx.dark_mode);
    }

    #[test]
    fn test_load_context_bad_explicit_store() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("storage.json");
        std::fs::write(&store, "[1, 2]").unwrap();

        let err = load_context(Some(&store), &HeaderConfig::default(), ContextOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load storage file"));
    }
}
