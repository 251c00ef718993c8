//! dashhead - Dashboard header renderer

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cli::{ContextOverrides, OutputFormat};
use dashhead_core::HeaderConfig;
use dashhead_web::{PreviewState, RenderOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dashhead",
    version,
    about = "Dashboard header renderer",
    long_about = "Renders the dashboard header (section title, sidebar toggle, breadcrumbs,\n\
                  version label) for a route path.\n\
                  \n\
                  Examples:\n\
                    dashhead render /app/workspace-constants        # HTML for a route\n\
                    dashhead render /app/database --format text     # Plain-text summary\n\
                    dashhead render / --collapsible --collapsed     # Expand affordance\n\
                    dashhead labels                                  # Route label table\n\
                    dashhead serve --port 3333                       # Preview server\n\
                  \n\
                  Environment Variables:\n\
                    DASHHEAD_CONFIG                  # TOML config file\n\
                    DASHHEAD_STORE                   # JSON storage file (currentVersion, darkMode)\n\
                    DASHHEAD_NO_COLOR                # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: warn)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// TOML configuration file
    #[arg(long, global = true, env = "DASHHEAD_CONFIG")]
    config: Option<PathBuf>,

    /// JSON storage file (default: <config dir>/dashhead/storage.json)
    #[arg(long, global = true, env = "DASHHEAD_STORE")]
    store: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "DASHHEAD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Render the header for a route path
    Render {
        /// Route path (e.g. /app/workspace-constants)
        path: String,
        /// Allow the collapse/expand affordance
        #[arg(long)]
        collapsible: bool,
        /// Render with the sidebar collapsed
        #[arg(long)]
        collapsed: bool,
        /// Override the stored version
        #[arg(long = "app-version")]
        app_version: Option<String>,
        /// Force dark mode
        #[arg(long)]
        dark_mode: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: OutputFormat,
    },
    /// Print the route label table
    Labels {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the preview server
    Serve {
        /// Port for the preview server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => HeaderConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => HeaderConfig::default(),
    };

    match cli.mode {
        Mode::Render {
            path,
            collapsible,
            collapsed,
            app_version,
            dark_mode,
            format,
        } => {
            let overrides = ContextOverrides {
                version: app_version,
                dark_mode,
            };
            let ctx = cli::load_context(cli.store.as_deref(), &config, overrides)?;
            let options = RenderOptions {
                collapsible,
                collapsed,
            };
            println!("{}", cli::format_header(&path, options, &ctx, &config, format)?);
        }
        Mode::Labels { json } => {
            println!("{}", cli::format_labels(json, cli.no_color)?);
        }
        Mode::Serve { port } => {
            let context = cli::load_context(cli.store.as_deref(), &config, ContextOverrides::default())?;
            let state = Arc::new(PreviewState { context, config });
            dashhead_web::run(state, port).await?;
        }
    }

    Ok(())
}
