//! dashhead-web - Leptos header components for dashhead
//!
//! The browser app mounts [`App`]; with the `ssr` feature the header can
//! also be rendered to HTML and served by a small Axum preview server.

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod storage;

#[cfg(feature = "ssr")]
pub mod render;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use storage::BrowserStorage;

#[cfg(feature = "ssr")]
pub use render::{render_header_html, render_page, RenderOptions};
#[cfg(feature = "ssr")]
pub use router::{create_router, PreviewState};

/// Run the preview server
#[cfg(feature = "ssr")]
pub async fn run(state: std::sync::Arc<PreviewState>, port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Preview server listening on http://{}", addr);
    println!("Preview server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
