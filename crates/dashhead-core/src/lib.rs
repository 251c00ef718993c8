//! dashhead-core - Core library for dashhead
//!
//! Provides the route label table, read-only ambient storage, and the pure
//! header view model shared by the web components and the CLI.

pub mod breadcrumbs;
pub mod config;
pub mod context;
pub mod error;
pub mod header;
pub mod route;
pub mod storage;
pub mod theme;

pub use breadcrumbs::{Breadcrumb, BreadcrumbTrail};
pub use config::HeaderConfig;
pub use context::HeaderContext;
pub use error::CoreError;
pub use header::{HeaderModel, HeaderProps, ToggleHandler, ToggleKind};
pub use route::{resolve_label, RouteLabel};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use theme::ColorScheme;
