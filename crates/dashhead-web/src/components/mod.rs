//! Leptos UI components

mod breadcrumbs;
mod button;
mod header;
mod sidebar;
mod tooltip;

pub use breadcrumbs::Breadcrumbs;
pub use button::{ButtonSolid, Icon};
pub use header::Header;
pub use sidebar::Sidebar;
pub use tooltip::ToolTip;
