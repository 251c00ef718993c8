//! Hover tooltip wrapper

use leptos::prelude::*;

/// Wraps its children with a tooltip message.
///
/// The message is exposed as `title` for native hover and as
/// `data-tooltip` for the stylesheet's positioned bubble.
#[component]
pub fn ToolTip(
    /// Tooltip text
    message: &'static str,
    /// Bubble placement ("top", "bottom", "left", "right")
    #[prop(default = "bottom")]
    placement: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("tj-tooltip tj-tooltip-{}", placement)
            title=message
            data-tooltip=message
        >
            {children()}
        </div>
    }
}
