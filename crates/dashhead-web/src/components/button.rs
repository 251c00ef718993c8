//! Solid button with an optional inline SVG icon

use leptos::prelude::*;

/// Path data for the icons the header uses
fn icon_path(name: &str) -> Option<&'static str> {
    match name {
        "cheveronleftdouble" => Some("M11 17l-5-5 5-5M18 17l-5-5 5-5"),
        "cheveronrightdouble" => Some("M13 17l5-5-5-5M6 17l5-5-5-5"),
        _ => None,
    }
}

/// Inline stroke icon; unknown names render nothing
#[component]
pub fn Icon(
    name: &'static str,
    #[prop(default = "currentColor")] fill: &'static str,
    #[prop(default = 16)] width: u32,
) -> impl IntoView {
    let size = width.to_string();
    icon_path(name).map(|d| {
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size.clone()
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke=fill
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                data-icon=name
            >
                <path d=d />
            </svg>
        }
    })
}

/// Solid button
#[component]
pub fn ButtonSolid(
    /// Visual variant (e.g., "primary")
    #[prop(default = "primary")]
    variant: &'static str,
    /// Extra CSS classes
    #[prop(optional, into)]
    class: String,
    /// Inline style
    #[prop(optional, into)]
    style: String,
    /// Icon drawn before the label
    #[prop(optional)]
    left_icon: Option<&'static str>,
    #[prop(default = "currentColor")] fill: &'static str,
    #[prop(default = 16)] icon_width: u32,
    #[prop(default = "md")] size: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("btn btn-{} btn-{} {}", variant, size, class)
            style=style
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {left_icon.map(|name| view! { <Icon name fill width=icon_width /> })}
            {children.map(|c| c())}
        </button>
    }
}
