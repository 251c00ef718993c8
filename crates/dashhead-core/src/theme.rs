//! Header palette for the dark and light color schemes
//!
//! Styling is cosmetic only; the one behavioral difference between schemes
//! lives in [`ToggleKind`](crate::header::ToggleKind), not here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light theme (default when nothing is stored)
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn palette(self) -> HeaderPalette {
        match self {
            ColorScheme::Dark => HeaderPalette {
                toggle_border: "#ecedee",
                toggle_icon_fill: "#ecedee",
                version_class: "color-muted-darkmode",
            },
            ColorScheme::Light => HeaderPalette {
                toggle_border: "#AEC0F5",
                toggle_icon_fill: "#3E63DD",
                version_class: "color-disabled",
            },
        }
    }
}

/// Colors and classes that vary with the scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderPalette {
    pub toggle_border: &'static str,
    pub toggle_icon_fill: &'static str,
    pub version_class: &'static str,
}

/// Fixed geometry of the sidebar toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub radius_px: u32,
    pub icon_width: u32,
    pub size: &'static str,
    pub variant: &'static str,
    pub background: &'static str,
}

pub const TOGGLE_GEOMETRY: ToggleGeometry = ToggleGeometry {
    width_px: 28,
    height_px: 23,
    radius_px: 6,
    icon_width: 14,
    size: "md",
    variant: "primary",
    background: "var(--indigo3)",
};

impl ToggleGeometry {
    /// Inline style for a toggle drawn with the given border color
    pub fn inline_style(&self, border: &str) -> String {
        format!(
            "min-width: {w}px; width: {w}px; height: {h}px; border-radius: {r}px; \
             display: flex; justify-content: center; cursor: pointer; \
             background: {bg}; border-color: {border};",
            w = self.width_px,
            h = self.height_px,
            r = self.radius_px,
            bg = self.background,
        )
    }
}
