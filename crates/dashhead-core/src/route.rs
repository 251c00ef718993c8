//! Route segment to section label lookup
//!
//! The header title is derived from the final `/`-delimited segment of the
//! current route. Known segments map to fixed labels; every other segment,
//! including the empty one, resolves to [`RouteLabel::DEFAULT`].

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Section shown in the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteLabel {
    Applications,
    Database,
    WorkspaceSettings,
    DataSources,
    ProfileSettings,
    Integrations,
    WorkspaceConstants,
}

/// Known route segments in display order
const ROUTE_SEGMENTS: &[(&str, RouteLabel)] = &[
    ("workspaceId", RouteLabel::Applications),
    ("database", RouteLabel::Database),
    ("workspace-settings", RouteLabel::WorkspaceSettings),
    ("data-sources", RouteLabel::DataSources),
    ("settings", RouteLabel::ProfileSettings),
    ("integrations", RouteLabel::Integrations),
    ("workspace-constants", RouteLabel::WorkspaceConstants),
];

static ROUTE_TABLE: Lazy<HashMap<&'static str, RouteLabel>> =
    Lazy::new(|| ROUTE_SEGMENTS.iter().copied().collect());

impl RouteLabel {
    /// Label used for any segment missing from the table
    pub const DEFAULT: RouteLabel = RouteLabel::Applications;

    /// Human-readable section title
    pub fn as_str(self) -> &'static str {
        match self {
            RouteLabel::Applications => "Applications",
            RouteLabel::Database => "Database",
            RouteLabel::WorkspaceSettings => "Workspace settings",
            RouteLabel::DataSources => "Data sources",
            RouteLabel::ProfileSettings => "Profile settings",
            RouteLabel::Integrations => "Integrations",
            RouteLabel::WorkspaceConstants => "Workspace constants",
        }
    }

    /// Look up a single segment. Exact, case-sensitive match.
    pub fn lookup(segment: &str) -> Option<RouteLabel> {
        ROUTE_TABLE.get(segment).copied()
    }

    /// Total lookup: unknown segments fall back to [`RouteLabel::DEFAULT`]
    pub fn from_segment(segment: &str) -> RouteLabel {
        Self::lookup(segment).unwrap_or(Self::DEFAULT)
    }

    /// Resolve the label for a full route path
    pub fn from_path(path: &str) -> RouteLabel {
        Self::from_segment(last_segment(path))
    }

    /// The static segment table, in display order
    pub fn table() -> &'static [(&'static str, RouteLabel)] {
        ROUTE_SEGMENTS
    }
}

impl std::fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final `/`-delimited token of a path.
///
/// A trailing slash yields the empty segment, as does the empty path.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Label text for a route path
pub fn resolve_label(path: &str) -> &'static str {
    RouteLabel::from_path(path).as_str()
}
