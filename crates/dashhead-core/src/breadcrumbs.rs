//! Breadcrumb trail derived from the current route path

use crate::route::RouteLabel;
use serde::Serialize;

/// Label used for the truncation marker
pub const ELLIPSIS: &str = "...";

/// A single breadcrumb in the navigation path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display label
    pub label: String,
    /// Cumulative path up to and including this crumb; `None` for the ellipsis
    pub href: Option<String>,
    /// Nesting level (0 = first segment)
    pub level: usize,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            level: 0,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn is_ellipsis(&self) -> bool {
        self.href.is_none() && self.label == ELLIPSIS
    }
}

/// Breadcrumb navigation trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbTrail {
    path: Vec<Breadcrumb>,
    max_display: usize,
}

impl Default for BreadcrumbTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbTrail {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            max_display: 5,
        }
    }

    /// Set maximum display count before truncation
    pub fn with_max_display(mut self, max: usize) -> Self {
        self.max_display = max;
        self
    }

    /// Build the trail for a route path.
    ///
    /// Known segments use their section label; unknown segments are shown
    /// verbatim. Empty segments (`//`, trailing `/`) are skipped.
    pub fn from_path(route: &str) -> Self {
        let mut trail = Self::new();
        let mut href = String::new();
        for (level, segment) in route.split('/').filter(|s| !s.is_empty()).enumerate() {
            href.push('/');
            href.push_str(segment);
            let label = RouteLabel::lookup(segment)
                .map(|l| l.as_str().to_string())
                .unwrap_or_else(|| segment.to_string());
            trail
                .path
                .push(Breadcrumb::new(label).with_href(href.clone()).with_level(level));
        }
        trail
    }

    pub fn crumbs(&self) -> &[Breadcrumb] {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Crumbs to render, truncated when longer than `max_display`
    pub fn visible(&self) -> Vec<Breadcrumb> {
        if self.path.len() > self.max_display {
            self.truncate_path()
        } else {
            self.path.clone()
        }
    }

    /// Trail cut down to `max_display` crumbs.
    ///
    /// The current location is always kept. With room for three or more,
    /// shows "First > ... > <last max_display - 2>"; with room for two,
    /// "First > Last"; otherwise only the last crumb.
    fn truncate_path(&self) -> Vec<Breadcrumb> {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            return Vec::new();
        };

        match self.max_display {
            0 | 1 => vec![last.clone()],
            2 => vec![first.clone(), last.clone()],
            max => {
                let tail = max - 2;
                let mut result = Vec::with_capacity(max);
                result.push(first.clone());
                result.push(Breadcrumb::new(ELLIPSIS));
                // len > max, so the tail never reaches back to the first crumb
                result.extend(self.path[self.path.len() - tail..].iter().cloned());
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_from_path() {
        let trail = BreadcrumbTrail::from_path("/ws-42/data-sources");
        let crumbs = trail.crumbs();
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "ws-42");
        assert_eq!(crumbs[0].href.as_deref(), Some("/ws-42"));
        assert_eq!(crumbs[1].label, "Data sources");
        assert_eq!(crumbs[1].href.as_deref(), Some("/ws-42/data-sources"));
        assert_eq!(crumbs[1].level, 1);
    }

    #[test]
    fn test_empty_path_has_no_crumbs() {
        assert!(BreadcrumbTrail::from_path("/").is_empty());
        assert!(BreadcrumbTrail::from_path("").visible().is_empty());
    }

    #[test]
    fn test_trail_truncation() {
        let trail = BreadcrumbTrail::from_path("/a/b/c/d/e/f/settings").with_max_display(5);
        let visible = trail.visible();

        // Should have: a, ..., e, f, Profile settings
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].label, "a");
        assert!(visible[1].is_ellipsis());
        assert_eq!(visible[2].label, "e");
        assert_eq!(visible[3].label, "f");
        assert_eq!(visible[4].label, "Profile settings");
    }

    fn labels(route: &str, max: usize) -> Vec<String> {
        BreadcrumbTrail::from_path(route)
            .with_max_display(max)
            .visible()
            .into_iter()
            .map(|c| c.label)
            .collect()
    }

    #[test]
    fn test_small_limits_never_exceed_or_repeat() {
        assert_eq!(labels("/ws/settings", 0), vec!["Profile settings"]);
        assert_eq!(labels("/ws/settings", 1), vec!["Profile settings"]);
        assert_eq!(labels("/a/b/c/d", 2), vec!["a", "d"]);
        assert_eq!(labels("/a/b/c/d", 3), vec!["a", "...", "d"]);
        assert_eq!(labels("/a/b/c/d", 4), vec!["a", "b", "c", "d"]);

        for max in 0..=6 {
            let visible = labels("/a/b/c/d/e/f/g", max);
            assert!(visible.len() <= max.max(1), "max={max} got {visible:?}");
            assert_eq!(visible.last().map(String::as_str), Some("g"));
            let mut seen = visible.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), visible.len(), "max={max} got {visible:?}");
        }
    }

    #[test]
    fn test_trail_no_truncation_at_limit() {
        let trail = BreadcrumbTrail::from_path("/a/b/c/d/e").with_max_display(5);
        assert_eq!(trail.visible().len(), 5);
        assert!(trail.visible().iter().all(|c| !c.is_ellipsis()));
    }
}
