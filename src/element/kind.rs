//! The closed set of layout-primitive element kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::template::{self, TemplateFn};

/// A layout-primitive element kind.
///
/// Each kind owns exactly one style-template function and one configuration
/// shape (see [`ElementConfig`]). The lowercase name doubles as the middle
/// segment of every signature key, so no two kinds can ever share a
/// registry entry.
///
/// [`ElementConfig`]: super::ElementConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Padded, optionally bordered container.
    Box,
    /// Vertical flow with consistent inter-child spacing.
    Stack,
    /// Horizontally grouped items that wrap.
    Cluster,
    /// Responsive grid of minimum-width tracks.
    Grid,
    /// Horizontally centered column with a max measure.
    Center,
    /// Full-height region with a vertically centered principal child.
    Cover,
    /// Fixed-aspect-ratio media frame.
    Frame,
    /// Sidebar-plus-content pair that collapses when narrow.
    Sidebar,
    /// Side-by-side children that switch to vertical under a threshold.
    Switcher,
    /// Inline icon sized and spaced relative to surrounding text.
    Icon,
    /// Horizontally scrolling strip.
    Reel,
    /// Element superimposed over its positioning container.
    Imposter,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 12] = [
        ElementKind::Box,
        ElementKind::Stack,
        ElementKind::Cluster,
        ElementKind::Grid,
        ElementKind::Center,
        ElementKind::Cover,
        ElementKind::Frame,
        ElementKind::Sidebar,
        ElementKind::Switcher,
        ElementKind::Icon,
        ElementKind::Reel,
        ElementKind::Imposter,
    ];

    /// The lowercase name used in signature keys and selectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Box => "box",
            ElementKind::Stack => "stack",
            ElementKind::Cluster => "cluster",
            ElementKind::Grid => "grid",
            ElementKind::Center => "center",
            ElementKind::Cover => "cover",
            ElementKind::Frame => "frame",
            ElementKind::Sidebar => "sidebar",
            ElementKind::Switcher => "switcher",
            ElementKind::Icon => "icon",
            ElementKind::Reel => "reel",
            ElementKind::Imposter => "imposter",
        }
    }

    /// The style-template function owned by this kind.
    pub fn template(self) -> TemplateFn {
        match self {
            ElementKind::Box => template::box_style,
            ElementKind::Stack => template::stack_style,
            ElementKind::Cluster => template::cluster_style,
            ElementKind::Grid => template::grid_style,
            ElementKind::Center => template::center_style,
            ElementKind::Cover => template::cover_style,
            ElementKind::Frame => template::frame_style,
            ElementKind::Sidebar => template::sidebar_style,
            ElementKind::Switcher => template::switcher_style,
            ElementKind::Icon => template::icon_style,
            ElementKind::Reel => template::reel_style,
            ElementKind::Imposter => template::imposter_style,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_unique() {
        let mut names: Vec<&str> = ElementKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ElementKind::ALL.len());
    }

    #[test]
    fn test_kind_display_matches_as_str() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&ElementKind::Sidebar).unwrap();
        assert_eq!(json, r#""sidebar""#);
        let back: ElementKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ElementKind::Sidebar);
    }
}
