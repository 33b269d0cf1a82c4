//! Typed per-kind configuration shapes.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigRecord, ConfigValue};
use crate::sanitize::sanitize;

use super::kind::ElementKind;

/// The configuration of one element instance, one variant per kind.
///
/// Each variant carries exactly the fields its kind's template may read,
/// so a template cannot depend on a key its kind never declares. Optional
/// fields lower to [`ConfigValue::Null`] rather than disappearing, which
/// keeps every instance of a kind on the same key set.
///
/// Lowering to a [`ConfigRecord`] via [`record`] passes every string field
/// through the sanitizer; numbers and booleans pass through unchanged.
///
/// Record keys use the caller-facing camelCase names (`borderWidth`,
/// `splitAfter`, ...), since those are what callers supply and what the
/// canonical form is defined over.
///
/// [`record`]: ElementConfig::record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ElementConfig {
    /// Padded container.
    Box {
        /// Padding on all sides, e.g. `var(--s1)`.
        padding: Option<String>,
        /// Border width; `None` means no border rule is emitted.
        border_width: Option<String>,
        /// Swap foreground/background for emphasis.
        invert: bool,
    },
    /// Vertical flow.
    Stack {
        /// Space between adjacent children.
        space: Option<String>,
        /// Apply the spacing to nested descendants, not just children.
        recursive: bool,
        /// Push children after this index to the far end.
        split_after: Option<u32>,
    },
    /// Wrapping horizontal group.
    Cluster {
        justify: Option<String>,
        align: Option<String>,
        space: Option<String>,
    },
    /// Responsive grid.
    Grid {
        /// Minimum track width before the grid drops a column.
        min: Option<String>,
        space: Option<String>,
    },
    /// Centered column.
    Center {
        /// Maximum measure of the centered content.
        max: Option<String>,
        /// Also center text.
        and_text: bool,
        gutters: Option<String>,
        /// Center based on content width instead of measure.
        intrinsic: bool,
    },
    /// Cover region.
    Cover {
        /// Selector fragment for the principal, vertically centered child.
        centered: Option<String>,
        space: Option<String>,
        min_height: Option<String>,
        /// Suppress the padding that `space` would otherwise add.
        no_pad: bool,
    },
    /// Aspect-ratio frame.
    Frame {
        /// Width/height ratio, e.g. `16/9`.
        ratio: Option<String>,
    },
    /// Sidebar layout.
    Sidebar {
        /// Which side the sidebar sits on: `left` or `right`.
        side: Option<String>,
        /// Fixed width of the sidebar when horizontal.
        side_width: Option<String>,
        /// Minimum width of the content pane, as a percentage.
        content_min: Option<String>,
        space: Option<String>,
        /// Keep the sidebar at its intrinsic height.
        no_stretch: bool,
    },
    /// Threshold switcher.
    Switcher {
        /// Container width under which children stack vertically.
        threshold: Option<String>,
        space: Option<String>,
        /// Maximum number of side-by-side children.
        limit: Option<u32>,
    },
    /// Inline icon.
    Icon {
        /// Space between the icon and adjacent text.
        space: Option<String>,
        /// Accessible label; presence switches the role styling.
        label: Option<String>,
    },
    /// Scrolling strip.
    Reel {
        item_width: Option<String>,
        space: Option<String>,
        height: Option<String>,
        /// Hide the scrollbar.
        no_bar: bool,
    },
    /// Superimposed element.
    Imposter {
        /// Allow the element to break out of its container's bounds.
        breakout: bool,
        /// Minimum space to the container edge when contained.
        margin: Option<String>,
        /// Position over the viewport instead of the container.
        fixed: bool,
    },
}

impl ElementConfig {
    /// The element kind this configuration belongs to.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementConfig::Box { .. } => ElementKind::Box,
            ElementConfig::Stack { .. } => ElementKind::Stack,
            ElementConfig::Cluster { .. } => ElementKind::Cluster,
            ElementConfig::Grid { .. } => ElementKind::Grid,
            ElementConfig::Center { .. } => ElementKind::Center,
            ElementConfig::Cover { .. } => ElementKind::Cover,
            ElementConfig::Frame { .. } => ElementKind::Frame,
            ElementConfig::Sidebar { .. } => ElementKind::Sidebar,
            ElementConfig::Switcher { .. } => ElementKind::Switcher,
            ElementConfig::Icon { .. } => ElementKind::Icon,
            ElementConfig::Reel { .. } => ElementKind::Reel,
            ElementConfig::Imposter { .. } => ElementKind::Imposter,
        }
    }

    /// Lowers the typed configuration to a flat, sanitized record.
    ///
    /// This is the step that neutralizes caller-supplied strings: every
    /// string field is run through [`sanitize`] before it can reach a
    /// canonical form or a template.
    pub fn record(&self) -> ConfigRecord {
        match self {
            ElementConfig::Box {
                padding,
                border_width,
                invert,
            } => ConfigRecord::new()
                .set("padding", text(padding))
                .set("borderWidth", text(border_width))
                .set("invert", *invert),
            ElementConfig::Stack {
                space,
                recursive,
                split_after,
            } => ConfigRecord::new()
                .set("space", text(space))
                .set("recursive", *recursive)
                .set("splitAfter", ConfigValue::from(*split_after)),
            ElementConfig::Cluster {
                justify,
                align,
                space,
            } => ConfigRecord::new()
                .set("justify", text(justify))
                .set("align", text(align))
                .set("space", text(space)),
            ElementConfig::Grid { min, space } => ConfigRecord::new()
                .set("min", text(min))
                .set("space", text(space)),
            ElementConfig::Center {
                max,
                and_text,
                gutters,
                intrinsic,
            } => ConfigRecord::new()
                .set("max", text(max))
                .set("andText", *and_text)
                .set("gutters", text(gutters))
                .set("intrinsic", *intrinsic),
            ElementConfig::Cover {
                centered,
                space,
                min_height,
                no_pad,
            } => ConfigRecord::new()
                .set("centered", text(centered))
                .set("space", text(space))
                .set("minHeight", text(min_height))
                .set("noPad", *no_pad),
            ElementConfig::Frame { ratio } => ConfigRecord::new().set("ratio", text(ratio)),
            ElementConfig::Sidebar {
                side,
                side_width,
                content_min,
                space,
                no_stretch,
            } => ConfigRecord::new()
                .set("side", text(side))
                .set("sideWidth", text(side_width))
                .set("contentMin", text(content_min))
                .set("space", text(space))
                .set("noStretch", *no_stretch),
            ElementConfig::Switcher {
                threshold,
                space,
                limit,
            } => ConfigRecord::new()
                .set("threshold", text(threshold))
                .set("space", text(space))
                .set("limit", ConfigValue::from(*limit)),
            ElementConfig::Icon { space, label } => ConfigRecord::new()
                .set("space", text(space))
                .set("label", text(label)),
            ElementConfig::Reel {
                item_width,
                space,
                height,
                no_bar,
            } => ConfigRecord::new()
                .set("itemWidth", text(item_width))
                .set("space", text(space))
                .set("height", text(height))
                .set("noBar", *no_bar),
            ElementConfig::Imposter {
                breakout,
                margin,
                fixed,
            } => ConfigRecord::new()
                .set("breakout", *breakout)
                .set("margin", text(margin))
                .set("fixed", *fixed),
        }
    }
}

/// Sanitized string field, or `Null` when absent.
fn text(field: &Option<String>) -> ConfigValue {
    match field {
        Some(raw) => ConfigValue::Str(sanitize(raw)),
        None => ConfigValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_kind_mapping() {
        let config = ElementConfig::Grid {
            min: Some("250px".into()),
            space: None,
        };
        assert_eq!(config.kind(), ElementKind::Grid);
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let config = ElementConfig::Box {
            padding: Some("s1".into()),
            border_width: None,
            invert: false,
        };
        let record = config.record();
        assert_eq!(record.get("padding"), Some(&ConfigValue::Str("s1".into())));
        assert_eq!(record.get("borderWidth"), Some(&ConfigValue::Null));
        assert_eq!(record.get("invert"), Some(&ConfigValue::Bool(false)));
    }

    #[test]
    fn test_record_sanitizes_string_fields() {
        let config = ElementConfig::Box {
            padding: Some("s1; } body { display:none".into()),
            border_width: None,
            invert: false,
        };
        let record = config.record();
        let padding = record.get("padding").unwrap().to_string();
        assert!(!padding.contains(';'));
        assert!(!padding.contains('{'));
        assert!(!padding.contains('}'));
    }

    #[test]
    fn test_record_keeps_numbers_and_flags() {
        let config = ElementConfig::Switcher {
            threshold: Some("30rem".into()),
            space: None,
            limit: Some(4),
        };
        let record = config.record();
        assert_eq!(record.get("limit"), Some(&ConfigValue::Num(4.0)));
        assert_eq!(record.get("space"), Some(&ConfigValue::Null));
    }

    #[test]
    fn test_config_serde_tagged_by_kind() {
        let config = ElementConfig::Stack {
            space: Some("s2".into()),
            recursive: true,
            split_after: Some(2),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["kind"], "stack");
        assert_eq!(json["space"], "s2");
        assert_eq!(json["splitAfter"], 2);

        let back: ElementConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
