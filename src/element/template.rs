//! Per-kind style-template functions.
//!
//! Each kind implements one [`TemplateFn`]: given a signature and a
//! sanitized record, return style text whose every selector is scoped by
//! `[data-i="<signature>"]`, so the generated rules match exactly the host
//! nodes tagged with that signature and nothing else.
//!
//! The declaration bodies are deliberately thin. The interesting part is
//! the scoping and that only sanitized record values are interpolated;
//! callers who need richer rules extend the body, not the machinery.

use crate::config::{ConfigRecord, ConfigValue};
use crate::signature::Signature;

/// A kind-specific style template.
///
/// The contract every layout primitive implements once: selectors scoped
/// by the signature, values read only from the sanitized record.
pub type TemplateFn = fn(&Signature, &ConfigRecord) -> String;

/// Record value as style text, or the kind's fallback when null/absent.
fn value(config: &ConfigRecord, key: &str, fallback: &str) -> String {
    match config.get(key) {
        Some(ConfigValue::Null) | None => fallback.to_string(),
        Some(v) => v.to_string(),
    }
}

fn flag(config: &ConfigRecord, key: &str) -> bool {
    matches!(config.get(key), Some(ConfigValue::Bool(true)))
}

fn has(config: &ConfigRecord, key: &str) -> bool {
    matches!(config.get(key), Some(v) if !v.is_null())
}

pub(super) fn box_style(sig: &Signature, config: &ConfigRecord) -> String {
    let padding = value(config, "padding", "var(--s1)");
    let mut out = format!("[data-i=\"{sig}\"] {{\n  padding: {padding};\n");
    if has(config, "borderWidth") {
        let border = value(config, "borderWidth", "0");
        out.push_str(&format!("  border: {border} solid;\n"));
    }
    if flag(config, "invert") {
        out.push_str("  background-color: var(--color-dark);\n  color: var(--color-light);\n");
    }
    out.push_str("}\n");
    out
}

pub(super) fn stack_style(sig: &Signature, config: &ConfigRecord) -> String {
    let space = value(config, "space", "var(--s1)");
    let combinator = if flag(config, "recursive") { " " } else { " > " };
    let mut out = format!("[data-i=\"{sig}\"]{combinator}* + * {{\n  margin-block-start: {space};\n}}\n");
    if has(config, "splitAfter") {
        let after = value(config, "splitAfter", "0");
        out.push_str(&format!(
            "[data-i=\"{sig}\"] > :nth-child({after}) {{\n  margin-block-end: auto;\n}}\n"
        ));
    }
    out
}

pub(super) fn cluster_style(sig: &Signature, config: &ConfigRecord) -> String {
    let justify = value(config, "justify", "flex-start");
    let align = value(config, "align", "flex-start");
    let space = value(config, "space", "var(--s1)");
    format!(
        "[data-i=\"{sig}\"] {{\n  display: flex;\n  flex-wrap: wrap;\n  \
         gap: {space};\n  justify-content: {justify};\n  align-items: {align};\n}}\n"
    )
}

pub(super) fn grid_style(sig: &Signature, config: &ConfigRecord) -> String {
    let min = value(config, "min", "250px");
    let space = value(config, "space", "var(--s1)");
    format!(
        "[data-i=\"{sig}\"] {{\n  display: grid;\n  gap: {space};\n  \
         grid-template-columns: repeat(auto-fill, minmax(min({min}, 100%), 1fr));\n}}\n"
    )
}

pub(super) fn center_style(sig: &Signature, config: &ConfigRecord) -> String {
    let max = value(config, "max", "var(--measure)");
    let mut out = format!(
        "[data-i=\"{sig}\"] {{\n  box-sizing: content-box;\n  \
         margin-inline: auto;\n  max-inline-size: {max};\n"
    );
    if has(config, "gutters") {
        let gutters = value(config, "gutters", "0");
        out.push_str(&format!("  padding-inline: {gutters};\n"));
    }
    if flag(config, "andText") {
        out.push_str("  text-align: center;\n");
    }
    if flag(config, "intrinsic") {
        out.push_str("  display: flex;\n  flex-direction: column;\n  align-items: center;\n");
    }
    out.push_str("}\n");
    out
}

pub(super) fn cover_style(sig: &Signature, config: &ConfigRecord) -> String {
    let space = value(config, "space", "var(--s1)");
    let min_height = value(config, "minHeight", "100vh");
    let centered = value(config, "centered", "h1");
    let padding = if flag(config, "noPad") { "0".to_string() } else { space.clone() };
    format!(
        "[data-i=\"{sig}\"] {{\n  display: flex;\n  flex-direction: column;\n  \
         min-block-size: {min_height};\n  padding: {padding};\n}}\n\
         [data-i=\"{sig}\"] > * {{\n  margin-block: {space};\n}}\n\
         [data-i=\"{sig}\"] > {centered} {{\n  margin-block: auto;\n}}\n"
    )
}

pub(super) fn frame_style(sig: &Signature, config: &ConfigRecord) -> String {
    let ratio = value(config, "ratio", "16/9");
    format!(
        "[data-i=\"{sig}\"] {{\n  aspect-ratio: {ratio};\n  overflow: hidden;\n  \
         display: flex;\n  justify-content: center;\n  align-items: center;\n}}\n"
    )
}

pub(super) fn sidebar_style(sig: &Signature, config: &ConfigRecord) -> String {
    let space = value(config, "space", "var(--s1)");
    let side_width = value(config, "sideWidth", "auto");
    let content_min = value(config, "contentMin", "50%");
    let align = if flag(config, "noStretch") { "flex-start" } else { "stretch" };
    // "left" puts the sidebar first in source order; "right" puts it last.
    let side_child = if value(config, "side", "left") == "right" {
        ":last-child"
    } else {
        ":first-child"
    };
    let content_child = if side_child == ":last-child" { ":first-child" } else { ":last-child" };
    format!(
        "[data-i=\"{sig}\"] {{\n  display: flex;\n  flex-wrap: wrap;\n  \
         gap: {space};\n  align-items: {align};\n}}\n\
         [data-i=\"{sig}\"] > {side_child} {{\n  flex-basis: {side_width};\n  flex-grow: 1;\n}}\n\
         [data-i=\"{sig}\"] > {content_child} {{\n  flex-basis: 0;\n  flex-grow: 999;\n  \
         min-inline-size: {content_min};\n}}\n"
    )
}

pub(super) fn switcher_style(sig: &Signature, config: &ConfigRecord) -> String {
    let threshold = value(config, "threshold", "var(--measure)");
    let space = value(config, "space", "var(--s1)");
    let mut out = format!(
        "[data-i=\"{sig}\"] {{\n  display: flex;\n  flex-wrap: wrap;\n  gap: {space};\n}}\n\
         [data-i=\"{sig}\"] > * {{\n  flex-basis: calc(({threshold} - 100%) * 999);\n  \
         flex-grow: 1;\n}}\n"
    );
    if has(config, "limit") {
        let limit = value(config, "limit", "0");
        out.push_str(&format!(
            "[data-i=\"{sig}\"] > :nth-last-child(n+ {limit}),\n\
             [data-i=\"{sig}\"] > :nth-last-child(n+ {limit}) ~ * {{\n  flex-basis: 100%;\n}}\n"
        ));
    }
    out
}

pub(super) fn icon_style(sig: &Signature, config: &ConfigRecord) -> String {
    let mut out = format!(
        "[data-i=\"{sig}\"] svg {{\n  height: 0.75em;\n  height: 1cap;\n  \
         width: 0.75em;\n  width: 1cap;\n}}\n"
    );
    if has(config, "space") {
        let space = value(config, "space", "0");
        out.push_str(&format!(
            "[data-i=\"{sig}\"] {{\n  display: inline-flex;\n  align-items: baseline;\n  \
             gap: {space};\n}}\n"
        ));
    }
    out
}

pub(super) fn reel_style(sig: &Signature, config: &ConfigRecord) -> String {
    let item_width = value(config, "itemWidth", "auto");
    let space = value(config, "space", "var(--s0)");
    let height = value(config, "height", "auto");
    let mut out = format!(
        "[data-i=\"{sig}\"] {{\n  display: flex;\n  block-size: {height};\n  \
         gap: {space};\n  overflow-x: auto;\n  overflow-y: hidden;\n}}\n\
         [data-i=\"{sig}\"] > * {{\n  flex: 0 0 {item_width};\n}}\n"
    );
    if flag(config, "noBar") {
        out.push_str(&format!("[data-i=\"{sig}\"] {{\n  scrollbar-width: none;\n}}\n"));
    }
    out
}

pub(super) fn imposter_style(sig: &Signature, config: &ConfigRecord) -> String {
    let position = if flag(config, "fixed") { "fixed" } else { "absolute" };
    let mut out = format!(
        "[data-i=\"{sig}\"] {{\n  position: {position};\n  inset-block-start: 50%;\n  \
         inset-inline-start: 50%;\n  transform: translate(-50%, -50%);\n"
    );
    if !flag(config, "breakout") {
        let margin = value(config, "margin", "0px");
        out.push_str(&format!(
            "  overflow: auto;\n  max-inline-size: calc(100% - ({margin} * 2));\n  \
             max-block-size: calc(100% - ({margin} * 2));\n"
        ));
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementConfig, ElementKind};

    fn render(config: &ElementConfig) -> (Signature, String) {
        let record = config.record();
        let sig = Signature::compute(config.kind(), &record);
        let text = (config.kind().template())(&sig, &record);
        (sig, text)
    }

    #[test]
    fn test_every_template_scopes_by_signature() {
        for kind in ElementKind::ALL {
            let record = ConfigRecord::new();
            let sig = Signature::compute(kind, &record);
            let text = (kind.template())(&sig, &record);
            assert!(
                text.contains(&format!("[data-i=\"{}\"]", sig)),
                "{kind} template is not scoped by its signature:\n{text}"
            );
        }
    }

    #[test]
    fn test_box_template_reads_padding() {
        let (_, text) = render(&ElementConfig::Box {
            padding: Some("var(--s2)".into()),
            border_width: Some("2px".into()),
            invert: false,
        });
        assert!(text.contains("padding: var(--s2);"));
        assert!(text.contains("border: 2px solid;"));
        assert!(!text.contains("background-color"));
    }

    #[test]
    fn test_box_template_omits_absent_border() {
        let (_, text) = render(&ElementConfig::Box {
            padding: None,
            border_width: None,
            invert: true,
        });
        assert!(text.contains("padding: var(--s1);"));
        assert!(!text.contains("border:"));
        assert!(text.contains("background-color: var(--color-dark);"));
    }

    #[test]
    fn test_stack_recursive_changes_combinator() {
        let child = ElementConfig::Stack {
            space: Some("s1".into()),
            recursive: false,
            split_after: None,
        };
        let recursive = ElementConfig::Stack {
            space: Some("s1".into()),
            recursive: true,
            split_after: None,
        };
        let (child_sig, child_text) = render(&child);
        let (rec_sig, rec_text) = render(&recursive);

        assert!(child_text.contains(&format!("[data-i=\"{child_sig}\"] > * + *")));
        assert!(rec_text.contains(&format!("[data-i=\"{rec_sig}\"] * + *")));
    }

    #[test]
    fn test_switcher_limit_rule_only_when_set() {
        let (_, without) = render(&ElementConfig::Switcher {
            threshold: Some("30rem".into()),
            space: None,
            limit: None,
        });
        let (_, with) = render(&ElementConfig::Switcher {
            threshold: Some("30rem".into()),
            space: None,
            limit: Some(4),
        });
        assert!(!without.contains("nth-last-child"));
        assert!(with.contains("nth-last-child(n+ 4)"));
    }

    #[test]
    fn test_sidebar_side_selects_child() {
        let left = ElementConfig::Sidebar {
            side: None,
            side_width: Some("20rem".into()),
            content_min: None,
            space: None,
            no_stretch: false,
        };
        let right = ElementConfig::Sidebar {
            side: Some("right".into()),
            side_width: Some("20rem".into()),
            content_min: None,
            space: None,
            no_stretch: false,
        };
        let (_, left_text) = render(&left);
        let (_, right_text) = render(&right);

        assert!(left_text.contains("> :first-child {\n  flex-basis: 20rem;"));
        assert!(right_text.contains("> :last-child {\n  flex-basis: 20rem;"));
    }

    #[test]
    fn test_templates_never_leak_unsafe_input() {
        let (_, text) = render(&ElementConfig::Box {
            padding: Some("red; } body { display:none; } /*".into()),
            border_width: None,
            invert: false,
        });
        // Braces and semicolons in the output may only come from the
        // template itself, never from the caller value.
        let padding_line = text
            .lines()
            .find(|l| l.trim_start().starts_with("padding:"))
            .unwrap();
        assert_eq!(padding_line, "  padding: red  body  displaynone  /*;");
    }
}
