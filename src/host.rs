//! Host-node stand-in for the tagging contract.

use std::collections::BTreeSet;

use crate::signature::Signature;

/// The attribute name generated selectors match on.
pub const STYLE_TAG_ATTR: &str = "data-i";

/// A minimal host node carrying the instance side of the tagging contract.
///
/// Every element instance owns exactly one host. Registering writes the
/// signature key into the host's `data-i` attribute and mirrors it as a
/// class; the generated style text's selectors are scoped by that same
/// key, so they match this host and every sibling host sharing the
/// configuration. Destroying the instance clears only this tag — the
/// registry entry the tag points at is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostElement {
    style_tag: Option<String>,
    classes: BTreeSet<String>,
}

impl HostElement {
    /// Creates an untagged host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the host with a signature, replacing any previous tag.
    pub fn tag(&mut self, signature: &Signature) {
        if let Some(previous) = self.style_tag.take() {
            self.classes.remove(&previous);
        }
        self.classes.insert(signature.key().to_string());
        self.style_tag = Some(signature.key().to_string());
    }

    /// Removes the host's style tag and its mirrored class.
    pub fn untag(&mut self) {
        if let Some(previous) = self.style_tag.take() {
            self.classes.remove(&previous);
        }
    }

    /// Current `data-i` value, if tagged.
    pub fn style_tag(&self) -> Option<&str> {
        self.style_tag.as_deref()
    }

    /// Returns true if the host carries the given class.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Iterates the host's classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_str())
    }
}
