//! The process-wide deduplicating style registry.
//!
//! The registry is the single shared mutable resource of the subsystem: a
//! signature-keyed store of style entries standing in for the style nodes
//! a live document would carry. Its one real operation is [`upsert`] —
//! create on first occurrence, overwrite on every later one, never
//! duplicate, never fail. Nothing is ever evicted; the registry grows
//! monotonically with the number of distinct configurations seen, which is
//! intentional for short-lived documents.
//!
//! The registry is an explicit service object: controllers receive a
//! `&mut StyleRegistry`, so tests get a fresh one per case. A process-wide
//! [`shared`] instance is available for applications that want ambient
//! wiring instead.
//!
//! [`upsert`]: StyleRegistry::upsert

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::element::ElementKind;
use crate::signature::Signature;

/// One style-carrying entry: the unique (kind, signature) → style text
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    kind: ElementKind,
    signature: String,
    canonical: String,
    text: String,
}

impl StyleEntry {
    /// The element kind that produced this entry.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The signature key this entry is stored under.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The canonical record string behind the signature.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The generated style text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Deduplicating store of style entries, keyed by signature.
///
/// Signature keys embed the element kind (`pc-<kind>-<hash>`), so entries
/// of different kinds can never collide structurally. Entries keep their
/// insertion order, which is the order [`render`] emits them in.
///
/// # Example
///
/// ```rust
/// use instill::{ConfigRecord, ElementKind, Signature, StyleRegistry};
///
/// let mut registry = StyleRegistry::new();
/// let sig = Signature::compute(ElementKind::Box, &ConfigRecord::new());
///
/// registry.upsert(&sig, "[data-i=\"pc-box-0\"] { padding: var(--s1); }");
/// registry.upsert(&sig, "[data-i=\"pc-box-0\"] { padding: var(--s1); }");
/// assert_eq!(registry.len(), 1);
/// ```
///
/// [`render`]: StyleRegistry::render
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: HashMap<String, StyleEntry>,
    /// Signature keys in first-insertion order, for stable emission.
    order: Vec<String>,
    collisions: u64,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for a signature.
    ///
    /// On first occurrence the entry is created; on every later occurrence
    /// its text is overwritten unconditionally (idempotent when unchanged,
    /// corrective when a template drifted). Exactly one entry per
    /// signature exists afterwards. The call cannot fail.
    ///
    /// If the stored canonical form differs from the incoming signature's
    /// — two distinct configurations hashing to the same key — the
    /// overwrite still wins (last write wins), but the collision counter
    /// is incremented so the condition is observable via [`collisions`].
    ///
    /// [`collisions`]: StyleRegistry::collisions
    pub fn upsert(&mut self, signature: &Signature, text: impl Into<String>) {
        let text = text.into();
        match self.entries.get_mut(signature.key()) {
            Some(entry) => {
                if entry.canonical != signature.canonical() {
                    self.collisions += 1;
                    entry.canonical = signature.canonical().to_string();
                }
                entry.text = text;
            }
            None => {
                self.order.push(signature.key().to_string());
                self.entries.insert(
                    signature.key().to_string(),
                    StyleEntry {
                        kind: signature.kind(),
                        signature: signature.key().to_string(),
                        canonical: signature.canonical().to_string(),
                        text,
                    },
                );
            }
        }
    }

    /// Returns true if an entry exists for the signature key.
    pub fn contains(&self, signature_key: &str) -> bool {
        self.entries.contains_key(signature_key)
    }

    /// Looks up an entry by signature key.
    pub fn entry(&self, signature_key: &str) -> Option<&StyleEntry> {
        self.entries.get(signature_key)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries exist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of hash collisions observed across all upserts.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Iterates entries in first-insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &StyleEntry> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Emits the managed style document: every entry's text, in
    /// first-insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in self.entries() {
            out.push_str(&entry.text);
        }
        out
    }

    /// Removes every entry.
    ///
    /// The subsystem itself never evicts; this exists so tests sharing the
    /// process-wide instance can reset it.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.collisions = 0;
    }
}

static SHARED: Lazy<Mutex<StyleRegistry>> = Lazy::new(|| Mutex::new(StyleRegistry::new()));

/// The process-wide registry instance.
///
/// Serializes upserts behind a mutex, so "last write wins" holds even if
/// callers register styles from more than one thread. Prefer passing an
/// owned [`StyleRegistry`] explicitly where you can; this instance exists
/// for applications whose element instances have no shared wiring point.
pub fn shared() -> &'static Mutex<StyleRegistry> {
    &SHARED
}
