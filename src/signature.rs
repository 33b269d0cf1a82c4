//! Deterministic signatures for configuration records.
//!
//! A signature is the identity of one (element kind, configuration) pair:
//! the record's canonical form is reduced through a 32-bit multiplicative
//! rolling hash, encoded in base36, and composed into a short key of the
//! form `pc-<kind>-<hash>`. The kind prefix keeps coincidentally identical
//! records of different kinds from ever sharing a key.
//!
//! The hash is fast and order-independent but NOT collision resistant. To
//! make a collision observable rather than silent, the [`Signature`] also
//! carries the canonical string it was derived from; the registry compares
//! it on every upsert.

use std::fmt;

use crate::config::ConfigRecord;
use crate::element::ElementKind;

/// Namespace prefix shared by every signature key and generated selector.
pub const SIGNATURE_NAMESPACE: &str = "pc";

/// The identity of a (kind, configuration) pair.
///
/// Two records that are key/value permutations of each other always
/// produce equal signatures; records differing in any key or value
/// produce different signatures unless the 32-bit hash collides.
///
/// # Example
///
/// ```rust
/// use instill::{ConfigRecord, ElementKind, Signature};
///
/// let a = ConfigRecord::new().set("padding", "s1").set("invert", false);
/// let b = ConfigRecord::new().set("invert", false).set("padding", "s1");
///
/// let sig_a = Signature::compute(ElementKind::Box, &a);
/// let sig_b = Signature::compute(ElementKind::Box, &b);
/// assert_eq!(sig_a, sig_b);
/// assert!(sig_a.key().starts_with("pc-box-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    kind: ElementKind,
    key: String,
    canonical: String,
}

impl Signature {
    /// Computes the signature for a record under the given element kind.
    pub fn compute(kind: ElementKind, record: &ConfigRecord) -> Self {
        let canonical = record.canonical();
        let key = format!(
            "{}-{}-{}",
            SIGNATURE_NAMESPACE,
            kind.as_str(),
            base36(rolling_hash(&canonical))
        );
        Self {
            kind,
            key,
            canonical,
        }
    }

    /// The element kind this signature belongs to.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The opaque key, e.g. `pc-box-1k2j3h`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The canonical record string the key was hashed from.
    ///
    /// Kept alongside the key so a hash collision can be detected instead
    /// of silently merging two distinct configurations.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// djb2: multiplicative rolling hash, seed 5381, factor 33, wrapping u32.
fn rolling_hash(input: &str) -> u32 {
    input
        .bytes()
        .fold(5381u32, |h, b| h.wrapping_mul(33).wrapping_add(u32::from(b)))
}

/// Encodes a u32 in lowercase base36.
fn base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    // ceil(32 / log2(36)) == 7 digits at most
    let mut buf = [0u8; 7];
    let mut i = buf.len();
    while n > 0 {
        i -= 1;
        buf[i] = DIGITS[(n % 36) as usize];
        n /= 36;
    }
    // Always valid ASCII by construction.
    String::from_utf8_lossy(&buf[i..]).into_owned()
}
