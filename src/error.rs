//! Controller lifecycle errors.
//!
//! The only fallible surface in the subsystem is controller misuse:
//! sanitization fails open, hashing and upserting cannot fail, and a
//! template/registry mismatch is impossible by construction since the
//! controller regenerates style text from the same inputs its signature
//! came from.

use thiserror::Error;

use crate::element::ElementKind;

/// Error from driving an [`ElementStyleController`] out of order.
///
/// [`ElementStyleController`]: crate::ElementStyleController
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A config of one kind was fed to a controller of another.
    #[error("'{config}' config cannot drive a '{controller}' controller")]
    KindMismatch {
        /// The controller's kind.
        controller: ElementKind,
        /// The offending config's kind.
        config: ElementKind,
    },

    /// `register` was called before any configuration was supplied.
    #[error("'{kind}' controller has no configuration to register")]
    NotConfigured {
        /// The controller's kind.
        kind: ElementKind,
    },

    /// The controller was already destroyed.
    #[error("'{kind}' controller was destroyed")]
    Destroyed {
        /// The controller's kind.
        kind: ElementKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mismatch_display() {
        let err = StyleError::KindMismatch {
            controller: ElementKind::Box,
            config: ElementKind::Stack,
        };
        let msg = err.to_string();
        assert!(msg.contains("stack"));
        assert!(msg.contains("box"));
    }

    #[test]
    fn test_destroyed_display() {
        let err = StyleError::Destroyed {
            kind: ElementKind::Grid,
        };
        assert!(err.to_string().contains("grid"));
    }
}
