//! Deduplicated dynamic style generation for layout primitive elements.
//!
//! A family of layout primitives (box, stack, cluster, grid, ...) each
//! turns a small configuration into generated style text. When many
//! instances share a configuration, the shared stylesheet must carry that
//! text exactly once. This crate is the machinery that makes that hold:
//!
//! - [`sanitize()`]: allow-list filter neutralizing caller-supplied values
//!   before they reach style text
//! - [`ConfigRecord`] / [`Signature`]: canonical, order-independent
//!   identity for a configuration, keyed per element kind
//! - [`StyleRegistry`]: deduplicating (kind, signature) → style-text
//!   store with a single, infallible `upsert`
//! - [`ElementStyleController`]: the per-instance lifecycle gluing the
//!   pieces together and tagging the instance's host node so generated
//!   selectors match it
//!
//! # Example
//!
//! ```rust
//! use instill::{ElementConfig, ElementStyleController, HostElement, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//!
//! let config = ElementConfig::Stack {
//!     space: Some("var(--s2)".into()),
//!     recursive: false,
//!     split_after: None,
//! };
//!
//! // Ten instances, one configuration: one registry entry.
//! let mut hosts = vec![HostElement::new(); 10];
//! for host in &mut hosts {
//!     ElementStyleController::mount(&config, &mut registry, host).unwrap();
//! }
//!
//! assert_eq!(registry.len(), 1);
//! let tag = hosts[0].style_tag().unwrap();
//! assert!(hosts.iter().all(|h| h.style_tag() == Some(tag)));
//! assert!(registry.render().contains(tag));
//! ```
//!
//! Everything is synchronous and in-memory; the only shared mutable state
//! is the registry, which is passed explicitly (a process-wide
//! [`registry::shared`] instance exists for ambient wiring).

mod config;
mod controller;
mod element;
mod error;
mod host;
pub mod registry;
mod sanitize;
mod signature;

pub use config::{ConfigRecord, ConfigValue};
pub use controller::{ControllerState, ElementStyleController};
pub use element::{ElementConfig, ElementKind, TemplateFn};
pub use error::StyleError;
pub use host::{HostElement, STYLE_TAG_ATTR};
pub use registry::{StyleEntry, StyleRegistry};
pub use sanitize::sanitize;
pub use signature::{Signature, SIGNATURE_NAMESPACE};
