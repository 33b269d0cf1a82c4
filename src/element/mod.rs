//! Element kinds, per-kind configurations, and style templates.
//!
//! This module is the per-kind half of the subsystem:
//!
//! - [`ElementKind`]: the closed set of layout primitives
//! - [`ElementConfig`]: a tagged union, one variant per kind, that lowers
//!   its typed fields into a sanitized [`ConfigRecord`]
//! - [`TemplateFn`]: the template seam each kind implements to turn a
//!   signature plus record into signature-scoped style text
//!
//! [`ConfigRecord`]: crate::ConfigRecord

mod config;
mod kind;
mod template;

pub use config::ElementConfig;
pub use kind::ElementKind;
pub use template::TemplateFn;
