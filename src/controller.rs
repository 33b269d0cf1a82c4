//! Per-instance lifecycle: configure, register, update, destroy.
//!
//! Each element instance owns one [`ElementStyleController`], a small
//! state machine tying the pure pieces together:
//!
//! ```text
//! Uninitialized --configure--> Configured --register--> Registered
//!                                   ^                       |
//!                                   +-------update----------+
//!                 (any state) --destroy--> Destroyed
//! ```
//!
//! `configure` lowers the typed config to a sanitized record and signs it;
//! `register` renders the kind's template, upserts into the registry, and
//! tags the host; `update` runs both again with new inputs, leaving the
//! previous registry entry untouched (other instances may still reference
//! it); `destroy` clears the host tag only — the registry never shrinks.

use crate::config::ConfigRecord;
use crate::element::ElementConfig;
use crate::element::ElementKind;
use crate::error::StyleError;
use crate::host::HostElement;
use crate::registry::StyleRegistry;
use crate::signature::Signature;

/// Lifecycle state of an element instance's controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Created, no configuration seen yet.
    Uninitialized,
    /// Configuration sanitized and signed, not yet in the registry.
    Configured,
    /// Style text upserted and host tagged.
    Registered,
    /// Instance gone; only its host tag was removed.
    Destroyed,
}

/// The style lifecycle adapter owned by every element instance.
///
/// # Example
///
/// ```rust
/// use instill::{
///     ElementConfig, ElementStyleController, HostElement, StyleRegistry,
/// };
///
/// let mut registry = StyleRegistry::new();
/// let mut host = HostElement::new();
///
/// let config = ElementConfig::Box {
///     padding: Some("var(--s2)".into()),
///     border_width: None,
///     invert: false,
/// };
/// let controller =
///     ElementStyleController::mount(&config, &mut registry, &mut host).unwrap();
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(host.style_tag(), controller.signature().map(|s| s.key()));
/// ```
#[derive(Debug, Clone)]
pub struct ElementStyleController {
    kind: ElementKind,
    state: ControllerState,
    record: Option<ConfigRecord>,
    signature: Option<Signature>,
}

impl ElementStyleController {
    /// Creates an uninitialized controller for one element kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            state: ControllerState::Uninitialized,
            record: None,
            signature: None,
        }
    }

    /// Configures and registers in one step: the creation path of an
    /// element instance.
    pub fn mount(
        config: &ElementConfig,
        registry: &mut StyleRegistry,
        host: &mut HostElement,
    ) -> Result<Self, StyleError> {
        let mut controller = Self::new(config.kind());
        controller.configure(config)?;
        controller.register(registry, host)?;
        Ok(controller)
    }

    /// The element kind this controller serves.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The signature of the most recently configured inputs, if any.
    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Sanitizes the config, lowers it to a record, and computes its
    /// signature. Moves the controller to `Configured`.
    ///
    /// # Errors
    ///
    /// [`StyleError::Destroyed`] after `destroy`;
    /// [`StyleError::KindMismatch`] when the config's kind is not the
    /// controller's.
    pub fn configure(&mut self, config: &ElementConfig) -> Result<(), StyleError> {
        if self.state == ControllerState::Destroyed {
            return Err(StyleError::Destroyed { kind: self.kind });
        }
        if config.kind() != self.kind {
            return Err(StyleError::KindMismatch {
                controller: self.kind,
                config: config.kind(),
            });
        }

        let record = config.record();
        self.signature = Some(Signature::compute(self.kind, &record));
        self.record = Some(record);
        self.state = ControllerState::Configured;
        Ok(())
    }

    /// Renders the kind's template, upserts the result, and tags the host
    /// with the signature. Moves the controller to `Registered`.
    ///
    /// Registering twice is idempotent: the registry entry is overwritten
    /// in place, never duplicated.
    ///
    /// # Errors
    ///
    /// [`StyleError::Destroyed`] after `destroy`;
    /// [`StyleError::NotConfigured`] before the first `configure`.
    pub fn register(
        &mut self,
        registry: &mut StyleRegistry,
        host: &mut HostElement,
    ) -> Result<(), StyleError> {
        if self.state == ControllerState::Destroyed {
            return Err(StyleError::Destroyed { kind: self.kind });
        }
        let (record, signature) = match (&self.record, &self.signature) {
            (Some(record), Some(signature)) => (record, signature),
            _ => return Err(StyleError::NotConfigured { kind: self.kind }),
        };

        let text = (self.kind.template())(signature, record);
        registry.upsert(signature, text);
        host.tag(signature);
        self.state = ControllerState::Registered;
        Ok(())
    }

    /// The Configured↔Registered loop: re-runs the whole pipeline for
    /// changed inputs.
    ///
    /// The signature may change; the previous registry entry stays where
    /// it is — other instances may share it, or it becomes an orphan,
    /// which is accepted (the registry never evicts).
    pub fn update(
        &mut self,
        config: &ElementConfig,
        registry: &mut StyleRegistry,
        host: &mut HostElement,
    ) -> Result<(), StyleError> {
        self.configure(config)?;
        self.register(registry, host)
    }

    /// Destroys the instance: removes the host's tag and nothing else.
    ///
    /// Idempotent. Registry entries this instance produced are left for
    /// whoever else references them.
    pub fn destroy(&mut self, host: &mut HostElement) {
        if self.state == ControllerState::Destroyed {
            return;
        }
        host.untag();
        self.state = ControllerState::Destroyed;
    }
}
