use remoteip_dns_domain::{BackendError, InstanceConfig};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::ports::ZoneBackend;
use crate::responder::RemoteIpResponder;

/// Builds backend instances of one kind from per-instance configuration.
pub trait BackendFactory: Send + Sync {
    fn kind(&self) -> &'static str;

    fn make(&self, config: &InstanceConfig) -> Result<Box<dyn ZoneBackend>, BackendError>;
}

/// Explicit registry of backend factories.
///
/// The host builds one at startup and registers the factories it wants
/// loaded; nothing registers itself through global state.
#[derive(Default)]
pub struct BackendRegistry {
    factories: BTreeMap<&'static str, Box<dyn BackendFactory>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any previously registered factory of
    /// the same kind.
    pub fn register(&mut self, factory: Box<dyn BackendFactory>) {
        let kind = factory.kind();
        if self.factories.insert(kind, factory).is_some() {
            warn!(kind, "Replacing previously registered backend factory");
        }
    }

    /// Instantiate a backend of `kind` for one configured instance.
    pub fn make(
        &self,
        kind: &str,
        config: &InstanceConfig,
    ) -> Result<Box<dyn ZoneBackend>, BackendError> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| BackendError::UnknownBackendKind(kind.to_string()))?;
        factory.make(config)
    }

    /// Registered backend kinds, in stable order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }
}

/// Factory for [`RemoteIpResponder`] instances.
pub struct RemoteIpFactory;

impl BackendFactory for RemoteIpFactory {
    fn kind(&self) -> &'static str {
        "remoteip"
    }

    fn make(&self, config: &InstanceConfig) -> Result<Box<dyn ZoneBackend>, BackendError> {
        Ok(Box::new(RemoteIpResponder::from_config(config)?))
    }
}

/// Register the built-in backends. Called once by the host at startup.
pub fn register_builtin(registry: &mut BackendRegistry) {
    registry.register(Box::new(RemoteIpFactory));
    info!(
        version = env!("CARGO_PKG_VERSION"),
        "remoteip backend registered"
    );
}
