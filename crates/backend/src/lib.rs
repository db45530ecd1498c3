//! The remoteip responder backend and the seams a host loads it through.
pub mod ports;
pub mod registry;
pub mod responder;

pub use ports::ZoneBackend;
pub use registry::{register_builtin, BackendFactory, BackendRegistry, RemoteIpFactory};
pub use responder::RemoteIpResponder;
