use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("No backend registered for kind '{0}'")]
    UnknownBackendKind(String),

    #[error("Instance '{0}' has no target domain configured")]
    MissingTargetDomain(String),
}
