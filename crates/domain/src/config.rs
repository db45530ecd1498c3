mod errors;
mod instance;
mod logging;
mod root;

pub use errors::ConfigError;
pub use instance::InstanceConfig;
pub use logging::LoggingConfig;
pub use root::{BackendSection, Config};
