//! remoteip-dns Domain Layer
pub mod answer;
pub mod config;
pub mod errors;
pub mod query;
pub mod record_type;

pub use answer::AnswerRecord;
pub use config::{Config, ConfigError, InstanceConfig, LoggingConfig};
pub use errors::BackendError;
pub use query::BackendQuery;
pub use record_type::RecordType;
