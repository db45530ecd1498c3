mod zone_backend;

pub use zone_backend::ZoneBackend;

// Re-export for convenience
pub use remoteip_dns_domain::BackendQuery;
