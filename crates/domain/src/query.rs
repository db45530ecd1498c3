use crate::record_type::RecordType;
use std::sync::Arc;

/// The inputs of one backend lookup.
///
/// `client_addr` is the textual address of the requester as the host saw
/// it. The backend treats it as opaque; it is never parsed.
#[derive(Debug, Clone)]
pub struct BackendQuery {
    pub qname: Arc<str>,
    pub record_type: RecordType,
    pub client_addr: Arc<str>,
}

impl BackendQuery {
    pub fn new(
        qname: impl Into<Arc<str>>,
        record_type: RecordType,
        client_addr: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            qname: qname.into(),
            record_type,
            client_addr: client_addr.into(),
        }
    }
}
