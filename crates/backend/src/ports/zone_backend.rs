use remoteip_dns_domain::{AnswerRecord, BackendQuery};
use std::fmt;

/// Host-facing backend protocol.
///
/// The host dispatcher calls `lookup` once per incoming query, then calls
/// `next_answer` until it returns `None`. Calls belonging to one query
/// context are issued sequentially; `&mut self` makes sharing an instance
/// across concurrent query contexts unrepresentable without external
/// synchronization.
pub trait ZoneBackend: Send {
    /// Evaluate a query. Never fails; an unmatched query simply leaves
    /// nothing to fetch.
    fn lookup(&mut self, query: &BackendQuery);

    /// The next answer produced by the most recent `lookup`, or `None`
    /// once the result set is exhausted.
    fn next_answer(&mut self) -> Option<AnswerRecord>;

    /// Whether this backend can enumerate a whole zone (AXFR).
    fn supports_zone_transfer(&self) -> bool {
        false
    }
}

impl fmt::Debug for dyn ZoneBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn ZoneBackend")
    }
}
