use crate::record_type::RecordType;
use std::sync::Arc;

/// One synthesized answer record, in the five fields a DNS answer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub qname: Arc<str>,

    pub record_type: RecordType,

    pub ttl: u32,

    pub authoritative: bool,

    /// Record data in presentation form.
    pub content: Arc<str>,
}

impl AnswerRecord {
    pub fn new(
        qname: impl Into<Arc<str>>,
        record_type: RecordType,
        ttl: u32,
        authoritative: bool,
        content: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            qname: qname.into(),
            record_type,
            ttl,
            authoritative,
            content: content.into(),
        }
    }

    pub fn is_cacheable(&self) -> bool {
        self.ttl > 0
    }
}
