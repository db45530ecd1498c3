use remoteip_dns_domain::{AnswerRecord, BackendError, BackendQuery, InstanceConfig, RecordType};
use std::sync::Arc;
use tracing::debug;

use crate::ports::ZoneBackend;

/// Answers A (or ANY) queries for one configured domain with the address of
/// the client that asked.
///
/// Holds at most one pending answer between a `lookup` and the
/// `next_answer` that consumes it; every `lookup` replaces the slot.
#[derive(Debug)]
pub struct RemoteIpResponder {
    target_domain: Arc<str>,
    pending: Option<Arc<str>>,
}

impl RemoteIpResponder {
    pub fn from_config(config: &InstanceConfig) -> Result<Self, BackendError> {
        if config.domain.is_empty() {
            return Err(BackendError::MissingTargetDomain(config.name.clone()));
        }
        Ok(Self {
            target_domain: config.domain.as_str().into(),
            pending: None,
        })
    }

    pub fn target_domain(&self) -> &str {
        &self.target_domain
    }

    /// The answer content a query produces, independent of pending state.
    ///
    /// DNS names are ASCII in their transport form, so case folding is
    /// ASCII-only.
    fn answer_content(&self, query: &BackendQuery) -> Option<Arc<str>> {
        if query.record_type.includes_a() && query.qname.eq_ignore_ascii_case(&self.target_domain)
        {
            Some(query.client_addr.clone())
        } else {
            None
        }
    }
}

impl ZoneBackend for RemoteIpResponder {
    fn lookup(&mut self, query: &BackendQuery) {
        self.pending = self.answer_content(query);
        debug!(
            qname = %query.qname,
            record_type = %query.record_type,
            matched = self.pending.is_some(),
            "remoteip lookup"
        );
    }

    fn next_answer(&mut self) -> Option<AnswerRecord> {
        let content = self.pending.take()?;
        // TTL 0: the answer names the asking client, so it must never be
        // cached and served to another one.
        Some(AnswerRecord::new(
            self.target_domain.clone(),
            RecordType::A,
            0,
            true,
            content,
        ))
    }
}
