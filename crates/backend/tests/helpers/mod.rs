#![allow(dead_code)]
use remoteip_dns_domain::{BackendQuery, InstanceConfig, RecordType};

pub const TARGET: &str = "whoami.example.";

pub fn instance(domain: &str) -> InstanceConfig {
    InstanceConfig::new("default", domain)
}

pub struct QueryBuilder {
    qname: String,
    record_type: RecordType,
    client_addr: String,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            qname: TARGET.to_string(),
            record_type: RecordType::A,
            client_addr: "203.0.113.7".to_string(),
        }
    }

    pub fn qname(mut self, qname: &str) -> Self {
        self.qname = qname.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn client_addr(mut self, client_addr: &str) -> Self {
        self.client_addr = client_addr.to_string();
        self
    }

    pub fn build(self) -> BackendQuery {
        BackendQuery::new(self.qname, self.record_type, self.client_addr)
    }
}
