use serde::{Deserialize, Serialize};

/// One configured responder instance.
///
/// `name` distinguishes concurrently configured instances; `domain` is the
/// single name the instance answers for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    #[serde(default = "default_instance_name")]
    pub name: String,

    #[serde(default)]
    pub domain: String,
}

impl InstanceConfig {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
        }
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            name: default_instance_name(),
            domain: String::new(),
        }
    }
}

fn default_instance_name() -> String {
    "default".to_string()
}
