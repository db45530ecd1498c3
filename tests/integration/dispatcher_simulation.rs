//! Simulates the host dispatcher contract: one `lookup` per incoming query,
//! then `next_answer` drained until `None`, per instance, sequentially.

use remoteip_dns_backend::{register_builtin, BackendRegistry, ZoneBackend};
use remoteip_dns_domain::{AnswerRecord, BackendQuery, Config, RecordType};

fn build_instances(config: &Config) -> Vec<(String, Box<dyn ZoneBackend>)> {
    let mut registry = BackendRegistry::new();
    register_builtin(&mut registry);

    config
        .backend
        .instances
        .iter()
        .map(|instance| {
            let backend = registry
                .make("remoteip", instance)
                .expect("configured instances construct");
            (instance.name.clone(), backend)
        })
        .collect()
}

fn dispatch(backend: &mut dyn ZoneBackend, query: &BackendQuery) -> Vec<AnswerRecord> {
    backend.lookup(query);

    let mut answers = Vec::new();
    while let Some(record) = backend.next_answer() {
        answers.push(record);
    }
    answers
}

fn two_instance_config() -> Config {
    let toml_str = r#"
        [[backend.instances]]
        name = "default"
        domain = "whoami.example."

        [[backend.instances]]
        name = "lan"
        domain = "myip.lan."
    "#;
    let config: Config = toml::from_str(toml_str).unwrap();
    config.validate().unwrap();
    config
}

#[test]
fn test_each_instance_answers_only_its_own_domain() {
    let config = two_instance_config();
    let mut instances = build_instances(&config);

    let query = BackendQuery::new("myip.lan.", RecordType::A, "198.51.100.5");
    for (name, backend) in instances.iter_mut() {
        let answers = dispatch(backend.as_mut(), &query);
        if name == "lan" {
            assert_eq!(answers.len(), 1);
            assert_eq!(&*answers[0].qname, "myip.lan.");
            assert_eq!(&*answers[0].content, "198.51.100.5");
        } else {
            assert!(answers.is_empty(), "instance '{}' must stay silent", name);
        }
    }
}

#[test]
fn test_sequential_queries_reuse_one_instance() {
    let config = two_instance_config();
    let (_, mut backend) = build_instances(&config).remove(0);

    // Miss, hit, miss, hit: the slot state never leaks across queries.
    let miss = BackendQuery::new("other.example.", RecordType::A, "192.0.2.1");
    let hit_one = BackendQuery::new("whoami.example.", RecordType::ANY, "192.0.2.1");
    let hit_two = BackendQuery::new("WHOAMI.example.", RecordType::A, "192.0.2.2");

    assert!(dispatch(backend.as_mut(), &miss).is_empty());

    let answers = dispatch(backend.as_mut(), &hit_one);
    assert_eq!(answers.len(), 1);
    assert_eq!(&*answers[0].content, "192.0.2.1");

    assert!(dispatch(backend.as_mut(), &miss).is_empty());

    let answers = dispatch(backend.as_mut(), &hit_two);
    assert_eq!(answers.len(), 1);
    assert_eq!(&*answers[0].content, "192.0.2.2");
    assert_eq!(answers[0].ttl, 0);
}

#[test]
fn test_concrete_host_scenario() {
    let config = two_instance_config();
    let (_, mut backend) = build_instances(&config).remove(0);

    let answers = dispatch(
        backend.as_mut(),
        &BackendQuery::new("WHOAMI.EXAMPLE.", RecordType::ANY, "198.51.100.5"),
    );
    assert_eq!(answers.len(), 1);
    let record = &answers[0];
    assert_eq!(&*record.qname, "whoami.example.");
    assert_eq!(record.record_type, RecordType::A);
    assert_eq!(record.ttl, 0);
    assert!(record.authoritative);
    assert_eq!(&*record.content, "198.51.100.5");

    let answers = dispatch(
        backend.as_mut(),
        &BackendQuery::new("other.example.", RecordType::A, "198.51.100.5"),
    );
    assert!(answers.is_empty());
}
