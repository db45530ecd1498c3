use clap::Parser;
use remoteip_dns_backend::{register_builtin, BackendRegistry, ZoneBackend};
use remoteip_dns_domain::{BackendQuery, Config, RecordType};
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "remoteip-dns")]
#[command(version)]
#[command(about = "Answers a query through a configured remoteip backend instance")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Backend instance to query
    #[arg(short = 'i', long, default_value = "default")]
    instance: String,

    /// Record type of the query (A, ANY, ...)
    qtype: RecordType,

    /// Name being queried
    qname: String,

    /// Client address the answer should echo
    client_addr: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    bootstrap::init_logging(&config);

    info!("Starting remoteip-dns v{}", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    let mut registry = BackendRegistry::new();
    register_builtin(&mut registry);

    let instance = config.instance(&cli.instance).ok_or_else(|| {
        anyhow::anyhow!("No instance named '{}' in configuration", cli.instance)
    })?;
    let mut backend = registry.make("remoteip", instance)?;

    // One host dispatch cycle: lookup, then drain the answers.
    let query = BackendQuery::new(cli.qname, cli.qtype, cli.client_addr);
    backend.lookup(&query);

    while let Some(record) = backend.next_answer() {
        println!(
            "{}\t{}\tIN\t{}\t{}",
            record.qname, record.ttl, record.record_type, record.content
        );
    }

    Ok(())
}
